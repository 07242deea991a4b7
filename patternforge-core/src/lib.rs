// patternforge-core/src/lib.rs
//! # PatternForge Core Library
//!
//! `patternforge-core` builds regular expressions from declarative constraints.
//! A caller describes what a string must look like (character classes, length
//! and repetition bounds, literal affixes, required or forbidden substrings,
//! word lists, or a named shape such as email, IPv6 or credit card) and gets
//! back one compiled matcher.
//!
//! The library is pure and stateless: compiling the same `Configuration` twice
//! yields the same pattern text and options, and nothing is cached.
//!
//! ## Modules
//!
//! * `config`: `Configuration`, its builder, and YAML/JSON loading.
//! * `shapes`: the named-shape registry, credit-card brands and date/time format tokens.
//! * `pipeline`: the ordered stages of the general constraint path.
//! * `escape`: literal quoting for caller-supplied substrings.
//! * `engine`: the adaptive `regex` / `fancy_regex` wrapper.
//! * `matcher`: `CompiledMatcher`, the compiled output.
//! * `compiler`: the `compile` entry point and shape dispatch.
//! * `headless`: one-shot compile-and-match helpers.
//! * `errors`: the `PatternError` enum.
//!
//! ## Precedence
//!
//! 1. A named shape, chosen by the fixed order in [`Shape::PRIORITY`], short-circuits
//!    every general constraint.
//! 2. Otherwise the stage pipeline runs: character class, lookarounds, repetition,
//!    length, prefix/suffix, word lists, override. Length bounds, allowed words and
//!    the override each discard what earlier stages built.
//!
//! ## Usage Example
//!
//! ```rust
//! use patternforge_core::{compile, Configuration};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = Configuration::builder()
//!         .must_contain(["abc"])
//!         .must_not_contain(["xyz"])
//!         .build();
//!
//!     let matcher = compile(&config)?;
//!     assert_eq!(matcher.pattern(), "^(?=.*abc)(?!.*xyz).*$");
//!     assert!(matcher.is_match("abcdef")?);
//!     assert!(!matcher.is_match("abcxyz")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! `compile` only fails when the matching engine rejects the generated text,
//! reported as [`PatternError::Compilation`]. Configuration loading returns
//! `anyhow::Result` with file context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod engine;
pub mod errors;
pub mod escape;
pub mod headless;
pub mod matcher;
pub mod pipeline;
pub mod shapes;

/// Re-exports the configuration record and its builder.
pub use config::{Configuration, ConfigurationBuilder};

/// Re-exports the compile entry point and dispatch selector.
pub use compiler::{compile, generate_pattern, ShapeSelector};

/// Re-exports the compiled output and its options.
pub use matcher::CompiledMatcher;
pub use engine::{MatchEngine, MatchOptions};

/// Re-exports the custom error types.
pub use errors::{PatternCompilationError, PatternError};

/// Re-exports the named-shape types.
pub use shapes::credit_card::CardBrand;
pub use shapes::Shape;

/// Re-exports the one-shot helpers.
pub use headless::{headless_filter, headless_is_match};
