// File: patternforge-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use: compile a configuration and match
//! against it in a single call, without holding on to the `CompiledMatcher`.

use anyhow::{Context, Result};
use crate::compiler::compile;
use crate::config::Configuration;

/// Compiles `config` and tests `input` against it.
///
/// # Arguments
///
/// * `config` - The configuration describing the accepted shape.
/// * `input` - The string to test.
pub fn headless_is_match(config: &Configuration, input: &str) -> Result<bool> {
    let matcher = compile(config).context("Failed to compile configuration")?;
    Ok(matcher.is_match(input)?)
}

/// Compiles `config` once and keeps the inputs that match, in order.
pub fn headless_filter<'a, I>(config: &Configuration, inputs: I) -> Result<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher = compile(config).context("Failed to compile configuration")?;
    let mut kept = Vec::new();
    for input in inputs {
        if matcher.is_match(input)? {
            kept.push(input);
        }
    }
    Ok(kept)
}
