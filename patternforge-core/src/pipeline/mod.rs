//! General constraint pipeline, used when no named shape is selected.
//!
//! The pattern is built by an ordered list of stages. Each stage receives the
//! previous stage's output and the full configuration and returns new pattern
//! text. The final output is anchored at both ends.
//!
//! # Discard semantics
//!
//! Several stages throw away what came before them, and callers rely on it:
//!
//! * A length bound replaces the class/lookaround/repetition result with a raw
//!   "any character" count, so character classes no longer restrict the input.
//! * A non-empty allowed-words list replaces everything built so far.
//! * A non-empty override pattern replaces everything, including affixes and
//!   word lists. Upstream stages still run; their output is just dropped.
//!
//! License: MIT OR APACHE 2.0

pub mod stages;

use log::debug;

use crate::config::Configuration;

/// One pipeline step.
pub type Stage = fn(String, &Configuration) -> String;

/// The stages in execution order.
pub const STAGES: [(&str, Stage); 7] = [
    ("character_class", stages::character_class),
    ("lookaround", stages::lookaround),
    ("repetition", stages::repetition),
    ("length", stages::length),
    ("affix", stages::affix),
    ("word_constraint", stages::word_constraint),
    ("override", stages::override_pattern),
];

/// Runs every stage and returns the unanchored result.
pub fn run_stages(config: &Configuration) -> String {
    STAGES.iter().fold(String::new(), |pattern, (name, stage)| {
        let next = stage(pattern, config);
        debug!("Stage '{}' produced '{}'.", name, next);
        next
    })
}

/// Runs the pipeline and anchors the result with `^` and `$`.
pub fn build_pattern(config: &Configuration) -> String {
    format!("^{}$", run_stages(config))
}
