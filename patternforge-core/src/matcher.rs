//! matcher.rs - The compiled output of a configuration.
//!
//! A `CompiledMatcher` carries the generated pattern text, the four matching
//! options and the engine that accepted them. It is produced fresh by every
//! `compile` call and is cheap to clone.
//!
//! License: MIT OR APACHE 2.0

use sha2::{Digest, Sha256};
use std::fmt;

use crate::engine::{MatchEngine, MatchOptions};
use crate::errors::PatternError;

#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    pattern: String,
    options: MatchOptions,
    engine: MatchEngine,
}

impl CompiledMatcher {
    /// Hands `pattern` and `options` to the matching engine.
    pub fn new(pattern: String, options: MatchOptions) -> Result<Self, PatternError> {
        let engine = MatchEngine::build(&pattern, &options)?;
        Ok(Self {
            pattern,
            options,
            engine,
        })
    }

    /// The generated pattern text, without any option flags.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn case_insensitive(&self) -> bool {
        self.options.case_insensitive
    }

    pub fn multi_line(&self) -> bool {
        self.options.multi_line
    }

    pub fn dot_all(&self) -> bool {
        self.options.dot_all
    }

    pub fn unicode(&self) -> bool {
        self.options.unicode
    }

    /// True when the pattern needed the backtracking engine.
    pub fn is_backtracking(&self) -> bool {
        self.engine.is_backtracking()
    }

    pub fn is_match(&self, text: &str) -> Result<bool, PatternError> {
        self.engine.is_match(text)
    }

    /// Byte range of the leftmost match in `text`.
    pub fn find(&self, text: &str) -> Result<Option<(usize, usize)>, PatternError> {
        self.engine.find(text)
    }

    /// Hex SHA-256 of the pattern text and options.
    ///
    /// Compiling the same configuration always yields the same fingerprint, so
    /// callers can key their own caches on it.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.pattern.as_bytes());
        hasher.update([
            self.options.case_insensitive as u8,
            self.options.multi_line as u8,
            self.options.dot_all as u8,
            self.options.unicode as u8,
        ]);
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for CompiledMatcher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
