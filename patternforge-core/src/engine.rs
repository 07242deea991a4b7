// patternforge-core/src/engine.rs
//! Adaptive wrapper over the host matching engines.
//!
//! Generated patterns are first compiled with the `regex` crate, which is fast
//! and never backtracks. Lookaround assertions (inclusion/exclusion lists,
//! disallowed words) are outside what `regex` supports, so any pattern it
//! rejects is rebuilt with `fancy_regex`. Only when both reject the text does
//! compilation fail.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::PatternError;

/// Compiled-program size limit handed to both engines (10 MB).
pub const SIZE_LIMIT: usize = 10 * (1 << 20);

/// Maximum backtracking steps before the fallback engine gives up on an input.
pub const BACKTRACK_LIMIT: usize = 1_000_000;

/// The four matching options carried alongside the pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MatchOptions {
    /// Letters match regardless of case.
    pub case_insensitive: bool,
    /// `^`/`$` also match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches newlines.
    pub dot_all: bool,
    /// Always on; input is treated as Unicode text.
    pub unicode: bool,
}

impl MatchOptions {
    /// Builds options with Unicode mode on.
    pub fn new(case_insensitive: bool, multi_line: bool, dot_all: bool) -> Self {
        Self {
            case_insensitive,
            multi_line,
            dot_all,
            unicode: true,
        }
    }

    /// The options as an inline flag group, e.g. `(?is)`. Empty if no flag is set.
    pub fn inline_flags(&self) -> String {
        let flags: String = [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, flag)| *flag)
        .collect();

        if flags.is_empty() {
            String::new()
        } else {
            format!("(?{})", flags)
        }
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::new(false, false, false)
    }
}

/// A compiled pattern in whichever engine accepted it.
#[derive(Debug, Clone)]
pub enum MatchEngine {
    /// Compiled by `regex`.
    Basic(regex::Regex),
    /// Compiled by `fancy_regex` after `regex` rejected the pattern.
    Fancy(fancy_regex::Regex),
}

impl MatchEngine {
    /// Compiles `pattern` with `options`, trying `regex` first.
    pub fn build(pattern: &str, options: &MatchOptions) -> Result<Self, PatternError> {
        let basic = regex::RegexBuilder::new(pattern)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_all)
            .unicode(options.unicode)
            .size_limit(SIZE_LIMIT)
            .build();

        match basic {
            Ok(regex) => Ok(MatchEngine::Basic(regex)),
            Err(basic_err) => {
                debug!(
                    "Pattern '{}' rejected by regex ({}); retrying with fancy_regex.",
                    pattern,
                    basic_err
                );
                // fancy_regex takes the options as inline flags.
                let flagged = format!("{}{}", options.inline_flags(), pattern);
                fancy_regex::RegexBuilder::new(&flagged)
                    .backtrack_limit(BACKTRACK_LIMIT)
                    .delegate_size_limit(SIZE_LIMIT)
                    .build()
                    .map(MatchEngine::Fancy)
                    .map_err(|fancy_err| {
                        // fancy_regex reports delegate parse failures without
                        // detail; the regex diagnostic names the actual problem.
                        PatternError::compilation(
                            pattern,
                            format!("{} (fancy_regex: {})", basic_err, fancy_err),
                        )
                    })
            }
        }
    }

    pub fn is_match(&self, text: &str) -> Result<bool, PatternError> {
        match self {
            MatchEngine::Basic(re) => Ok(re.is_match(text)),
            MatchEngine::Fancy(re) => re
                .is_match(text)
                .map_err(|e| PatternError::MatchExecution(e.to_string())),
        }
    }

    /// Byte range of the leftmost match.
    pub fn find(&self, text: &str) -> Result<Option<(usize, usize)>, PatternError> {
        match self {
            MatchEngine::Basic(re) => Ok(re.find(text).map(|m| (m.start(), m.end()))),
            MatchEngine::Fancy(re) => re
                .find(text)
                .map(|found| found.map(|m| (m.start(), m.end())))
                .map_err(|e| PatternError::MatchExecution(e.to_string())),
        }
    }

    pub fn is_backtracking(&self) -> bool {
        matches!(self, MatchEngine::Fancy(_))
    }
}
