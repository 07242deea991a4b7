//! The individual pipeline stages.

use crate::config::Configuration;
use crate::escape::{escape_literal, escaped_alternation};

pub const DIGITS: &str = "0-9";
pub const LETTERS: &str = "a-zA-Z";
pub const WHITESPACE: &str = r"\s";
/// Printable ASCII punctuation; `[`, `]`, `\` and `-` are escaped for use inside a bracket expression.
pub const SPECIAL: &str = r#"!@#$%^&*()_+=\[\]{};':"\\|,.<>/?\-"#;
pub const EXTENDED_SCRIPT: &str = r"\p{Cyrillic}";

/// Stands in for an empty base pattern so lookaheads precede something.
pub const MATCH_ANYTHING: &str = ".*";

/// Unions the requested character classes into `[...]+`, or `""` if none are requested.
pub fn character_class(_pattern: String, config: &Configuration) -> String {
    let members: String = [
        (config.include_digits, DIGITS),
        (config.include_letters, LETTERS),
        (config.include_whitespace, WHITESPACE),
        (config.include_special, SPECIAL),
        (config.include_extended_script, EXTENDED_SCRIPT),
    ]
    .iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, fragment)| *fragment)
    .collect();

    if members.is_empty() {
        String::new()
    } else {
        format!("[{}]+", members)
    }
}

/// Prepends a positive lookahead per required literal, then a negative one per forbidden literal.
pub fn lookaround(pattern: String, config: &Configuration) -> String {
    if config.must_contain.is_empty() && config.must_not_contain.is_empty() {
        return pattern;
    }

    let mut out = String::new();
    for literal in &config.must_contain {
        out.push_str(&format!("(?=.*{})", escape_literal(literal)));
    }
    for literal in &config.must_not_contain {
        out.push_str(&format!("(?!.*{})", escape_literal(literal)));
    }

    if pattern.is_empty() {
        out.push_str(MATCH_ANYTHING);
    } else {
        out.push_str(&pattern);
    }
    out
}

/// Wraps the pattern as a repeated non-capturing unit. An exact count wins over min/max.
pub fn repetition(pattern: String, config: &Configuration) -> String {
    if let Some(count) = config.exact_repetitions {
        return format!("(?:{}){{{}}}", pattern, count);
    }

    match (config.min_repetitions, config.max_repetitions) {
        (None, None) => pattern,
        (min, max) => format!("(?:{}){}", pattern, bounds(min, max)),
    }
}

/// Replaces the pattern with a raw character count when either length bound is set.
pub fn length(pattern: String, config: &Configuration) -> String {
    match (config.min_length, config.max_length) {
        (None, None) => pattern,
        (min, max) => format!(".{}", bounds(min, max)),
    }
}

/// Prepends the escaped prefix and appends the escaped suffix.
pub fn affix(pattern: String, config: &Configuration) -> String {
    let prefix = config.prefix.as_deref().map(escape_literal).unwrap_or_default();
    let suffix = config.suffix.as_deref().map(escape_literal).unwrap_or_default();
    format!("{}{}{}", prefix, pattern, suffix)
}

/// Allowed words replace the pattern; disallowed words prefix it with a negative lookahead.
pub fn word_constraint(pattern: String, config: &Configuration) -> String {
    let base = if config.allowed_words.is_empty() {
        pattern
    } else {
        format!("(?:{})", escaped_alternation(&config.allowed_words))
    };

    if config.disallowed_words.is_empty() {
        base
    } else {
        format!("(?!.*(?:{})){}", escaped_alternation(&config.disallowed_words), base)
    }
}

/// A non-empty custom pattern replaces everything built upstream.
pub fn override_pattern(pattern: String, config: &Configuration) -> String {
    match config.override_pattern() {
        Some(custom) => custom.to_string(),
        None => pattern,
    }
}

/// `{min,max}` with the lower bound defaulting to 0 and the upper left open.
fn bounds(min: Option<usize>, max: Option<usize>) -> String {
    let min = min.unwrap_or(0);
    match max {
        Some(max) => format!("{{{},{}}}", min, max),
        None => format!("{{{},}}", min),
    }
}
