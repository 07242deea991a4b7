//! Translates human date/time format strings into pattern fragments.
//!
//! Translation is plain substring replacement of fixed, case-sensitive token
//! spellings, first occurrence of each token only. Anything that is not a
//! token, separators included, is copied into the pattern unchanged.

use log::debug;

/// A fixed token spelling and the fragment that replaces it.
pub type TokenTable = &'static [(&'static str, &'static str)];

/// Four-digit year, two-digit month, two-digit day of month.
pub const DATE_TOKENS: TokenTable = &[
    ("YYYY", r"[0-9]{4}"),
    ("MM", r"(?:0[1-9]|1[0-2])"),
    ("DD", r"(?:0[1-9]|[12][0-9]|3[01])"),
];

/// 24-hour clock hour, minute, second.
pub const TIME_TOKENS: TokenTable = &[
    ("HH", r"(?:[01][0-9]|2[0-3])"),
    ("mm", r"[0-5][0-9]"),
    ("ss", r"[0-5][0-9]"),
];

/// Used when a date shape has no format.
pub const DEFAULT_DATE_FRAGMENT: &str = r"[0-9]{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01])";

/// Used when a time shape has no format.
pub const DEFAULT_TIME_FRAGMENT: &str = r"(?:[01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]";

/// Replaces the first occurrence of each token in `format`, in table order.
///
/// No fragment in either table contains a later token's spelling, so earlier
/// substitutions are never rewritten by later ones.
pub fn translate(format: &str, tokens: TokenTable) -> String {
    let translated = tokens
        .iter()
        .fold(format.to_string(), |acc, (token, fragment)| acc.replacen(token, fragment, 1));
    debug!("Translated format '{}' into '{}'.", format, translated);
    translated
}

/// Date fragment for an optional format; the fixed year-month-day fragment when absent.
pub fn date_fragment(format: Option<&str>) -> String {
    match format {
        Some(f) => translate(f, DATE_TOKENS),
        None => DEFAULT_DATE_FRAGMENT.to_string(),
    }
}

/// Time fragment for an optional format; the fixed hour:minute:second fragment when absent.
pub fn time_fragment(format: Option<&str>) -> String {
    match format {
        Some(f) => translate(f, TIME_TOKENS),
        None => DEFAULT_TIME_FRAGMENT.to_string(),
    }
}
