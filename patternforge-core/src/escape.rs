//! escape.rs - Literal-substring quoting for generated patterns.
//!
//! Every caller-supplied literal (prefix, suffix, inclusion/exclusion entries,
//! allowed/disallowed words) goes through here before being spliced into
//! pattern text. The output is accepted by both the `regex` and `fancy_regex`
//! parsers, whichever ends up compiling the pattern.
//!
//! License: MIT OR APACHE 2.0

/// Escapes every matching-syntax metacharacter in `literal`.
pub fn escape_literal(literal: &str) -> String {
    fancy_regex::escape(literal).into_owned()
}

/// Escapes each literal and joins them into a bare alternation (`a|b|c`).
pub fn escaped_alternation<S: AsRef<str>>(literals: &[S]) -> String {
    literals
        .iter()
        .map(|l| escape_literal(l.as_ref()))
        .collect::<Vec<String>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(escape_literal("abc123"), "abc123");
    }

    #[test]
    fn test_metacharacters_are_quoted() {
        let escaped = escape_literal("a.b*c(d)");
        assert_eq!(escaped, r"a\.b\*c\(d\)");
        let re = regex::Regex::new(&format!("^{}$", escaped)).unwrap();
        assert!(re.is_match("a.b*c(d)"));
        assert!(!re.is_match("aXbbc(d)"));
    }

    #[test]
    fn test_alternation_escapes_each_entry() {
        let alt = escaped_alternation(&["a+b", "c|d"]);
        assert_eq!(alt, r"a\+b|c\|d");
    }
}
