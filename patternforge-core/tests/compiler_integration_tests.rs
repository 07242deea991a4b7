// patternforge-core/tests/compiler_integration_tests.rs
use anyhow::Result;
use test_log::test; // Routes `log` output through `env_logger` for failing tests.

use patternforge_core::{compile, generate_pattern, Configuration, PatternError, Shape};

#[test]
fn test_email_round_trip() -> Result<()> {
    let matcher = compile(&Configuration::builder().shape(Shape::Email).build())?;
    assert!(matcher.is_match("example@example.com")?);
    assert!(!matcher.is_match("invalid-email")?);
    Ok(())
}

#[test]
fn test_length_bounds_round_trip() -> Result<()> {
    let matcher = compile(&Configuration::builder().length_between(3, 5).build())?;
    assert!(matcher.is_match("abc")?);
    assert!(matcher.is_match("abcde")?);
    assert!(!matcher.is_match("ab")?);
    assert!(!matcher.is_match("abcdef")?);
    Ok(())
}

#[test]
fn test_must_contain_round_trip() -> Result<()> {
    let config = Configuration::builder()
        .must_contain(["abc"])
        .must_not_contain(["xyz"])
        .build();
    let matcher = compile(&config)?;
    assert!(matcher.is_backtracking());
    assert!(matcher.is_match("abcdef")?);
    assert!(!matcher.is_match("abxyz")?);
    assert!(!matcher.is_match("abcxyz")?);
    assert!(!matcher.is_match("xyzabc")?);
    Ok(())
}

#[test]
fn test_credit_card_round_trip() -> Result<()> {
    let config = Configuration::builder()
        .shape(Shape::CreditCard)
        .credit_cards(["visa", "mastercard"])
        .build();
    let matcher = compile(&config)?;
    assert!(matcher.is_match("4111111111111111")?);
    assert!(matcher.is_match("5500000000000004")?);
    assert!(!matcher.is_match("340000000000009")?);
    Ok(())
}

#[test]
fn test_date_round_trip() -> Result<()> {
    let config = Configuration::builder()
        .shape(Shape::Date)
        .date_format("YYYY-MM-DD")
        .build();
    let matcher = compile(&config)?;
    assert!(matcher.is_match("2024-08-10")?);
    assert!(!matcher.is_match("10-08-2024")?);
    Ok(())
}

#[test]
fn test_latitude_round_trip() -> Result<()> {
    let matcher = compile(&Configuration::builder().shape(Shape::Latitude).build())?;
    assert!(matcher.is_match("37.7749")?);
    assert!(matcher.is_match("90.0000")?);
    assert!(!matcher.is_match("100.0000")?);
    Ok(())
}

#[test]
fn test_compilation_is_deterministic() -> Result<()> {
    let configs = vec![
        Configuration::default(),
        Configuration::builder().letters().digits().min_repetitions(2).build(),
        Configuration::builder().must_contain(["a"]).disallowed_words(["b"]).case_insensitive().build(),
        Configuration::builder().shape(Shape::CreditCard).build(),
        Configuration::builder().shape(Shape::Time).time_format("HH:mm").dot_all().build(),
    ];
    for config in configs {
        let first = compile(&config)?;
        let second = compile(&config)?;
        assert_eq!(first.pattern(), second.pattern());
        assert_eq!(first.options(), second.options());
        assert_eq!(first.fingerprint(), second.fingerprint());
    }
    Ok(())
}

#[test]
fn test_named_shape_precedence_over_every_pair() -> Result<()> {
    for (i, high) in Shape::PRIORITY.iter().enumerate() {
        for low in &Shape::PRIORITY[i + 1..] {
            let both = Configuration::builder().shape(*low).shape(*high).build();
            let only = Configuration::builder().shape(*high).build();
            assert_eq!(
                compile(&both)?.pattern(),
                compile(&only)?.pattern(),
                "{} should win over {}",
                high,
                low
            );
        }
    }
    Ok(())
}

#[test]
fn test_override_wins_over_general_constraints() -> Result<()> {
    let config = Configuration::builder()
        .digits()
        .special()
        .length_between(2, 8)
        .exact_repetitions(3)
        .prefix("pre")
        .suffix("post")
        .must_contain(["q"])
        .allowed_words(["one", "two"])
        .disallowed_words(["three"])
        .custom_pattern("[A-Z]{2}[0-9]{4}")
        .build();
    let matcher = compile(&config)?;
    assert_eq!(matcher.pattern(), "^[A-Z]{2}[0-9]{4}$");
    assert!(matcher.is_match("AB1234")?);
    assert!(!matcher.is_match("one")?);
    Ok(())
}

#[test]
fn test_length_ignores_character_class() -> Result<()> {
    let config = Configuration::builder().digits().length_between(2, 4).build();
    let matcher = compile(&config)?;
    assert!(matcher.is_match("ab")?);
    assert!(matcher.is_match("a b!")?);
    assert!(!matcher.is_match("12345")?);
    Ok(())
}

#[test]
fn test_character_classes_and_repetition() -> Result<()> {
    let config = Configuration::builder().letters().whitespace().build();
    let matcher = compile(&config)?;
    assert!(matcher.is_match("hello world")?);
    assert!(!matcher.is_match("hello 42")?);
    assert!(!matcher.is_match("")?);

    let config = Configuration::builder().digits().exact_repetitions(2).build();
    assert!(compile(&config)?.is_match("42")?);
    Ok(())
}

#[test]
fn test_prefix_and_suffix_are_literal() -> Result<()> {
    let config = Configuration::builder()
        .digits()
        .prefix("(+")
        .suffix(").")
        .build();
    let matcher = compile(&config)?;
    assert!(matcher.is_match("(+123).")?);
    assert!(!matcher.is_match("+123")?);
    assert!(!matcher.is_match("(+123)x")?);
    Ok(())
}

#[test]
fn test_allowed_and_disallowed_words() -> Result<()> {
    let config = Configuration::builder()
        .letters()
        .min_length(10)
        .allowed_words(["red", "green", "blue"])
        .build();
    let matcher = compile(&config)?;
    assert!(matcher.is_match("green")?);
    assert!(!matcher.is_match("purple")?);
    assert!(!matcher.is_match("redgreen")?);

    let config = Configuration::builder()
        .letters()
        .disallowed_words(["bad", "evil"])
        .build();
    let matcher = compile(&config)?;
    assert!(matcher.is_match("goodness")?);
    assert!(!matcher.is_match("notbadatall")?);
    assert!(!matcher.is_match("evil")?);
    Ok(())
}

#[test]
fn test_case_insensitive_option() -> Result<()> {
    let config = Configuration::builder()
        .allowed_words(["yes", "no"])
        .case_insensitive()
        .build();
    let matcher = compile(&config)?;
    assert!(matcher.is_match("YES")?);
    assert!(matcher.is_match("No")?);
    assert!(!matcher.is_match("maybe")?);
    Ok(())
}

#[test]
fn test_lookahead_with_case_insensitive_option() -> Result<()> {
    let config = Configuration::builder()
        .must_contain(["key"])
        .case_insensitive()
        .build();
    let matcher = compile(&config)?;
    assert!(matcher.is_backtracking());
    assert!(matcher.is_match("my KEY here")?);
    assert!(!matcher.is_match("nothing")?);
    Ok(())
}

#[test]
fn test_invalid_override_surfaces_engine_diagnostic() {
    let config = Configuration::builder().digits().custom_pattern("[z-a]").build();
    let err = compile(&config).unwrap_err();
    assert!(matches!(err, PatternError::Compilation { .. }));
    let message = err.diagnostic().unwrap_or_default();
    assert!(message.contains("invalid character class range"), "{}", message);

    let config = Configuration::builder().length_between(5, 3).build();
    let err = compile(&config).unwrap_err();
    let message = err.diagnostic().unwrap_or_default();
    assert!(message.contains("invalid repetition count range"), "{}", message);
}

#[test]
fn test_date_and_time_shapes_reject_non_ascii_digits() -> Result<()> {
    let date = compile(&Configuration::builder().shape(Shape::Date).date_format("YYYY-MM-DD").build())?;
    assert!(!date.is_match("٢٠٢٤-08-10")?);
    assert!(date.is_match("2024-08-10")?);

    let time = compile(&Configuration::builder().shape(Shape::Time).build())?;
    assert!(!time.is_match("1٣:0٥:00")?);
    assert!(time.is_match("13:05:00")?);
    Ok(())
}

#[test]
fn test_inverted_repetition_bounds_pass_through() {
    let config = Configuration::builder().digits().min_repetitions(4).max_repetitions(2).build();
    assert_eq!(generate_pattern(&config), "^(?:[0-9]+){4,2}$");
    let err = compile(&config).unwrap_err();
    let message = err.diagnostic().unwrap_or_default();
    assert!(message.contains("invalid repetition count range"), "{}", message);
}

#[test]
fn test_repetition_without_class_repeats_empty_unit() -> Result<()> {
    let config = Configuration::builder().exact_repetitions(3).build();
    let matcher = compile(&config)?;
    assert_eq!(matcher.pattern(), "^(?:){3}$");
    assert!(matcher.is_match("")?);
    assert!(!matcher.is_match("a")?);
    Ok(())
}

#[test]
fn test_unknown_format_tokens_pass_through() -> Result<()> {
    let config = Configuration::builder()
        .shape(Shape::Date)
        .date_format("YYYY/Q")
        .build();
    let matcher = compile(&config)?;
    assert_eq!(matcher.pattern(), r"^[0-9]{4}/Q$");
    assert!(matcher.is_match("2024/Q")?);
    Ok(())
}
