//! Configuration management for `patternforge-core`.
//!
//! This module defines the `Configuration` record that describes what a string
//! must look like: character classes, matching modes, length and repetition
//! bounds, literal affixes, word lists and named shape presets. It handles
//! YAML/JSON deserialization and offers a consuming builder for programmatic use.
//!
//! Loading never validates bounds or lists. The compiler is permissive and
//! only the matching engine can reject a configuration.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::shapes::Shape;

/// Every constraint a caller may request.
///
/// All booleans default to `false`, all optional bounds and strings to `None`
/// and all lists to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    /// Adds ASCII digits to the character class.
    pub include_digits: bool,
    /// Adds ASCII letters to the character class.
    pub include_letters: bool,
    /// Adds whitespace to the character class.
    pub include_whitespace: bool,
    /// Adds the fixed punctuation set to the character class.
    pub include_special: bool,
    /// Adds the Cyrillic script to the character class.
    pub include_extended_script: bool,

    /// Case-insensitive matching. Like the other mode flags, passed to the
    /// engine as an option and never written into the pattern text.
    pub case_insensitive: bool,
    /// `^`/`$` also match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches newlines.
    pub dot_all: bool,

    /// Replaces all generated content when non-empty.
    pub custom_pattern: Option<String>,

    /// Selects the email shape.
    pub is_email: bool,
    /// Selects the http(s) URL shape.
    pub is_url: bool,
    /// Selects the phone number shape.
    pub is_phone: bool,
    /// Selects the dotted-quad IPv4 shape.
    pub is_ipv4: bool,
    /// Selects the IPv6 shape, compressed and IPv4-mapped forms included.
    pub is_ipv6: bool,
    /// Selects the `#rgb` / `#rrggbb` colour shape.
    pub is_hex_color: bool,
    /// Selects the date shape, shaped by `date_format`.
    pub is_date: bool,
    /// Selects the time shape, shaped by `time_format`.
    pub is_time: bool,
    /// Selects the latitude shape (-90 to 90).
    pub is_latitude: bool,
    /// Selects the longitude shape (-180 to 180).
    pub is_longitude: bool,
    /// Selects the credit-card shape, filtered by `supported_credit_cards`.
    pub is_credit_card: bool,

    /// Minimum character count. Replaces class and repetition work when set.
    pub min_length: Option<usize>,
    /// Maximum character count. Replaces class and repetition work when set.
    pub max_length: Option<usize>,

    /// Wins over `min_repetitions`/`max_repetitions` when set.
    pub exact_repetitions: Option<usize>,
    /// Lower repetition bound for the class unit; 0 when only a maximum is set.
    pub min_repetitions: Option<usize>,
    /// Upper repetition bound for the class unit; open when unset.
    pub max_repetitions: Option<usize>,

    /// Literal text required before the pattern.
    pub prefix: Option<String>,
    /// Literal text required after the pattern.
    pub suffix: Option<String>,

    /// Literals that must appear somewhere in the input.
    pub must_contain: Vec<String>,
    /// Literals that must not appear anywhere in the input.
    pub must_not_contain: Vec<String>,

    /// When non-empty, the input must be exactly one of these words.
    pub allowed_words: Vec<String>,
    /// When non-empty, the input must not contain any of these words.
    pub disallowed_words: Vec<String>,

    /// Human format such as `YYYY-MM-DD`, read only by the date shape.
    pub date_format: Option<String>,
    /// Human format such as `HH:mm:ss`, read only by the time shape.
    pub time_format: Option<String>,

    /// Brand identifiers (`visa`, `mastercard`, ...). Unknown entries are dropped at compile time.
    pub supported_credit_cards: Vec<String>,
}

impl Configuration {
    /// Starts a `ConfigurationBuilder` with every field at its default.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yml::from_str(text).context("Failed to parse YAML configuration")
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse JSON configuration")
    }

    /// Loads a configuration file. `.json` files are read as JSON, anything else as YAML.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading pattern configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: Configuration = if is_json {
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            serde_yml::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        };

        debug!("Loaded configuration from {} (named shape: {:?}).", path.display(), config.named_shape());
        Ok(config)
    }

    /// Whether the flag for `shape` is set, regardless of priority.
    pub fn requests(&self, shape: Shape) -> bool {
        match shape {
            Shape::Email => self.is_email,
            Shape::Url => self.is_url,
            Shape::Phone => self.is_phone,
            Shape::Ipv4 => self.is_ipv4,
            Shape::Ipv6 => self.is_ipv6,
            Shape::HexColor => self.is_hex_color,
            Shape::Date => self.is_date,
            Shape::Time => self.is_time,
            Shape::Latitude => self.is_latitude,
            Shape::Longitude => self.is_longitude,
            Shape::CreditCard => self.is_credit_card,
        }
    }

    /// The highest-priority named shape whose flag is set, if any.
    pub fn named_shape(&self) -> Option<Shape> {
        Shape::PRIORITY.iter().copied().find(|shape| self.requests(*shape))
    }

    /// The override pattern, treating an empty string as absent.
    pub fn override_pattern(&self) -> Option<&str> {
        self.custom_pattern.as_deref().filter(|p| !p.is_empty())
    }
}

/// Consuming builder for `Configuration`.
///
/// ```rust
/// use patternforge_core::Configuration;
///
/// let config = Configuration::builder()
///     .letters()
///     .digits()
///     .length_between(3, 5)
///     .build();
/// assert_eq!(config.min_length, Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    /// Adds ASCII digits to the character class.
    pub fn digits(mut self) -> Self {
        self.config.include_digits = true;
        self
    }

    /// Adds ASCII letters to the character class.
    pub fn letters(mut self) -> Self {
        self.config.include_letters = true;
        self
    }

    /// Adds whitespace to the character class.
    pub fn whitespace(mut self) -> Self {
        self.config.include_whitespace = true;
        self
    }

    /// Adds the punctuation set to the character class.
    pub fn special(mut self) -> Self {
        self.config.include_special = true;
        self
    }

    /// Adds the Cyrillic script to the character class.
    pub fn extended_script(mut self) -> Self {
        self.config.include_extended_script = true;
        self
    }

    /// Enables case-insensitive matching.
    pub fn case_insensitive(mut self) -> Self {
        self.config.case_insensitive = true;
        self
    }

    /// Enables multi-line anchors.
    pub fn multi_line(mut self) -> Self {
        self.config.multi_line = true;
        self
    }

    /// Lets `.` match newlines.
    pub fn dot_all(mut self) -> Self {
        self.config.dot_all = true;
        self
    }

    /// Sets the override pattern that replaces all generated content.
    pub fn custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.custom_pattern = Some(pattern.into());
        self
    }

    /// Sets the flag for a named shape. Several may be set; priority decides at compile time.
    pub fn shape(mut self, shape: Shape) -> Self {
        let flag = match shape {
            Shape::Email => &mut self.config.is_email,
            Shape::Url => &mut self.config.is_url,
            Shape::Phone => &mut self.config.is_phone,
            Shape::Ipv4 => &mut self.config.is_ipv4,
            Shape::Ipv6 => &mut self.config.is_ipv6,
            Shape::HexColor => &mut self.config.is_hex_color,
            Shape::Date => &mut self.config.is_date,
            Shape::Time => &mut self.config.is_time,
            Shape::Latitude => &mut self.config.is_latitude,
            Shape::Longitude => &mut self.config.is_longitude,
            Shape::CreditCard => &mut self.config.is_credit_card,
        };
        *flag = true;
        self
    }

    /// Sets the minimum character count.
    pub fn min_length(mut self, min: usize) -> Self {
        self.config.min_length = Some(min);
        self
    }

    /// Sets the maximum character count.
    pub fn max_length(mut self, max: usize) -> Self {
        self.config.max_length = Some(max);
        self
    }

    /// Sets both character-count bounds.
    pub fn length_between(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// Repeats the class unit exactly `count` times.
    pub fn exact_repetitions(mut self, count: usize) -> Self {
        self.config.exact_repetitions = Some(count);
        self
    }

    /// Sets the lower repetition bound.
    pub fn min_repetitions(mut self, min: usize) -> Self {
        self.config.min_repetitions = Some(min);
        self
    }

    /// Sets the upper repetition bound.
    pub fn max_repetitions(mut self, max: usize) -> Self {
        self.config.max_repetitions = Some(max);
        self
    }

    /// Requires a literal prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    /// Requires a literal suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.suffix = Some(suffix.into());
        self
    }

    /// Appends literals that must appear somewhere in the input.
    pub fn must_contain<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.must_contain.extend(literals.into_iter().map(Into::into));
        self
    }

    /// Appends literals that must not appear anywhere in the input.
    pub fn must_not_contain<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.must_not_contain.extend(literals.into_iter().map(Into::into));
        self
    }

    /// Appends words the whole input may be.
    pub fn allowed_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allowed_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Appends words the input must not contain.
    pub fn disallowed_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.disallowed_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Sets the date format, e.g. `YYYY-MM-DD`.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.config.date_format = Some(format.into());
        self
    }

    /// Sets the time format, e.g. `HH:mm:ss`.
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.config.time_format = Some(format.into());
        self
    }

    /// Appends brand identifiers to the credit-card filter.
    pub fn credit_cards<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.supported_credit_cards.extend(brands.into_iter().map(Into::into));
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Configuration {
        self.config
    }
}
