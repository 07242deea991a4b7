//! compiler.rs - Turns a `Configuration` into a `CompiledMatcher`.
//!
//! Dispatch is two-way. If any named-shape flag is set, the highest-priority
//! shape's template is used and every general constraint is ignored.
//! Otherwise the general stage pipeline builds the pattern. The result is
//! handed to the matching engine together with the configured options.
//!
//! Compilation is a pure function of the configuration: no cache, no shared
//! mutable state, identical output for identical input.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};

use crate::config::Configuration;
use crate::engine::MatchOptions;
use crate::errors::PatternCompilationError;
use crate::matcher::CompiledMatcher;
use crate::pipeline;
use crate::shapes::{self, Shape};

/// Which generator a configuration dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeSelector {
    /// A named preset; general constraints are ignored.
    Named(Shape),
    /// The general constraint pipeline.
    General,
}

impl ShapeSelector {
    /// Picks the highest-priority requested shape, or `General` if none is requested.
    pub fn from_config(config: &Configuration) -> Self {
        match config.named_shape() {
            Some(shape) => ShapeSelector::Named(shape),
            None => ShapeSelector::General,
        }
    }
}

/// Produces the pattern text for `config` without handing it to an engine.
pub fn generate_pattern(config: &Configuration) -> String {
    match ShapeSelector::from_config(config) {
        ShapeSelector::Named(shape) => {
            debug!(
                target: "patternforge_core::compiler",
                "Named shape '{}' selected; general constraints ignored.",
                shape
            );
            shapes::shape_pattern(shape, config)
        }
        ShapeSelector::General => {
            report_inverted_bounds(config);
            pipeline::build_pattern(config)
        }
    }
}

/// Compiles `config` into a matcher.
///
/// Never fails on semantic grounds; the only error is the engine rejecting
/// the generated pattern (typically a malformed override or format string).
pub fn compile(config: &Configuration) -> Result<CompiledMatcher, PatternCompilationError> {
    let pattern = generate_pattern(config);
    let options = MatchOptions::new(config.case_insensitive, config.multi_line, config.dot_all);
    debug!(
        target: "patternforge_core::compiler",
        "Compiling pattern '{}' with options {:?}.",
        pattern,
        options
    );

    let matcher = CompiledMatcher::new(pattern, options)?;
    debug!(
        target: "patternforge_core::compiler",
        "Pattern compiled successfully (backtracking engine: {}).",
        matcher.is_backtracking()
    );
    Ok(matcher)
}

/// Logs inverted bounds. They are still passed through; the engine decides.
fn report_inverted_bounds(config: &Configuration) {
    if let (Some(min), Some(max)) = (config.min_length, config.max_length) {
        if min > max {
            warn!("min_length ({}) exceeds max_length ({}); passing through unchanged.", min, max);
        }
    }
    if let (Some(min), Some(max)) = (config.min_repetitions, config.max_repetitions) {
        if min > max {
            warn!("min_repetitions ({}) exceeds max_repetitions ({}); passing through unchanged.", min, max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PatternError;
    use anyhow::Result;

    #[test]
    fn test_selector_general_without_flags() {
        let config = Configuration::builder().digits().build();
        assert_eq!(ShapeSelector::from_config(&config), ShapeSelector::General);
    }

    #[test]
    fn test_selector_prefers_earlier_shape() {
        let config = Configuration::builder()
            .shape(Shape::Longitude)
            .shape(Shape::HexColor)
            .build();
        assert_eq!(ShapeSelector::from_config(&config), ShapeSelector::Named(Shape::HexColor));
    }

    #[test]
    fn test_named_shape_ignores_general_constraints() {
        let plain = Configuration::builder().shape(Shape::Ipv4).build();
        let noisy = Configuration::builder()
            .shape(Shape::Ipv4)
            .digits()
            .length_between(1, 2)
            .prefix("x")
            .custom_pattern("zzz")
            .build();
        assert_eq!(generate_pattern(&plain), generate_pattern(&noisy));
    }

    #[test]
    fn test_options_are_not_in_pattern_text() -> Result<()> {
        let config = Configuration::builder()
            .letters()
            .case_insensitive()
            .multi_line()
            .dot_all()
            .build();
        let matcher = compile(&config)?;
        assert_eq!(matcher.pattern(), "^[a-zA-Z]+$");
        assert!(matcher.case_insensitive() && matcher.multi_line() && matcher.dot_all() && matcher.unicode());
        Ok(())
    }

    #[test]
    fn test_inverted_bounds_reach_the_engine_unvalidated() {
        let config = Configuration::builder().length_between(5, 3).build();
        assert_eq!(generate_pattern(&config), "^.{5,3}$");
        assert!(matches!(compile(&config), Err(PatternError::Compilation { .. })));
    }

    #[test]
    fn test_bad_override_is_compilation_error() {
        let config = Configuration::builder().custom_pattern("([a-z]").build();
        match compile(&config) {
            Err(PatternError::Compilation { pattern, .. }) => assert_eq!(pattern, "^([a-z]$"),
            other => panic!("expected compilation error, got {:?}", other),
        }
    }
}
