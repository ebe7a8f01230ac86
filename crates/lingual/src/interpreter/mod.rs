//! Evaluation engine for the translation DSL.
//!
//! This module turns parsed templates into final strings: it evaluates
//! function-call case labels against the operator catalogue, picks winning
//! conditional branches, and substitutes interpolation markers.

mod case;
mod lint;
mod ops;
mod render;

pub use case::evaluate_call;
pub use lint::{LintWarning, compute_suggestions, lint_template};
pub use ops::Operator;
pub use render::{FALLBACK_KEY_MISSING, NO_VALUE, apply_conditionals, apply_interpolations, render};
