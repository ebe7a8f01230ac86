//! Static template diagnostics.
//!
//! Lint warnings surface problems that resolution deliberately swallows:
//! marker text that fails the grammar, unknown operator names, mistyped
//! arguments. Intended for CI tooling over translation files; `resolve`
//! never consults them.

use thiserror::Error;

use crate::interpreter::ops::Operator;
use crate::parser::{
    ArgTag, BlockSegment, CallExpr, CaseLabel, InterpSegment, parse_blocks, parse_interpolations,
};

/// A diagnostic for one template string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LintWarning {
    /// A `[[~` opener is present but the text does not match the block
    /// grammar, so it will pass through resolution verbatim.
    #[error("text containing '[[~' does not match the conditional block grammar")]
    MalformedBlock,

    /// A `{{` opener is present but the text does not match the
    /// interpolation grammar.
    #[error("text containing '{{{{' does not match the interpolation grammar")]
    MalformedInterpolation,

    /// A case label calls a function that is not in the catalogue. Such a
    /// case is always skipped at resolution time.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        name: String,
        /// Close catalogue names, best match first.
        suggestions: Vec<String>,
    },

    /// A function call supplies fewer arguments than the function requires.
    #[error("function '{function}' expects {expected} argument(s), got {got}")]
    ArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },

    /// An argument's type tag is not accepted at its position (1-based).
    #[error("function '{function}' does not accept a '{tag}' argument in position {position}")]
    ArgumentType {
        function: String,
        position: usize,
        tag: ArgTag,
    },
}

/// Lint one template string.
pub fn lint_template(template: &str) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    for segment in parse_blocks(template) {
        match segment {
            BlockSegment::Literal(text) => {
                if text.contains("[[~") {
                    warnings.push(LintWarning::MalformedBlock);
                }
                check_interpolations(&text, &mut warnings);
            }
            BlockSegment::Block(block) => {
                for arm in &block.arms {
                    if let CaseLabel::Call(call) = &arm.label {
                        check_call(call, &mut warnings);
                    }
                    check_interpolations(&arm.text, &mut warnings);
                }
            }
        }
    }

    warnings
}

/// Validate one function call against the operator catalogue.
fn check_call(call: &CallExpr, warnings: &mut Vec<LintWarning>) {
    let Some(op) = Operator::from_name(&call.name) else {
        warnings.push(LintWarning::UnknownFunction {
            name: call.name.clone(),
            suggestions: compute_suggestions(&call.name, Operator::names()),
        });
        return;
    };

    if call.args.len() < op.arity() {
        warnings.push(LintWarning::ArgumentCount {
            function: call.name.clone(),
            expected: op.arity(),
            got: call.args.len(),
        });
        return;
    }

    for (position, arg) in call.args.iter().enumerate() {
        if !op.accepts(position, arg.tag()) {
            warnings.push(LintWarning::ArgumentType {
                function: call.name.clone(),
                position: position + 1,
                tag: arg.tag(),
            });
        }
    }
}

/// Flag `{{` openers left as literal text after the interpolation scan.
fn check_interpolations(text: &str, warnings: &mut Vec<LintWarning>) {
    for segment in parse_interpolations(text) {
        if let InterpSegment::Literal(literal) = segment
            && literal.contains("{{")
        {
            warnings.push(LintWarning::MalformedInterpolation);
        }
    }
}

/// Compute "did you mean" suggestions for an unknown name.
///
/// Uses Jaro-Winkler similarity against the candidate list; returns up to
/// three candidates scoring at least 0.7, best first.
pub fn compute_suggestions(input: &str, candidates: &[&str]) -> Vec<String> {
    let upper = input.to_ascii_uppercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(&upper, candidate), *candidate))
        .filter(|(score, _)| *score >= 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
