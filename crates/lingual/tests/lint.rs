//! Integration tests for static template diagnostics.

use lingual::interpreter::{LintWarning, compute_suggestions, lint_template};
use lingual::parser::ArgTag;

// =============================================================================
// Clean templates
// =============================================================================

#[test]
fn well_formed_template_has_no_warnings() {
    let template =
        "You have [[~ {count} 1: `one {{thing}}` | default: `{{count}} things` ]] today";
    assert!(lint_template(template).is_empty());
}

#[test]
fn plain_text_has_no_warnings() {
    assert!(lint_template("nothing to see here").is_empty());
}

// =============================================================================
// Malformed syntax
// =============================================================================

#[test]
fn unclosed_block_is_flagged() {
    let warnings = lint_template("[[~ {count} 1: `one` ");
    assert_eq!(warnings, vec![LintWarning::MalformedBlock]);
}

#[test]
fn unclosed_interpolation_is_flagged() {
    let warnings = lint_template("Hello {{name");
    assert_eq!(warnings, vec![LintWarning::MalformedInterpolation]);
}

#[test]
fn malformed_interpolation_inside_branch_is_flagged() {
    let warnings = lint_template("[[~ {n} 1: `broken {{marker` | default: `ok` ]]");
    assert_eq!(warnings, vec![LintWarning::MalformedInterpolation]);
}

// =============================================================================
// Function-call validation
// =============================================================================

#[test]
fn unknown_function_suggests_close_names() {
    let warnings = lint_template("[[~ {age} GTEE(num:18): `adult` | default: `minor` ]]");
    assert_eq!(warnings.len(), 1);
    let LintWarning::UnknownFunction { name, suggestions } = &warnings[0] else {
        panic!("expected an unknown-function warning, got {warnings:?}");
    };
    assert_eq!(name, "GTEE");
    assert_eq!(suggestions.first().map(String::as_str), Some("GTE"));
}

#[test]
fn missing_argument_is_flagged() {
    let warnings = lint_template("[[~ {age} BT(num:12): `teen` | default: `other` ]]");
    assert_eq!(
        warnings,
        vec![LintWarning::ArgumentCount {
            function: "BT".to_string(),
            expected: 2,
            got: 1,
        }]
    );
}

#[test]
fn rejected_argument_tag_is_flagged() {
    let warnings = lint_template("[[~ {fruit} IN(num:3): `yes` | default: `no` ]]");
    assert_eq!(
        warnings,
        vec![LintWarning::ArgumentType {
            function: "IN".to_string(),
            position: 1,
            tag: ArgTag::Num,
        }]
    );
}

#[test]
fn multiple_problems_are_all_reported() {
    let template = "[[~ {x} NOPE(num:1): `a` | IN(bool:true): `b` | default: `c` ]] {{open";
    let warnings = lint_template(template);
    assert_eq!(warnings.len(), 3);
    assert!(matches!(
        warnings[0],
        LintWarning::UnknownFunction { .. }
    ));
    assert!(matches!(warnings[1], LintWarning::ArgumentType { .. }));
    assert_eq!(warnings[2], LintWarning::MalformedInterpolation);
}

// =============================================================================
// Suggestion scoring
// =============================================================================

#[test]
fn suggestions_are_case_insensitive_and_capped() {
    let names = ["GT", "GTE", "NGT", "NGTE", "LT", "LTE"];
    let suggestions = compute_suggestions("gte", &names);
    assert!(suggestions.len() <= 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("GTE"));
}

#[test]
fn distant_input_gets_no_suggestions() {
    let suggestions = compute_suggestions("ZZZZZZ", &["GT", "EQ", "IN"]);
    assert!(suggestions.is_empty());
}
