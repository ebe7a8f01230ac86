//! Integration tests for the operator catalogue and case-expression
//! evaluation.

use std::collections::HashMap;

use lingual::interpreter::evaluate_call;
use lingual::parser::{Arg, CallExpr};
use lingual::{Operator, Value, options};
use serde_json::json;

fn bag(value: serde_json::Value) -> HashMap<String, Value> {
    match serde_json::from_value(value).unwrap() {
        Value::Map(map) => map,
        other => panic!("expected a JSON object, got {other:?}"),
    }
}

fn call(name: &str, args: Vec<Arg>) -> CallExpr {
    CallExpr {
        name: name.to_string(),
        args,
    }
}

// =============================================================================
// Ordering comparisons
// =============================================================================

#[test]
fn gt_and_friends_on_numbers() {
    let ten = Value::Int(10);
    let arg = [Value::Int(9)];
    assert!(Operator::Gt.apply(&ten, &arg));
    assert!(Operator::Gte.apply(&ten, &arg));
    assert!(!Operator::Lt.apply(&ten, &arg));
    assert!(!Operator::Lte.apply(&ten, &arg));
    assert!(!Operator::Ngt.apply(&ten, &arg));
    assert!(Operator::Nlt.apply(&ten, &arg));
}

#[test]
fn gte_is_inclusive() {
    assert!(Operator::Gte.apply(&Value::Int(18), &[Value::Int(18)]));
    assert!(!Operator::Gt.apply(&Value::Int(18), &[Value::Int(18)]));
}

#[test]
fn numeric_strings_coerce_for_ordering() {
    assert!(Operator::Gt.apply(&Value::String("10".to_string()), &[Value::Int(9)]));
}

#[test]
fn two_strings_compare_lexicographically() {
    let b = Value::String("b".to_string());
    assert!(Operator::Gt.apply(&b, &[Value::String("a".to_string())]));
    assert!(Operator::Lt.apply(&b, &[Value::String("c".to_string())]));
}

#[test]
fn incomparable_subject_fails_positive_and_holds_negated() {
    let subject = Value::String("abc".to_string());
    let arg = [Value::Int(5)];
    assert!(!Operator::Gt.apply(&subject, &arg));
    assert!(!Operator::Lte.apply(&subject, &arg));
    assert!(Operator::Ngt.apply(&subject, &arg));
    assert!(Operator::Nlte.apply(&subject, &arg));
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn eq_is_strict_across_kinds() {
    assert!(!Operator::Eq.apply(&Value::Int(5), &[Value::String("5".to_string())]));
    assert!(Operator::Neq.apply(&Value::Int(5), &[Value::String("5".to_string())]));
}

#[test]
fn eq_unifies_int_and_float() {
    assert!(Operator::Eq.apply(&Value::Int(5), &[Value::Float(5.0)]));
}

#[test]
fn eq_supports_booleans() {
    assert!(Operator::Eq.apply(&Value::Bool(true), &[Value::Bool(true)]));
    assert!(!Operator::Eq.apply(&Value::Bool(true), &[Value::Bool(false)]));
}

// =============================================================================
// Boolean combinations
// =============================================================================

#[test]
fn and_or_xor_use_truthiness() {
    let truthy = Value::Int(1);
    let falsy = Value::Int(0);
    assert!(Operator::And.apply(&truthy, &[Value::Bool(true)]));
    assert!(!Operator::And.apply(&falsy, &[Value::Bool(true)]));
    assert!(Operator::Or.apply(&falsy, &[Value::Bool(true)]));
    assert!(!Operator::Or.apply(&falsy, &[Value::String(String::new())]));
    assert!(Operator::Xor.apply(&truthy, &[Value::Bool(false)]));
    assert!(!Operator::Xor.apply(&truthy, &[Value::Bool(true)]));
}

// =============================================================================
// Between
// =============================================================================

#[test]
fn bt_bounds_are_exclusive() {
    let bounds = [Value::Int(12), Value::Int(18)];
    assert!(Operator::Bt.apply(&Value::Int(13), &bounds));
    assert!(!Operator::Bt.apply(&Value::Int(12), &bounds));
    assert!(!Operator::Bt.apply(&Value::Int(18), &bounds));
    assert!(Operator::Nbt.apply(&Value::Int(18), &bounds));
}

// =============================================================================
// Membership
// =============================================================================

#[test]
fn in_matches_list_elements() {
    let opts = bag(json!({"allowed": ["apple", "pear"]}));
    let expr = call("IN", vec![Arg::Key("allowed".to_string())]);
    assert_eq!(
        evaluate_call(&Value::String("pear".to_string()), &expr, &opts),
        Some(true)
    );
    assert_eq!(
        evaluate_call(&Value::String("plum".to_string()), &expr, &opts),
        Some(false)
    );
}

#[test]
fn nin_negates_membership() {
    let opts = bag(json!({"allowed": [1, 2, 3]}));
    let expr = call("NIN", vec![Arg::Key("allowed".to_string())]);
    assert_eq!(evaluate_call(&Value::Int(4), &expr, &opts), Some(true));
    assert_eq!(evaluate_call(&Value::Int(2), &expr, &opts), Some(false));
}

#[test]
fn in_on_string_checks_substring() {
    let opts = bag(json!({"letters": "abcdef"}));
    let expr = call("IN", vec![Arg::Key("letters".to_string())]);
    assert_eq!(
        evaluate_call(&Value::String("cde".to_string()), &expr, &opts),
        Some(true)
    );
}

// =============================================================================
// Call validation: skipped cases yield None
// =============================================================================

#[test]
fn unknown_function_is_skipped() {
    let expr = call("GREATER", vec![Arg::Num("1".to_string())]);
    assert_eq!(evaluate_call(&Value::Int(2), &expr, &options! {}), None);
}

#[test]
fn missing_argument_is_skipped() {
    let expr = call("BT", vec![Arg::Num("1".to_string())]);
    assert_eq!(evaluate_call(&Value::Int(2), &expr, &options! {}), None);
}

#[test]
fn rejected_argument_tag_is_skipped() {
    // IN only accepts key-tagged arguments
    let expr = call("IN", vec![Arg::Num("1".to_string())]);
    assert_eq!(evaluate_call(&Value::Int(1), &expr, &options! {}), None);

    // Ordering comparisons reject bool-tagged arguments
    let expr = call("GT", vec![Arg::Bool(true)]);
    assert_eq!(evaluate_call(&Value::Int(2), &expr, &options! {}), None);
}

#[test]
fn extra_argument_is_rejected() {
    let expr = call(
        "GT",
        vec![Arg::Num("1".to_string()), Arg::Num("2".to_string())],
    );
    assert_eq!(evaluate_call(&Value::Int(3), &expr, &options! {}), None);
}

#[test]
fn out_of_range_numeric_literal_is_skipped() {
    let expr = call("GT", vec![Arg::Num("99999999999999999999".to_string())]);
    assert_eq!(evaluate_call(&Value::Int(1), &expr, &options! {}), None);
}

#[test]
fn unresolved_key_argument_is_skipped() {
    let expr = call("GT", vec![Arg::Key("missing.path".to_string())]);
    assert_eq!(evaluate_call(&Value::Int(1), &expr, &options! {}), None);
}

#[test]
fn key_argument_resolves_against_options() {
    let opts = bag(json!({"limits": {"adult": 18}}));
    let expr = call("GTE", vec![Arg::Key("limits.adult".to_string())]);
    assert_eq!(evaluate_call(&Value::Int(21), &expr, &opts), Some(true));
    assert_eq!(evaluate_call(&Value::Int(17), &expr, &opts), Some(false));
}

#[test]
fn decimal_literal_parses_as_float() {
    let expr = call("GT", vec![Arg::Num("2.5".to_string())]);
    assert_eq!(evaluate_call(&Value::Int(3), &expr, &options! {}), Some(true));
    assert_eq!(evaluate_call(&Value::Int(2), &expr, &options! {}), Some(false));
}
