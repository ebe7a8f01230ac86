//! Integration tests for dotted-path lookup into an options bag.

use std::collections::HashMap;

use lingual::{Value, lookup};
use serde_json::json;

fn bag(value: serde_json::Value) -> HashMap<String, Value> {
    match serde_json::from_value(value).unwrap() {
        Value::Map(map) => map,
        other => panic!("expected a JSON object, got {other:?}"),
    }
}

// =============================================================================
// Basic walking
// =============================================================================

#[test]
fn lookup_top_level_key() {
    let opts = bag(json!({"name": "John Doe"}));
    assert_eq!(lookup(&opts, "name").unwrap().to_string(), "John Doe");
}

#[test]
fn lookup_nested_map() {
    let opts = bag(json!({"user": {"profile": {"name": "Ada"}}}));
    assert_eq!(
        lookup(&opts, "user.profile.name").unwrap().to_string(),
        "Ada"
    );
}

#[test]
fn lookup_numeric_segment_indexes_lists() {
    let opts = bag(json!({"items": ["zero", "one", "two"]}));
    assert_eq!(lookup(&opts, "items.1").unwrap().to_string(), "one");
}

#[test]
fn lookup_list_of_maps() {
    let opts = bag(json!({"users": [{"name": "Ada"}, {"name": "Grace"}]}));
    assert_eq!(lookup(&opts, "users.1.name").unwrap().to_string(), "Grace");
}

// =============================================================================
// Failure: first missing segment wins
// =============================================================================

#[test]
fn lookup_missing_top_level_key() {
    let opts = bag(json!({"name": "x"}));
    assert!(lookup(&opts, "age").is_none());
}

#[test]
fn lookup_missing_intermediate_segment() {
    let opts = bag(json!({"user": {"age": 20}}));
    assert!(lookup(&opts, "user.name").is_none());
    assert!(lookup(&opts, "account.user.name").is_none());
}

#[test]
fn lookup_index_out_of_range() {
    let opts = bag(json!({"items": ["only"]}));
    assert!(lookup(&opts, "items.1").is_none());
}

#[test]
fn lookup_cannot_descend_into_scalar() {
    let opts = bag(json!({"count": 3}));
    assert!(lookup(&opts, "count.value").is_none());
}

#[test]
fn lookup_non_numeric_segment_on_list() {
    let opts = bag(json!({"items": ["a", "b"]}));
    assert!(lookup(&opts, "items.first").is_none());
}
