//! Flattening of nested translation trees into dot-keyed maps.

use std::collections::HashMap;

use crate::types::Value;

/// Flatten a nested tree into a single-level map using dot notation.
///
/// Object properties become `parent.child` keys, sequence elements become
/// `parent.index` keys (0-based), and every scalar leaf is stringified.
/// Map keys are visited in sorted order so the walk is deterministic.
///
/// Cyclic input cannot be constructed from owned `Value` trees, so no cycle
/// detection is needed.
///
/// # Example
///
/// ```
/// use lingual::{Value, flatten};
/// use std::collections::HashMap;
///
/// let tree: Value = serde_json::from_str(r#"{"a": {"b": ["c", "d"]}}"#).unwrap();
/// let flat = flatten(&tree);
/// assert_eq!(flat["a.b.0"], "c");
/// assert_eq!(flat["a.b.1"], "d");
/// ```
pub fn flatten(tree: &Value) -> HashMap<String, String> {
    let mut flat = HashMap::new();
    walk(tree, "", &mut flat);
    flat
}

/// Recursive walker: descends into maps and lists, records scalar leaves.
fn walk(value: &Value, path: &str, out: &mut HashMap<String, String>) {
    match value {
        Value::Map(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                walk(&map[key.as_str()], &join(path, key), out);
            }
        }
        Value::List(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(item, &join(path, &index.to_string()), out);
            }
        }
        scalar => {
            out.insert(path.to_string(), scalar.to_string());
        }
    }
}

/// Join a parent path and a child segment with a dot.
fn join(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}
