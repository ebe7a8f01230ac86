//! Dotted-path lookup into an options bag.

use std::collections::HashMap;

use crate::types::Value;

/// Resolve a dotted path against an options bag.
///
/// Splits the path on `.` and walks one segment at a time. Returns `None` as
/// soon as any intermediate segment is missing; there are no partial matches
/// or wildcards. Numeric segments index into sequences positionally.
///
/// # Example
///
/// ```
/// use lingual::{lookup, options};
///
/// let opts = options! { "user" => lingual::Value::Map(
///     [("name".to_string(), "Ada".into())].into_iter().collect()
/// ) };
/// assert_eq!(lookup(&opts, "user.name").unwrap().to_string(), "Ada");
/// assert!(lookup(&opts, "user.age").is_none());
/// ```
pub fn lookup<'a>(bag: &'a HashMap<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = bag.get(segments.next()?)?;
    for segment in segments {
        current = step(current, segment)?;
    }
    Some(current)
}

/// Descend one segment into a value.
fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Map(map) => map.get(segment),
        Value::List(items) => {
            let index: usize = segment.parse().ok()?;
            items.get(index)
        }
        _ => None,
    }
}
