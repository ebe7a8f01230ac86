pub mod flatten;
pub mod interpreter;
pub mod parser;
pub mod path;
pub mod store;
pub mod types;

pub use crate::flatten::flatten;
pub use crate::path::lookup;
pub use interpreter::{
    FALLBACK_KEY_MISSING, LintWarning, NO_VALUE, Operator, compute_suggestions, lint_template,
    render,
};
pub use store::{NOT_FOUND, Translator};
pub use types::Value;

/// Creates a `HashMap<String, Value>` options bag from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans, or strings directly.
///
/// # Example
///
/// ```
/// use lingual::{options, Value};
///
/// let opts = options! { "count" => 3, "name" => "Alice" };
/// assert_eq!(opts.len(), 2);
/// assert_eq!(opts["count"], Value::Int(3));
/// assert_eq!(opts["name"], Value::String("Alice".to_string()));
/// ```
#[macro_export]
macro_rules! options {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
