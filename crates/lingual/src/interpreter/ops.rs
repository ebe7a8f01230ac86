//! The fixed catalogue of predicate operators usable in case labels.
//!
//! Operators form a closed enum rather than a dynamic name-to-closure table:
//! each variant carries its arity and accepted argument tags through match
//! dispatch, which preserves the "reject unknown or mistyped calls silently"
//! contract without any runtime lookup structure.

use std::cmp::Ordering;

use crate::parser::ArgTag;
use crate::types::Value;

/// A predicate operator. The conditional block's subject value is always the
/// implicit first operand; declared arguments fill the remaining positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// subject > arg
    Gt,
    /// subject >= arg
    Gte,
    /// !(subject > arg)
    Ngt,
    /// !(subject >= arg)
    Ngte,
    /// subject < arg
    Lt,
    /// subject <= arg
    Lte,
    /// !(subject < arg)
    Nlt,
    /// !(subject <= arg)
    Nlte,
    /// subject == arg (strict, supports booleans)
    Eq,
    /// subject != arg
    Neq,
    /// truthy(subject) && truthy(arg)
    And,
    /// truthy(subject) || truthy(arg)
    Or,
    /// truthy(subject) != truthy(arg)
    Xor,
    /// arg1 < subject < arg2, both bounds exclusive
    Bt,
    /// !(arg1 < subject < arg2)
    Nbt,
    /// subject is an element of the sequence resolved from arg
    In,
    /// subject is not an element of the sequence resolved from arg
    Nin,
}

/// Every operator name, for lint suggestions.
const NAMES: &[&str] = &[
    "GT", "GTE", "NGT", "NGTE", "LT", "LTE", "NLT", "NLTE", "EQ", "NEQ", "AND", "OR", "XOR", "BT",
    "NBT", "IN", "NIN",
];

impl Operator {
    /// Look up an operator by its template-facing name. Names are
    /// case-sensitive; anything unknown yields `None`.
    pub fn from_name(name: &str) -> Option<Operator> {
        match name {
            "GT" => Some(Operator::Gt),
            "GTE" => Some(Operator::Gte),
            "NGT" => Some(Operator::Ngt),
            "NGTE" => Some(Operator::Ngte),
            "LT" => Some(Operator::Lt),
            "LTE" => Some(Operator::Lte),
            "NLT" => Some(Operator::Nlt),
            "NLTE" => Some(Operator::Nlte),
            "EQ" => Some(Operator::Eq),
            "NEQ" => Some(Operator::Neq),
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            "XOR" => Some(Operator::Xor),
            "BT" => Some(Operator::Bt),
            "NBT" => Some(Operator::Nbt),
            "IN" => Some(Operator::In),
            "NIN" => Some(Operator::Nin),
            _ => None,
        }
    }

    /// The template-facing name of this operator.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Gt => "GT",
            Operator::Gte => "GTE",
            Operator::Ngt => "NGT",
            Operator::Ngte => "NGTE",
            Operator::Lt => "LT",
            Operator::Lte => "LTE",
            Operator::Nlt => "NLT",
            Operator::Nlte => "NLTE",
            Operator::Eq => "EQ",
            Operator::Neq => "NEQ",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::Bt => "BT",
            Operator::Nbt => "NBT",
            Operator::In => "IN",
            Operator::Nin => "NIN",
        }
    }

    /// All operator names.
    pub fn names() -> &'static [&'static str] {
        NAMES
    }

    /// Required declared-argument count (excluding the implicit subject).
    pub fn arity(&self) -> usize {
        match self {
            Operator::Bt | Operator::Nbt => 2,
            _ => 1,
        }
    }

    /// Whether `tag` is accepted at the given declared-argument position.
    /// Positions at or past the arity accept nothing.
    pub fn accepts(&self, position: usize, tag: ArgTag) -> bool {
        if position >= self.arity() {
            return false;
        }
        match self {
            Operator::Eq | Operator::Neq | Operator::And | Operator::Or | Operator::Xor => true,
            Operator::In | Operator::Nin => tag == ArgTag::Key,
            _ => tag != ArgTag::Bool,
        }
    }

    /// Apply this operator to a subject and its declared arguments.
    ///
    /// The caller guarantees `args.len() >= self.arity()`; extra arguments
    /// never reach this point because validation rejects them.
    pub fn apply(&self, subject: &Value, args: &[Value]) -> bool {
        match self {
            Operator::Gt => cmp_is(subject, &args[0], &[Ordering::Greater]),
            Operator::Gte => cmp_is(subject, &args[0], &[Ordering::Greater, Ordering::Equal]),
            Operator::Ngt => !cmp_is(subject, &args[0], &[Ordering::Greater]),
            Operator::Ngte => !cmp_is(subject, &args[0], &[Ordering::Greater, Ordering::Equal]),
            Operator::Lt => cmp_is(subject, &args[0], &[Ordering::Less]),
            Operator::Lte => cmp_is(subject, &args[0], &[Ordering::Less, Ordering::Equal]),
            Operator::Nlt => !cmp_is(subject, &args[0], &[Ordering::Less]),
            Operator::Nlte => !cmp_is(subject, &args[0], &[Ordering::Less, Ordering::Equal]),
            Operator::Eq => strict_eq(subject, &args[0]),
            Operator::Neq => !strict_eq(subject, &args[0]),
            Operator::And => subject.is_truthy() && args[0].is_truthy(),
            Operator::Or => subject.is_truthy() || args[0].is_truthy(),
            Operator::Xor => subject.is_truthy() != args[0].is_truthy(),
            Operator::Bt => {
                cmp_is(subject, &args[0], &[Ordering::Greater])
                    && cmp_is(subject, &args[1], &[Ordering::Less])
            }
            Operator::Nbt => {
                !(cmp_is(subject, &args[0], &[Ordering::Greater])
                    && cmp_is(subject, &args[1], &[Ordering::Less]))
            }
            Operator::In => contains(&args[0], subject),
            Operator::Nin => !contains(&args[0], subject),
        }
    }
}

/// True when the loose comparison of `a` and `b` yields one of `expected`.
/// An incomparable pair yields false, so the negated operators hold for it.
fn cmp_is(a: &Value, b: &Value, expected: &[Ordering]) -> bool {
    loose_cmp(a, b).is_some_and(|ordering| expected.contains(&ordering))
}

/// Loose ordering: two strings compare lexicographically; any other pair is
/// coerced to numbers (numeric strings parse, booleans map to 1/0). `None`
/// when either side cannot be coerced.
fn loose_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    if let (Value::String(x), Value::String(y)) = (a, b) {
        return Some(x.cmp(y));
    }
    coerce_number(a)?.partial_cmp(&coerce_number(b)?)
}

/// Numeric coercion for ordering comparisons.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(f64::from(*b)),
        _ => None,
    }
}

/// Strict equality: values of different kinds are never equal, except that
/// integers and floats unify numerically.
fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Null, Value::Null) => true,
        _ => match (number_of(a), number_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Numeric view of a value without cross-kind coercion.
fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

/// Membership test for `IN`/`NIN`: element of a sequence by strict equality,
/// or substring containment when the resolved value is a string.
fn contains(haystack: &Value, needle: &Value) -> bool {
    match haystack {
        Value::List(items) => items.iter().any(|item| strict_eq(item, needle)),
        Value::String(s) => s.contains(&needle.to_string()),
        _ => false,
    }
}
