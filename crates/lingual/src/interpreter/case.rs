//! Case-expression evaluation.
//!
//! A function-call case label either produces a boolean decision or is
//! silently skipped. `None` is never an error: the conditional block
//! resolver simply moves on to the next declared case.

use std::collections::HashMap;

use crate::interpreter::ops::Operator;
use crate::parser::{Arg, CallExpr};
use crate::path::lookup;
use crate::types::Value;

/// Evaluate a function-call case label against a subject value.
///
/// Yields `None` (case skipped) when:
/// - the function name is unknown
/// - fewer arguments were supplied than the function's arity
/// - an argument's type tag is not accepted at its position
/// - a `num` literal does not parse as a number
/// - a `key` argument does not resolve against the options bag
pub fn evaluate_call(
    subject: &Value,
    call: &CallExpr,
    options: &HashMap<String, Value>,
) -> Option<bool> {
    let op = Operator::from_name(&call.name)?;
    if call.args.len() < op.arity() {
        return None;
    }

    let mut resolved = Vec::with_capacity(call.args.len());
    for (position, arg) in call.args.iter().enumerate() {
        if !op.accepts(position, arg.tag()) {
            return None;
        }
        resolved.push(materialize(arg, options)?);
    }

    Some(op.apply(subject, &resolved))
}

/// Turn a parsed argument into a runtime value.
fn materialize(arg: &Arg, options: &HashMap<String, Value>) -> Option<Value> {
    match arg {
        Arg::Str(s) => Some(Value::String(s.clone())),
        Arg::Bool(b) => Some(Value::Bool(*b)),
        Arg::Num(raw) => parse_number(raw),
        Arg::Key(path) => lookup(options, path).cloned(),
    }
}

/// Parse a numeric literal: floating point when it contains a decimal
/// point, integer otherwise. An unparseable literal (e.g. out of range) is
/// treated as absent rather than an error.
fn parse_number(raw: &str) -> Option<Value> {
    if raw.contains('.') {
        raw.parse::<f64>().ok().map(Value::Float)
    } else {
        raw.parse::<i64>().ok().map(Value::Int)
    }
}
