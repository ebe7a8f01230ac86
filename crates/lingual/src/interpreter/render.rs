//! Template rendering: conditional resolution, then interpolation.
//!
//! Rendering is two strict passes over the whole string. The conditional
//! pass substitutes every well-formed `[[~ ... ]]` block with its winning
//! branch text; the interpolation pass then substitutes every `{{path}}`
//! marker, including markers introduced by a conditional branch. Missing
//! data degrades to marker strings, never to an error.

use std::collections::HashMap;

use crate::interpreter::case::evaluate_call;
use crate::parser::{Block, BlockSegment, CaseLabel, InterpSegment, parse_blocks, parse_interpolations};
use crate::path::lookup;
use crate::types::Value;

/// Emitted in place of a conditional block when no case matched and no
/// `default` case was declared.
pub const FALLBACK_KEY_MISSING: &str = "[fallback_key_missing]";

/// Emitted in place of an interpolation marker whose path did not resolve
/// and which carried no inline fallback.
pub const NO_VALUE: &str = "[no_value]";

/// Render a raw template against an options bag: conditional blocks first,
/// then one interpolation pass over the entire result.
pub fn render(template: &str, options: &HashMap<String, Value>) -> String {
    apply_interpolations(&apply_conditionals(template, options), options)
}

/// Substitute every well-formed conditional block with its winning branch
/// text. Malformed block syntax passes through verbatim.
pub fn apply_conditionals(template: &str, options: &HashMap<String, Value>) -> String {
    let mut output = String::new();
    for segment in parse_blocks(template) {
        match segment {
            BlockSegment::Literal(text) => output.push_str(&text),
            BlockSegment::Block(block) => output.push_str(&resolve_block(&block, options)),
        }
    }
    output
}

/// Pick the winning branch of one conditional block.
///
/// Order of decision:
/// 1. Function-call labels, in declaration order; the first `true` wins.
/// 2. Exact literal-token match against the stringified subject. Duplicate
///    tokens resolve to the last declaration.
/// 3. A declared `default` token.
/// 4. The `[fallback_key_missing]` marker.
fn resolve_block(block: &Block, options: &HashMap<String, Value>) -> String {
    // An absent subject behaves as the literal string "default", which
    // selects the default branch through the literal lookup below.
    let subject = lookup(options, &block.subject)
        .cloned()
        .unwrap_or_else(|| Value::String("default".to_string()));

    for arm in &block.arms {
        if let CaseLabel::Call(call) = &arm.label
            && evaluate_call(&subject, call, options) == Some(true)
        {
            return arm.text.clone();
        }
    }

    let mut tokens: HashMap<&str, &str> = HashMap::new();
    for arm in &block.arms {
        if let CaseLabel::Token(token) = &arm.label {
            tokens.insert(token.as_str(), arm.text.as_str());
        }
    }

    let subject_text = subject.to_string();
    if let Some(text) = tokens.get(subject_text.as_str()) {
        return (*text).to_string();
    }
    if let Some(text) = tokens.get("default") {
        return (*text).to_string();
    }
    FALLBACK_KEY_MISSING.to_string()
}

/// Substitute every `{{path}}` marker with the stringified value from the
/// options bag, the inline `||fallback||` text, or the `[no_value]` marker.
pub fn apply_interpolations(template: &str, options: &HashMap<String, Value>) -> String {
    let mut output = String::new();
    for segment in parse_interpolations(template) {
        match segment {
            InterpSegment::Literal(text) => output.push_str(&text),
            InterpSegment::Interp { path, fallback } => match lookup(options, &path) {
                Some(value) => output.push_str(&value.to_string()),
                None => output.push_str(fallback.as_deref().unwrap_or(NO_VALUE)),
            },
        }
    }
    output
}
