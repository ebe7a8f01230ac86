//! Interpolation marker parser using winnow.
//!
//! Scans a string for `{{path}}` markers, each optionally followed
//! immediately by a `||fallback text||` clause. Unmatched `{{` sequences
//! fall back to literal text and pass through untouched.

use super::ast::InterpSegment;
use winnow::combinator::{alt, delimited, opt, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_until};

/// Scan a string into literal and interpolation segments.
pub fn parse_interpolations(input: &str) -> Vec<InterpSegment> {
    let mut remaining = input;
    let parsed: ModalResult<Vec<InterpSegment>> = repeat(0.., segment).parse_next(&mut remaining);
    match parsed {
        Ok(segments) if remaining.is_empty() => merge_literals(segments),
        _ => vec![InterpSegment::Literal(input.to_string())],
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<InterpSegment>) -> Vec<InterpSegment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            InterpSegment::Literal(text) => {
                if let Some(InterpSegment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(InterpSegment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (interpolation marker, or one literal character).
fn segment(input: &mut &str) -> ModalResult<InterpSegment> {
    alt((interpolation, literal_char)).parse_next(input)
}

/// Parse a single literal character.
fn literal_char(input: &mut &str) -> ModalResult<InterpSegment> {
    any.map(|c: char| InterpSegment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse `{{path}}` with an optional immediately-following `||fallback||`.
fn interpolation(input: &mut &str) -> ModalResult<InterpSegment> {
    let path = delimited("{{", take_until(0.., "}}"), "}}").parse_next(input)?;
    let fallback: Option<&str> =
        opt(delimited("||", take_until(0.., "||"), "||")).parse_next(input)?;
    Ok(InterpSegment::Interp {
        path: path.trim().to_string(),
        fallback: fallback.map(ToString::to_string),
    })
}
