//! Conditional block parser using winnow.
//!
//! Scans a template for `[[~ {subject} label: `text` | ... ]]` blocks and
//! returns the template as a sequence of literal and block segments. The
//! grammar:
//!
//! - subject: a brace-wrapped dotted path into the options bag
//! - labels: a literal token (`1`, `many`, `default`) or a function call
//!   with 1-2 typed arguments (`GTE(num:18)`, `BT(num:12,num:18)`)
//! - branch text: backtick-quoted, may contain interpolation markers
//!
//! Anything that fails the grammar becomes literal text, so malformed
//! blocks are passed through untouched rather than reported as errors.

use super::ast::{Arg, Block, BlockSegment, CaseArm, CaseLabel, CallExpr};
use winnow::combinator::{alt, delimited, opt, preceded, repeat, separated};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Scan a template into literal and conditional-block segments.
pub fn parse_blocks(input: &str) -> Vec<BlockSegment> {
    let mut remaining = input;
    let parsed: ModalResult<Vec<BlockSegment>> = repeat(0.., segment).parse_next(&mut remaining);
    match parsed {
        Ok(segments) if remaining.is_empty() => merge_literals(segments),
        // Unreachable with the literal-char fallback, but never drop input.
        _ => vec![BlockSegment::Literal(input.to_string())],
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<BlockSegment>) -> Vec<BlockSegment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            BlockSegment::Literal(text) => {
                if let Some(BlockSegment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(BlockSegment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (conditional block, or one literal character).
fn segment(input: &mut &str) -> ModalResult<BlockSegment> {
    alt((conditional.map(BlockSegment::Block), literal_char)).parse_next(input)
}

/// Parse a single literal character.
fn literal_char(input: &mut &str) -> ModalResult<BlockSegment> {
    any.map(|c: char| BlockSegment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a complete conditional block: `[[~ {subject} arms ]]`
fn conditional(input: &mut &str) -> ModalResult<Block> {
    let (_, _, subject, arms, _, _) =
        ("[[~", ws, subject_key, case_arms, ws, "]]").parse_next(input)?;
    Ok(Block { subject, arms })
}

/// Parse the brace-wrapped subject path: `{count}` or `{user.role}`
fn subject_key(input: &mut &str) -> ModalResult<String> {
    delimited('{', take_while(0.., |c: char| c != '}'), '}')
        .map(|s: &str| s.trim().to_string())
        .parse_next(input)
}

/// Parse one or more case arms in declaration order.
fn case_arms(input: &mut &str) -> ModalResult<Vec<CaseArm>> {
    repeat(1.., case_arm).parse_next(input)
}

/// Parse a single case arm: `label : `text`` followed by optional `|`
/// separators. The source grammar is loose about pipes, so any run of them
/// (including none before the closing `]]`) is accepted.
fn case_arm(input: &mut &str) -> ModalResult<CaseArm> {
    let (_, label, _, _, _, text, _) =
        (ws, case_label, ws, ':', ws, backtick_text, separators).parse_next(input)?;
    Ok(CaseArm { label, text })
}

/// Parse trailing arm separators: whitespace and zero or more pipes.
fn separators(input: &mut &str) -> ModalResult<()> {
    (ws, take_while(0.., '|')).void().parse_next(input)
}

/// Parse a case label. Function calls are tried first; a label is either a
/// pure token or a pure call, never a mix.
fn case_label(input: &mut &str) -> ModalResult<CaseLabel> {
    alt((call_label, token_label)).parse_next(input)
}

/// Parse a literal token label: word characters, dots, and hyphens.
fn token_label(input: &mut &str) -> ModalResult<CaseLabel> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
    })
    .map(|s: &str| CaseLabel::Token(s.to_string()))
    .parse_next(input)
}

/// Parse a function-call label: `NAME(arg[, arg])`
fn call_label(input: &mut &str) -> ModalResult<CaseLabel> {
    let (name, args) = (
        func_name,
        delimited(('(', ws), call_args, (ws, ')')),
    )
        .parse_next(input)?;
    Ok(CaseLabel::Call(CallExpr {
        name: name.to_string(),
        args,
    }))
}

/// Parse a function name (letters and underscores).
fn func_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_').parse_next(input)
}

/// Parse one or two comma-separated typed arguments.
fn call_args(input: &mut &str) -> ModalResult<Vec<Arg>> {
    separated(1..=2, call_arg, (ws, ',', ws)).parse_next(input)
}

/// Parse a typed argument literal: `tag:value`.
fn call_arg(input: &mut &str) -> ModalResult<Arg> {
    alt((str_arg, key_arg, num_arg, bool_arg)).parse_next(input)
}

/// `str:` with a backtick-quoted literal.
fn str_arg(input: &mut &str) -> ModalResult<Arg> {
    preceded(("str", ws, ':', ws), backtick_text)
        .map(Arg::Str)
        .parse_next(input)
}

/// `key:` with a brace-wrapped dotted path.
fn key_arg(input: &mut &str) -> ModalResult<Arg> {
    preceded(
        ("key", ws, ':', ws),
        delimited('{', take_while(0.., |c: char| c != '}'), '}'),
    )
    .map(|s: &str| Arg::Key(s.trim().to_string()))
    .parse_next(input)
}

/// `num:` with a decimal or integer literal. The raw text is kept; parsing
/// to a number happens at evaluation time.
fn num_arg(input: &mut &str) -> ModalResult<Arg> {
    preceded(("num", ws, ':', ws), number_literal)
        .map(|s: &str| Arg::Num(s.to_string()))
        .parse_next(input)
}

/// Digits with an optional fractional part, as the consumed slice.
fn number_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_digit()),
        opt(('.', take_while(1.., |c: char| c.is_ascii_digit()))),
    )
        .take()
        .parse_next(input)
}

/// `bool:` accepting `true`/`1` and `false`/`0`.
fn bool_arg(input: &mut &str) -> ModalResult<Arg> {
    preceded(
        ("bool", ws, ':', ws),
        alt((
            "true".value(true),
            "false".value(false),
            "1".value(true),
            "0".value(false),
        )),
    )
    .map(Arg::Bool)
    .parse_next(input)
}

/// Parse backtick-quoted text: any characters except a backtick.
fn backtick_text(input: &mut &str) -> ModalResult<String> {
    delimited('`', take_while(0.., |c: char| c != '`'), '`')
        .map(ToString::to_string)
        .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}
