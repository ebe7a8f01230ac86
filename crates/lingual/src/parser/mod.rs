//! Template parsers for the embedded translation DSL.
//!
//! Two grammars are embedded in otherwise plain translation strings:
//! conditional blocks (`[[~ {key} label: \`text\` | ... ]]`) and
//! interpolation markers (`{{path}}` with an optional `||fallback||`).
//! Both parsers are total: text that does not match the grammar is returned
//! as literal segments instead of raising an error, so malformed markers
//! pass through resolution verbatim.

pub mod ast;
mod block;
mod interp;

pub use ast::*;
pub use block::parse_blocks;
pub use interp::parse_interpolations;
