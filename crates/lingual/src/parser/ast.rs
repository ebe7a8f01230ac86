//! Public AST types for the template grammars.
//!
//! These types are public to enable external tooling (linters, editors, etc.).

/// One segment of a template after the conditional-block scan.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockSegment {
    /// Literal text (including text that failed the block grammar).
    Literal(String),
    /// A well-formed conditional block: `[[~ {key} ... ]]`
    Block(Block),
}

/// A parsed conditional block.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Dotted path of the subject value in the options bag.
    pub subject: String,
    /// Case arms in declaration order.
    pub arms: Vec<CaseArm>,
}

/// One declared case: a label and its branch text.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseArm {
    pub label: CaseLabel,
    /// Branch text, substituted verbatim when this arm wins.
    pub text: String,
}

/// A case label: either a literal token or a typed function call.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseLabel {
    /// Literal token matched against the stringified subject (`1`, `many`,
    /// `default`, ...).
    Token(String),
    /// A function call: `GTE(num:18)`.
    Call(CallExpr),
}

/// A function call with up to two typed arguments.
///
/// The subject value is always the implicit first operand; `args` are the
/// declared operands.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub args: Vec<Arg>,
}

/// A typed argument literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// `str:` with a backtick-quoted literal.
    Str(String),
    /// `num:` with the raw literal text. Parsing is deferred to evaluation
    /// so an out-of-range literal skips the case instead of failing the
    /// template.
    Num(String),
    /// `bool:` accepting `true`/`1` and `false`/`0`.
    Bool(bool),
    /// `key:` with a dotted path resolved against the options bag.
    Key(String),
}

impl Arg {
    /// The grammar tag of this argument.
    pub fn tag(&self) -> ArgTag {
        match self {
            Arg::Str(_) => ArgTag::Str,
            Arg::Num(_) => ArgTag::Num,
            Arg::Bool(_) => ArgTag::Bool,
            Arg::Key(_) => ArgTag::Key,
        }
    }
}

/// Type tag of a function-call argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgTag {
    Str,
    Num,
    Bool,
    Key,
}

impl std::fmt::Display for ArgTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgTag::Str => write!(f, "str"),
            ArgTag::Num => write!(f, "num"),
            ArgTag::Bool => write!(f, "bool"),
            ArgTag::Key => write!(f, "key"),
        }
    }
}

/// One segment of a template after the interpolation scan.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpSegment {
    /// Literal text.
    Literal(String),
    /// An interpolation marker: `{{path}}` with optional `||fallback||`.
    Interp {
        /// Dotted path resolved against the options bag.
        path: String,
        /// Inline fallback text used when the path does not resolve.
        fallback: Option<String>,
    },
}
