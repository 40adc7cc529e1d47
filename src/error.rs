//! Unified error types for the calculator core.
//!
//! A single `CalcError` enum that every stage (buffer, tokenizer,
//! evaluator) converts into.  All variants are `Copy` so they can be
//! stored as the façade's last diagnostic without allocation.
//!
//! The façade itself only exposes a boolean error flag to the keypad
//! loop; the detailed kind is kept for logging.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level calculator error
// ---------------------------------------------------------------------------

/// Every fallible calculator operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// The expression buffer has no room for the key (or its expansion).
    BufferFull,
    /// The expression text could not be tokenized.
    Parse(ParseError),
    /// The token sequence could not be reduced to a single value.
    Eval(EvalError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferFull => write!(f, "expression buffer full"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Eval(e) => write!(f, "eval: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tokenizer errors
// ---------------------------------------------------------------------------

/// `pos` is the byte offset into the text handed to the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A character outside the calculator alphabet (brackets included).
    UnexpectedChar { ch: char, pos: usize },
    /// A numeric literal that is not a valid decimal number.
    MalformedNumber { pos: usize },
    /// A `sin`/`cos`/`tan` argument that is missing or not a decimal number.
    MalformedAngle { pos: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar { ch, pos } => write!(f, "unexpected {ch:?} at {pos}"),
            Self::MalformedNumber { pos } => write!(f, "malformed number at {pos}"),
            Self::MalformedAngle { pos } => write!(f, "malformed angle at {pos}"),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Evaluator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Right-hand operand of `/` was exactly zero.
    DivisionByZero,
    /// An operator has no right-hand operand left to consume.
    MissingOperand,
    /// Reduction finished with a number of operands other than one.
    Unbalanced { operands: usize },
    /// No tokens to evaluate.
    Empty,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::MissingOperand => write!(f, "operator without operand"),
            Self::Unbalanced { operands } => {
                write!(f, "{operands} operands left after reduction")
            }
            Self::Empty => write!(f, "nothing to evaluate"),
        }
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Calculator-wide `Result` alias.
pub type Result<T> = core::result::Result<T, CalcError>;
