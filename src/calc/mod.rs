//! Calculator core: pure expression logic, zero I/O.
//!
//! ```text
//!  key ──▶ ExpressionBuffer ──(=)──▶ continuation ──▶ tokenize ──▶ evaluate
//! ```
//!
//! [`Calculator`] is the only type the keypad loop needs; the stages are
//! public for diagnostics and tests.

pub mod buffer;
pub mod calculator;
pub mod continuation;
pub mod eval;
pub mod format;
pub mod token;

pub use buffer::{ExpressionBuffer, MAX_EXPR_LEN};
pub use calculator::{Calculator, ERROR_SENTINEL};
pub use format::{DisplayText, format_result};
pub use token::{Function, Operator, Token, tokenize};
