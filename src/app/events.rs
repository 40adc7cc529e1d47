//! Outbound session events.
//!
//! The [`KeypadSession`](super::service::KeypadSession) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::error::CalcError;

/// Why a key did not reach the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The buffer had no room and the overflow policy drops keys.
    BufferFull,
}

/// Structured events emitted by the keypad session.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcEvent {
    /// A key was appended to the expression.
    KeyAccepted(char),

    /// A key was dropped.
    KeyRejected { key: char, reason: RejectReason },

    /// The expression was cleared (by `C`, or implicitly before new input).
    Cleared { implicit: bool },

    /// Evaluation succeeded.
    Evaluated { value: f64 },

    /// Evaluation failed; carries the detailed kind for diagnostics.
    EvaluationFailed(CalcError),
}
