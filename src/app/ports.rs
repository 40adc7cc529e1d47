//! Port traits: the boundary between the keypad loop and the outside world.
//!
//! ```text
//!   key source ──▶ KeypadSession ──▶ DisplayPort
//!                        │
//!                        └─────────▶ EventSink
//! ```
//!
//! Driven adapters (character LCD, console, loggers) implement these
//! traits.  The [`KeypadSession`](super::service::KeypadSession) consumes
//! them via generics.

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → character display)
// ───────────────────────────────────────────────────────────────

/// Row-oriented character display.
///
/// The session never truncates; an implementation limited to a fixed
/// grid decides how to fit `text` into a row.
pub trait DisplayPort {
    /// Blank the whole display.
    fn clear(&mut self);

    /// Replace the contents of `row` (0-based) with `text`.
    fn write_row(&mut self, row: u8, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The session emits structured [`CalcEvent`](super::events::CalcEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::CalcEvent);
}
