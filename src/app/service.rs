//! Keypad session: the input/display loop around the calculator.
//!
//! [`KeypadSession`] owns the [`Calculator`] and applies the key policy
//! the calculator itself leaves to its caller:
//!
//! ```text
//!           digit/op            =              ok
//!  Empty ─────────────▶ Accumulating ───▶ (evaluate) ───▶ Resulted
//!    ▲                       ▲                 │             │
//!    │ C                     │ any input key   │ error       │ any input key
//!    │                       └── (clear) ◀── Errored         │ (clear; a leading
//!    └──────────────────────────────────────────────────────┘  operator continues)
//! ```
//!
//! After a result, every input key clears the expression first.  An
//! operator typed on the cleared buffer is then evaluated against the
//! previous result (continuation); a digit or function starts afresh.

use log::{debug, warn};

use crate::calc::Calculator;
use crate::config::{CalcConfig, OverflowPolicy};
use crate::error::CalcError;

use super::events::{CalcEvent, RejectReason};
use super::ports::{DisplayPort, EventSink};

/// Clears the expression and the error flag.
pub const CLEAR_KEY: char = 'C';
/// Evaluates the expression.
pub const EVALUATE_KEY: char = '=';

/// Row the expression is shown on.
const EXPRESSION_ROW: u8 = 0;

/// Where the session is in the clear/type/evaluate cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Accumulating,
    Resulted,
    Errored,
}

pub struct KeypadSession {
    calc: Calculator,
    config: CalcConfig,
    phase: Phase,
}

impl KeypadSession {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            calc: Calculator::with_config(&config),
            config,
            phase: Phase::Empty,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Reset the expression (memory survives) and blank the display.
    pub fn start(&mut self, display: &mut impl DisplayPort) {
        self.calc.init();
        self.phase = Phase::Empty;
        display.clear();
    }

    // ── Key handling ──────────────────────────────────────────

    /// Process one key from the key map.
    pub fn handle_key(
        &mut self,
        key: char,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        if key == self.config.ignore_key {
            return;
        }
        match key {
            CLEAR_KEY => {
                self.calc.clear_expression();
                self.phase = Phase::Empty;
                display.clear();
                sink.emit(&CalcEvent::Cleared { implicit: false });
            }
            EVALUATE_KEY => self.evaluate(display, sink),
            _ => self.input(key, display, sink),
        }
    }

    fn input(&mut self, key: char, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        if matches!(self.phase, Phase::Resulted | Phase::Errored) {
            self.implicit_clear(sink);
        }

        let mut outcome = self.calc.add_char(key);
        if outcome == Err(CalcError::BufferFull) && self.config.overflow == OverflowPolicy::ClearBuffer
        {
            debug!("buffer full, clearing before {:?}", key);
            self.implicit_clear(sink);
            outcome = self.calc.add_char(key);
        }

        match outcome {
            Ok(()) => {
                if !self.calc.is_empty() {
                    self.phase = Phase::Accumulating;
                }
                sink.emit(&CalcEvent::KeyAccepted(key));
            }
            Err(e) => {
                warn!("key {:?} rejected: {}", key, e);
                sink.emit(&CalcEvent::KeyRejected {
                    key,
                    reason: RejectReason::BufferFull,
                });
            }
        }

        display.clear();
        display.write_row(EXPRESSION_ROW, self.calc.current_expression());
    }

    fn evaluate(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        let outcome = self.calc.try_evaluate();
        let text = self.calc.display_text(&self.config);

        display.clear();
        display.write_row(EXPRESSION_ROW, self.calc.current_expression());
        display.write_row(self.result_row(), &text);

        match outcome {
            Ok(value) => {
                self.phase = Phase::Resulted;
                sink.emit(&CalcEvent::Evaluated { value });
            }
            Err(e) => {
                self.phase = Phase::Errored;
                sink.emit(&CalcEvent::EvaluationFailed(e));
            }
        }
    }

    fn implicit_clear(&mut self, sink: &mut impl EventSink) {
        self.calc.clear_expression();
        self.phase = Phase::Empty;
        sink.emit(&CalcEvent::Cleared { implicit: true });
    }

    /// Result goes on the second row; a single-row display overwrites the
    /// expression.
    fn result_row(&self) -> u8 {
        if self.config.display_rows > 1 {
            EXPRESSION_ROW + 1
        } else {
            EXPRESSION_ROW
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }
}
