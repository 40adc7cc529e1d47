//! Calculator façade.
//!
//! [`Calculator`] owns the expression buffer, the last-result memory and
//! the error state.  It is an ordinary value: construct as many as needed,
//! no global state.
//!
//! ## Evaluation pipeline
//!
//! ```text
//!  buffer ──▶ continuation ──▶ tokenize ──▶ evaluate ──▶ last result
//!                                   │            │
//!                                   └── error ───┴──▶ error flag + 0
//! ```
//!
//! The keypad loop only sees a boolean error flag and the sentinel value
//! [`ERROR_SENTINEL`]; the detailed [`CalcError`] is kept for logging.

use log::{debug, info, warn};

use super::buffer::ExpressionBuffer;
use super::continuation;
use super::eval;
use super::format::{DisplayText, error_text, format_result};
use super::token::tokenize;
use crate::config::CalcConfig;
use crate::error::{CalcError, Result};

/// Value returned by [`Calculator::evaluate`] when evaluation fails.
pub const ERROR_SENTINEL: f64 = 0.0;

#[derive(Debug, Clone)]
pub struct Calculator {
    buffer: ExpressionBuffer,
    /// Previous successful result; kept across `init` and clears.
    last_result: Option<f64>,
    /// Outcome of the latest evaluation; `Some` means the error flag is set.
    error: Option<CalcError>,
    persist_continuation: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(&CalcConfig::default())
    }

    pub fn with_config(config: &CalcConfig) -> Self {
        Self {
            buffer: ExpressionBuffer::with_ignore_key(config.ignore_key),
            last_result: None,
            error: None,
            persist_continuation: config.persist_continuation,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Reset the expression and error state.  The last result survives.
    pub fn init(&mut self) {
        self.buffer.init();
        self.error = None;
    }

    /// Clear the expression and the error flag.  The last result survives.
    pub fn clear_expression(&mut self) {
        self.buffer.clear();
        self.error = None;
        debug!("expression cleared");
    }

    /// Forget the previous result; continuation is disabled until the next
    /// successful evaluation.
    pub fn clear_memory(&mut self) {
        self.last_result = None;
    }

    // ── Input ─────────────────────────────────────────────────

    /// Append a key to the expression.  See [`ExpressionBuffer::add_char`].
    pub fn add_char(&mut self, c: char) -> Result<()> {
        self.buffer.add_char(c)
    }

    // ── Evaluation ────────────────────────────────────────────

    /// Evaluate the current expression, collapsing any failure into the
    /// error flag and [`ERROR_SENTINEL`].
    pub fn evaluate(&mut self) -> f64 {
        self.try_evaluate().unwrap_or(ERROR_SENTINEL)
    }

    /// Evaluate the current expression, keeping the detailed error.
    ///
    /// State updates are identical to [`evaluate`](Self::evaluate): the
    /// error flag is reset on entry, a success replaces the last result, a
    /// failure sets the flag.  An empty expression yields the last result
    /// (or `0`) without tokenizing and leaves the memory untouched.
    pub fn try_evaluate(&mut self) -> Result<f64> {
        self.error = None;

        if self.buffer.is_empty() {
            return Ok(self.last_result.unwrap_or(0.0));
        }

        match self.run_pipeline() {
            Ok(value) => {
                info!("{:?} = {}", self.buffer.text(), value);
                self.last_result = Some(value);
                Ok(value)
            }
            Err(e) => {
                warn!("{:?} failed: {}", self.buffer.text(), e);
                self.error = Some(e);
                Err(e)
            }
        }
    }

    fn run_pipeline(&mut self) -> Result<f64> {
        let tokens = match continuation::adjust(self.buffer.text(), self.last_result)? {
            Some(working) => {
                debug!("continuing from last result: {:?}", working);
                if self.persist_continuation {
                    self.buffer.replace(&working)?;
                }
                tokenize(&working)?
            }
            None => tokenize(self.buffer.text())?,
        };
        Ok(eval::evaluate(&tokens)?)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Whether the latest evaluation failed.
    pub fn had_error(&self) -> bool {
        self.error.is_some()
    }

    /// Detailed kind of the latest failure, if any.
    pub fn last_error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Current expression text.
    pub fn current_expression(&self) -> &str {
        self.buffer.text()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Text for the result row: the formatted last result, or the error
    /// indicator when the latest evaluation failed.
    pub fn display_text(&self, config: &CalcConfig) -> DisplayText {
        if self.had_error() {
            return error_text(&config.error_text);
        }
        let value = self.last_result.unwrap_or(0.0);
        format_result(value, config.result_decimals, &config.error_text)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
