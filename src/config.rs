//! Calculator configuration parameters
//!
//! Tunables for result formatting, the keypad loop and the display
//! geometry.  The host binary loads overrides from a JSON file.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound for [`CalcConfig::result_decimals`]; matches the precision
/// used when a previous result is spliced into a continuation.
pub const MAX_RESULT_DECIMALS: u8 = 6;

/// Characters with a meaning of their own on the keypad.  The ignore
/// placeholder must not be one of these.
const RESERVED_KEYS: &str = "0123456789.+-*/^sctC=";

/// What the keypad loop does when a key does not fit in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Drop the key and keep the expression as typed.
    DropKey,
    /// Clear the expression, then retry the key on the empty buffer.
    ClearBuffer,
}

/// Core calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    // --- Output ---
    /// Maximum fractional digits shown for a result
    pub result_decimals: u8,
    /// Literal shown instead of a result when evaluation fails
    pub error_text: heapless::String<16>,

    // --- Input ---
    /// Placeholder the key map emits for unused slots; always ignored
    pub ignore_key: char,
    /// Overwrite the stored expression with the continuation-adjusted text
    pub persist_continuation: bool,
    /// Reaction to a full expression buffer
    pub overflow: OverflowPolicy,

    // --- Display ---
    /// Character columns of the display
    pub display_columns: u8,
    /// Character rows of the display
    pub display_rows: u8,
}

impl Default for CalcConfig {
    fn default() -> Self {
        let mut error_text = heapless::String::new();
        // "Error" is 5 bytes; capacity is 16.
        let _ = error_text.push_str("Error");

        Self {
            // Output
            result_decimals: 3,
            error_text,

            // Input
            ignore_key: '?',
            persist_continuation: true,
            overflow: OverflowPolicy::DropKey,

            // Display (HD44780 16x2)
            display_columns: 16,
            display_rows: 2,
        }
    }
}

/// Reasons a configuration is rejected by [`CalcConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `result_decimals` exceeds [`MAX_RESULT_DECIMALS`].
    TooManyDecimals(u8),
    /// `ignore_key` is a character the calculator gives meaning to.
    ReservedIgnoreKey(char),
    /// Display has zero rows or columns.
    EmptyDisplay,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyDecimals(n) => {
                write!(f, "result_decimals {} exceeds {}", n, MAX_RESULT_DECIMALS)
            }
            Self::ReservedIgnoreKey(c) => write!(f, "ignore_key {:?} is a calculator key", c),
            Self::EmptyDisplay => write!(f, "display geometry must be non-zero"),
        }
    }
}

impl CalcConfig {
    /// Reject values the calculator cannot honour.  Invalid values are
    /// reported, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.result_decimals > MAX_RESULT_DECIMALS {
            return Err(ConfigError::TooManyDecimals(self.result_decimals));
        }
        if RESERVED_KEYS.contains(self.ignore_key) {
            return Err(ConfigError::ReservedIgnoreKey(self.ignore_key));
        }
        if self.display_columns == 0 || self.display_rows == 0 {
            return Err(ConfigError::EmptyDisplay);
        }
        Ok(())
    }
}
