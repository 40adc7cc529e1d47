//! Continuation from the previous result.
//!
//! An expression that starts with an operator means "apply this to the
//! last answer": with a previous result of `5`, the text `+3` is
//! evaluated as `5.000000+3`.  The previous result is spliced in with
//! [`CONTINUATION_DECIMALS`] fractional digits.

use core::fmt::Write;

use super::buffer::{MAX_EXPR_LEN, MAX_TEXT_LEN};
use super::token::Operator;
use crate::error::{CalcError, Result};

/// Fractional digits used when the previous result is written back as text.
pub const CONTINUATION_DECIMALS: usize = 6;

/// Adjusted text; shares the expression buffer's bound.
pub type WorkingText = heapless::String<MAX_EXPR_LEN>;

/// Build the continuation-adjusted text for `text`, if continuation applies.
///
/// Returns `Ok(None)` when the text does not start with an operator or
/// there is no previous result.  Fails with [`CalcError::BufferFull`] when
/// the adjusted text would not fit the expression buffer.
pub fn adjust(text: &str, last_result: Option<f64>) -> Result<Option<WorkingText>> {
    let Some(previous) = last_result else {
        return Ok(None);
    };
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Ok(None);
    };
    if Operator::from_char(first).is_none() {
        return Ok(None);
    }

    let mut working = WorkingText::new();
    write!(
        working,
        "{:.*}{}{}",
        CONTINUATION_DECIMALS,
        previous,
        first,
        chars.as_str()
    )
    .map_err(|_| CalcError::BufferFull)?;

    if working.len() > MAX_TEXT_LEN {
        return Err(CalcError::BufferFull);
    }
    Ok(Some(working))
}
