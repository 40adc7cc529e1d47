//! Result formatting for the character display.
//!
//! Results are printed with a fixed number of fractional digits, then
//! trailing zeros and a dangling decimal point are stripped:
//! `2.500` → `2.5`, `8.000` → `8`.  Width is not limited here; the
//! display adapter truncates.

/// Formatted result text.
///
/// Owned and unbounded: the widest `{:.6}` rendering of an `f64` runs to
/// a few hundred bytes.
pub type DisplayText = String;

/// Format `value` with at most `decimals` fractional digits.
///
/// Non-finite values render as `error_indicator`.
pub fn format_result(value: f64, decimals: u8, error_indicator: &str) -> DisplayText {
    if !value.is_finite() {
        return error_text(error_indicator);
    }

    let fixed = format!("{:.*}", decimals as usize, value);
    let mut trimmed = fixed.as_str();
    if trimmed.contains('.') {
        trimmed = trimmed.trim_end_matches('0').trim_end_matches('.');
    }
    if trimmed == "-0" {
        trimmed = "0";
    }
    trimmed.to_owned()
}

/// The error indicator as display text.
pub fn error_text(text: &str) -> DisplayText {
    text.to_owned()
}
