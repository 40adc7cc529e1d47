//! Bounded expression buffer.
//!
//! Holds the text typed so far.  Capacity is [`MAX_EXPR_LEN`] bytes with
//! one slot kept back for the display driver's terminator, so the text
//! never exceeds `MAX_EXPR_LEN - 1` bytes.  Shorthand keys expand to full
//! function names (`s` → `sin`) and are written all-or-nothing.

use crate::error::{CalcError, Result};

/// Buffer capacity in bytes, terminator slot included.
pub const MAX_EXPR_LEN: usize = 64;

/// Longest text the buffer will hold.
pub const MAX_TEXT_LEN: usize = MAX_EXPR_LEN - 1;

/// Default no-op placeholder emitted by the key map for unused slots.
pub const IGNORE_KEY: char = '?';

/// Full function name for a shorthand key, if `c` is one.
pub fn expansion(c: char) -> Option<&'static str> {
    match c {
        's' => Some("sin"),
        'c' => Some("cos"),
        't' => Some("tan"),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionBuffer {
    text: heapless::String<MAX_EXPR_LEN>,
    ignore_key: char,
}

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self::with_ignore_key(IGNORE_KEY)
    }

    /// Buffer that treats `ignore_key` as the no-op placeholder.
    pub fn with_ignore_key(ignore_key: char) -> Self {
        Self {
            text: heapless::String::new(),
            ignore_key,
        }
    }

    /// Empty the buffer.
    pub fn init(&mut self) {
        self.text.clear();
    }

    /// Append one key.  Shorthand keys expand; the placeholder is ignored.
    ///
    /// On [`CalcError::BufferFull`] the buffer is left exactly as it was.
    pub fn add_char(&mut self, c: char) -> Result<()> {
        if c == self.ignore_key {
            return Ok(());
        }
        match expansion(c) {
            Some(name) => self.append(name),
            None => {
                let mut utf8 = [0u8; 4];
                self.append(c.encode_utf8(&mut utf8))
            }
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the whole contents.  Fails without touching the buffer if
    /// `text` is longer than [`MAX_TEXT_LEN`].
    pub fn replace(&mut self, text: &str) -> Result<()> {
        if text.len() > MAX_TEXT_LEN {
            return Err(CalcError::BufferFull);
        }
        self.text.clear();
        self.text.push_str(text).map_err(|()| CalcError::BufferFull)
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bytes still available before the buffer reports full.
    pub fn remaining(&self) -> usize {
        MAX_TEXT_LEN - self.text.len()
    }

    fn append(&mut self, s: &str) -> Result<()> {
        if s.len() > self.remaining() {
            return Err(CalcError::BufferFull);
        }
        self.text.push_str(s).map_err(|()| CalcError::BufferFull)
    }
}

impl Default for ExpressionBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_expands_in_place() {
        let mut buf = ExpressionBuffer::new();
        for c in "2*s30".chars() {
            buf.add_char(c).unwrap();
        }
        assert_eq!(buf.text(), "2*sin30");
    }

    #[test]
    fn placeholder_is_ignored() {
        let mut buf = ExpressionBuffer::new();
        buf.add_char('1').unwrap();
        buf.add_char('?').unwrap();
        assert_eq!(buf.text(), "1");

        let mut custom = ExpressionBuffer::with_ignore_key('#');
        custom.add_char('#').unwrap();
        custom.add_char('?').unwrap();
        assert_eq!(custom.text(), "?");
    }

    #[test]
    fn fills_to_capacity_minus_terminator() {
        let mut buf = ExpressionBuffer::new();
        for _ in 0..MAX_TEXT_LEN {
            buf.add_char('1').unwrap();
        }
        assert_eq!(buf.len(), MAX_TEXT_LEN);
        assert_eq!(buf.add_char('1'), Err(CalcError::BufferFull));
        assert_eq!(buf.len(), MAX_TEXT_LEN);
    }

    #[test]
    fn expansion_needs_room_for_all_three_chars() {
        let mut buf = ExpressionBuffer::new();
        for _ in 0..MAX_TEXT_LEN - 2 {
            buf.add_char('9').unwrap();
        }
        let before = buf.text().to_owned();
        assert_eq!(buf.add_char('s'), Err(CalcError::BufferFull));
        assert_eq!(buf.text(), before);
        // A single character still fits.
        assert!(buf.add_char('+').is_ok());
    }

    #[test]
    fn replace_is_length_checked() {
        let mut buf = ExpressionBuffer::new();
        buf.add_char('7').unwrap();
        let long = "1".repeat(MAX_EXPR_LEN);
        assert_eq!(buf.replace(&long), Err(CalcError::BufferFull));
        assert_eq!(buf.text(), "7");
        buf.replace("5.000000+3").unwrap();
        assert_eq!(buf.text(), "5.000000+3");
    }

    #[test]
    fn init_empties() {
        let mut buf = ExpressionBuffer::new();
        buf.add_char('t').unwrap();
        buf.init();
        assert!(buf.is_empty());
        assert_eq!(buf.remaining(), MAX_TEXT_LEN);
    }
}
