//! Two-layer key map for the 4x4 keypad matrix.
//!
//! The matrix scanner reports `(row, col)`; this module turns it into one
//! character of the calculator alphabet.
//!
//! ```text
//!   base layer          shift layer
//!   1  2  3  +          s  c  t  ^
//!   4  5  6  -          .  ?  ?  C
//!   7  8  9  *          ?  ?  ?  ?
//!   ⇧  0  =  /          ⇧  ?  =  ?
//! ```
//!
//! `⇧` arms the shift layer for exactly one key.  Unused shift slots emit
//! the configured ignore placeholder, which the calculator drops.

pub const ROWS: usize = 4;
pub const COLS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Char(char),
    Shift,
    Unused,
}

use Slot::{Char as K, Shift as SH, Unused as NA};

const BASE: [[Slot; COLS]; ROWS] = [
    [K('1'), K('2'), K('3'), K('+')],
    [K('4'), K('5'), K('6'), K('-')],
    [K('7'), K('8'), K('9'), K('*')],
    [SH, K('0'), K('='), K('/')],
];

const SHIFTED: [[Slot; COLS]; ROWS] = [
    [K('s'), K('c'), K('t'), K('^')],
    [K('.'), NA, NA, K('C')],
    [NA, NA, NA, NA],
    [SH, NA, K('='), NA],
];

#[derive(Debug, Clone)]
pub struct Keymap {
    shifted: bool,
    ignore_key: char,
}

impl Keymap {
    pub fn new(ignore_key: char) -> Self {
        Self {
            shifted: false,
            ignore_key,
        }
    }

    /// Translate a key press.  Returns `None` for the shift key itself and
    /// for positions outside the matrix.
    pub fn press(&mut self, row: usize, col: usize) -> Option<char> {
        let layer = if self.shifted { &SHIFTED } else { &BASE };
        let slot = *layer.get(row)?.get(col)?;

        match slot {
            Slot::Shift => {
                self.shifted = !self.shifted;
                None
            }
            Slot::Char(c) => {
                self.shifted = false;
                Some(c)
            }
            Slot::Unused => {
                self.shifted = false;
                Some(self.ignore_key)
            }
        }
    }

    /// Whether the next key press reads from the shift layer.
    pub fn is_shifted(&self) -> bool {
        self.shifted
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new(crate::calc::buffer::IGNORE_KEY)
    }
}
