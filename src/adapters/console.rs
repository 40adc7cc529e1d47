//! Host console display.
//!
//! [`TextDisplay`] stands in for the character LCD: a fixed grid of rows
//! and columns, drawn to any `io::Write`.

use std::io::{self, Write};

use crate::app::ports::DisplayPort;
use crate::config::CalcConfig;

/// Character grid with the configured geometry.
///
/// Text longer than a row keeps its rightmost `columns` characters, so
/// the end of a long expression stays visible while typing.
pub struct TextDisplay {
    columns: usize,
    rows: Vec<String>,
}

impl TextDisplay {
    pub fn new(config: &CalcConfig) -> Self {
        Self {
            columns: config.display_columns as usize,
            rows: vec![String::new(); config.display_rows as usize],
        }
    }

    /// Current contents of `row`, if the row exists.
    pub fn row(&self, row: u8) -> Option<&str> {
        self.rows.get(row as usize).map(String::as_str)
    }

    /// Draw the grid with a frame.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let border = "-".repeat(self.columns);
        writeln!(out, "+{}+", border)?;
        for row in &self.rows {
            writeln!(out, "|{:<width$}|", row, width = self.columns)?;
        }
        writeln!(out, "+{}+", border)
    }
}

impl DisplayPort for TextDisplay {
    fn clear(&mut self) {
        self.rows.iter_mut().for_each(String::clear);
    }

    fn write_row(&mut self, row: u8, text: &str) {
        let Some(slot) = self.rows.get_mut(row as usize) else {
            return;
        };
        let skip = text.chars().count().saturating_sub(self.columns);
        *slot = text.chars().skip(skip).collect();
    }
}
