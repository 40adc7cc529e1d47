//! Mock display and event sink for integration tests.
//!
//! Records every display write and every emitted event so tests can
//! assert on the full history without an LCD attached.

use calcpad::app::events::CalcEvent;
use calcpad::app::ports::{DisplayPort, EventSink};

// ── Display call record ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Clear,
    WriteRow { row: u8, text: String },
}

// ── MockDisplay ───────────────────────────────────────────────

pub struct MockDisplay {
    pub calls: Vec<DisplayCall>,
    rows: [String; 2],
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            rows: [String::new(), String::new()],
        }
    }

    /// What the display currently shows on `row`; empty outside the grid.
    pub fn row(&self, row: u8) -> &str {
        self.rows.get(row as usize).map_or("", String::as_str)
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for MockDisplay {
    fn clear(&mut self) {
        self.calls.push(DisplayCall::Clear);
        self.rows.iter_mut().for_each(String::clear);
    }

    fn write_row(&mut self, row: u8, text: &str) {
        self.calls.push(DisplayCall::WriteRow {
            row,
            text: text.to_owned(),
        });
        if let Some(slot) = self.rows.get_mut(row as usize) {
            *slot = text.to_owned();
        }
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<CalcEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn last(&self) -> Option<&CalcEvent> {
        self.events.last()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &CalcEvent) {
        self.events.push(event.clone());
    }
}
