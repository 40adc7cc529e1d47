//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each session event as one
//! structured line through the `log` facade.

use log::{info, warn};

use crate::app::events::{CalcEvent, RejectReason};
use crate::app::ports::EventSink;

/// Adapter that logs every [`CalcEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &CalcEvent) {
        match event {
            CalcEvent::KeyAccepted(key) => {
                log::debug!("KEY | accepted {:?}", key);
            }
            CalcEvent::KeyRejected { key, reason } => {
                let why = match reason {
                    RejectReason::BufferFull => "buffer full",
                };
                warn!("KEY | rejected {:?} ({})", key, why);
            }
            CalcEvent::Cleared { implicit } => {
                info!("CLEAR | implicit={}", implicit);
            }
            CalcEvent::Evaluated { value } => {
                info!("EVAL | ok value={}", value);
            }
            CalcEvent::EvaluationFailed(e) => {
                warn!("EVAL | failed: {}", e);
            }
        }
    }
}
