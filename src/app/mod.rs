//! Application core: the keypad loop policy, zero I/O.
//!
//! [`service::KeypadSession`] decides what each key means for the
//! calculator (clear, evaluate, continue from a result, clear after an
//! error).  Output goes through the port traits in [`ports`], so the
//! session runs unchanged against the LCD, a console, or test mocks.

pub mod events;
pub mod ports;
pub mod service;
