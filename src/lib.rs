//! Calcpad calculator library.
//!
//! Exposes the keystroke-driven expression engine ([`calc`]), the keypad
//! loop ([`app`]) and its host adapters.  Nothing here touches hardware;
//! the keypad scanner and LCD driver sit behind the port traits.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod calc;
pub mod config;
pub mod error;
pub mod keymap;

pub use calc::Calculator;
pub use error::{CalcError, EvalError, ParseError};
