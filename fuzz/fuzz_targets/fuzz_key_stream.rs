//! Fuzz target: arbitrary key streams into `Calculator`
//!
//! Each input byte is one key; `=` evaluates and `C` clears, the way the
//! keypad loop uses the calculator.  Asserts that nothing panics, the
//! buffer stays bounded, and a failed evaluation always reports the
//! error flag with the zero sentinel.
//!
//! cargo fuzz run fuzz_key_stream

#![no_main]

use calcpad::calc::buffer::MAX_TEXT_LEN;
use calcpad::calc::{Calculator, ERROR_SENTINEL};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut calc = Calculator::new();

    for &byte in data {
        match byte {
            b'=' => {
                let value = calc.evaluate();
                if calc.had_error() {
                    assert_eq!(value, ERROR_SENTINEL);
                } else {
                    assert_eq!(calc.last_result().unwrap_or(0.0).to_bits(), value.to_bits());
                }
            }
            b'C' => {
                calc.clear_expression();
                assert!(calc.is_empty() && !calc.had_error());
            }
            _ => {
                let _ = calc.add_char(char::from(byte));
            }
        }
        assert!(calc.current_expression().len() <= MAX_TEXT_LEN);
    }
});
