//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the keypad session
//! against mock adapters.  All tests run on the host with no LCD or
//! keypad attached.

mod keymap_flow_tests;
mod mock_hw;
mod session_tests;
