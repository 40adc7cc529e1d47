//! Matrix positions → key map → session, as the keypad scanner drives it.

use super::mock_hw::{MockDisplay, RecordingSink};

use calcpad::app::service::KeypadSession;
use calcpad::config::CalcConfig;
use calcpad::keymap::Keymap;

const SHIFT: (usize, usize) = (3, 0);

fn press_all(positions: &[(usize, usize)]) -> MockDisplay {
    let config = CalcConfig::default();
    let mut keymap = Keymap::new(config.ignore_key);
    let mut session = KeypadSession::new(config);
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    for &(row, col) in positions {
        if let Some(key) = keymap.press(row, col) {
            session.handle_key(key, &mut display, &mut sink);
        }
    }
    display
}

#[test]
fn power_via_shift_layer() {
    // 2 ⇧^ 3 * 2 =
    let display = press_all(&[(0, 1), SHIFT, (0, 3), (0, 2), (2, 3), (0, 1), (3, 2)]);
    assert_eq!(display.row(0), "2^3*2");
    assert_eq!(display.row(1), "16");
}

#[test]
fn unused_slot_is_a_no_op() {
    // 4 ⇧(unused) 5 =
    let display = press_all(&[(1, 0), SHIFT, (2, 1), (1, 1), (3, 2)]);
    assert_eq!(display.row(0), "45");
    assert_eq!(display.row(1), "45");
}

#[test]
fn shifted_clear_key() {
    // 9 ⇧C
    let display = press_all(&[(2, 2), SHIFT, (1, 3)]);
    assert_eq!(display.row(0), "");
}
