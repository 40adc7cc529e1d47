//! Integration tests for the key → session → calculator → display pipeline.

use super::mock_hw::{MockDisplay, RecordingSink};

use calcpad::app::events::{CalcEvent, RejectReason};
use calcpad::app::service::{KeypadSession, Phase};
use calcpad::calc::buffer::MAX_TEXT_LEN;
use calcpad::config::{CalcConfig, OverflowPolicy};
use calcpad::error::{CalcError, EvalError};

fn make_session() -> (KeypadSession, MockDisplay, RecordingSink) {
    let mut session = KeypadSession::new(CalcConfig::default());
    let mut display = MockDisplay::new();
    session.start(&mut display);
    (session, display, RecordingSink::new())
}

fn type_keys(
    session: &mut KeypadSession,
    display: &mut MockDisplay,
    sink: &mut RecordingSink,
    keys: &str,
) {
    for key in keys.chars() {
        session.handle_key(key, display, sink);
    }
}

#[test]
fn sum_shows_expression_and_result() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "11+45=");

    assert_eq!(display.row(0), "11+45");
    assert_eq!(display.row(1), "56");
    assert_eq!(session.phase(), Phase::Resulted);
    assert_eq!(sink.last(), Some(&CalcEvent::Evaluated { value: 56.0 }));
}

#[test]
fn expression_row_tracks_typing() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "2*s3");
    assert_eq!(display.row(0), "2*sin3");
    assert_eq!(display.row(1), "");
    assert_eq!(session.phase(), Phase::Accumulating);
}

#[test]
fn operator_after_result_continues() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "2+3=");
    type_keys(&mut session, &mut display, &mut sink, "*2=");

    assert_eq!(display.row(1), "10");
    assert_eq!(session.calculator().last_result(), Some(10.0));
    assert!(sink.events.contains(&CalcEvent::Cleared { implicit: true }));
}

#[test]
fn digit_after_result_starts_fresh() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "2+3=");
    type_keys(&mut session, &mut display, &mut sink, "7");

    assert_eq!(display.row(0), "7");
    type_keys(&mut session, &mut display, &mut sink, "=");
    assert_eq!(display.row(1), "7");
}

#[test]
fn division_by_zero_shows_error_then_recovers() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "10/0=");

    assert_eq!(display.row(1), "Error");
    assert_eq!(session.phase(), Phase::Errored);
    assert!(session.calculator().had_error());
    assert_eq!(
        sink.last(),
        Some(&CalcEvent::EvaluationFailed(CalcError::Eval(EvalError::DivisionByZero)))
    );

    type_keys(&mut session, &mut display, &mut sink, "4=");
    assert_eq!(display.row(1), "4");
    assert!(!session.calculator().had_error());
}

#[test]
fn clear_key_blanks_display_and_keeps_memory() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "6*7=C");

    assert_eq!(display.row(0), "");
    assert_eq!(display.row(1), "");
    assert_eq!(session.phase(), Phase::Empty);
    assert_eq!(sink.last(), Some(&CalcEvent::Cleared { implicit: false }));

    type_keys(&mut session, &mut display, &mut sink, "-2=");
    assert_eq!(display.row(1), "40");
}

#[test]
fn trig_result_is_rounded_for_display() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "s30=");
    assert_eq!(display.row(0), "sin30");
    assert_eq!(display.row(1), "0.5");
}

#[test]
fn full_buffer_drops_keys_by_default() {
    let (mut session, mut display, mut sink) = make_session();
    for _ in 0..MAX_TEXT_LEN + 3 {
        session.handle_key('1', &mut display, &mut sink);
    }

    assert_eq!(session.calculator().current_expression().len(), MAX_TEXT_LEN);
    assert_eq!(
        sink.last(),
        Some(&CalcEvent::KeyRejected {
            key: '1',
            reason: RejectReason::BufferFull,
        })
    );
}

#[test]
fn full_buffer_clears_under_clear_policy() {
    let config = CalcConfig {
        overflow: OverflowPolicy::ClearBuffer,
        ..CalcConfig::default()
    };
    let mut session = KeypadSession::new(config);
    let mut display = MockDisplay::new();
    let mut sink = RecordingSink::new();

    for _ in 0..MAX_TEXT_LEN {
        session.handle_key('1', &mut display, &mut sink);
    }
    session.handle_key('9', &mut display, &mut sink);

    assert_eq!(session.calculator().current_expression(), "9");
    assert_eq!(sink.last(), Some(&CalcEvent::KeyAccepted('9')));
}

#[test]
fn bracket_surfaces_as_error() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "(1=");
    assert_eq!(display.row(1), "Error");
    assert!(session.calculator().had_error());
}

#[test]
fn equals_on_empty_shows_memory() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "=");
    assert_eq!(display.row(1), "0");

    type_keys(&mut session, &mut display, &mut sink, "12=C=");
    assert_eq!(display.row(1), "12");
}

#[test]
fn operator_after_empty_equals_has_no_memory() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "=");
    assert_eq!(session.calculator().last_result(), None);

    type_keys(&mut session, &mut display, &mut sink, "+3=");
    assert_eq!(display.row(1), "Error");
    assert!(session.calculator().had_error());
}

#[test]
fn large_results_are_shown_in_full() {
    let (mut session, mut display, mut sink) = make_session();
    type_keys(&mut session, &mut display, &mut sink, "10^20=");
    assert_eq!(display.row(1), "100000000000000000000");
    assert_eq!(display.row(7), "");
}
