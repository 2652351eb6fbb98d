//! Integration tests for the poll → ring → sinks pipeline.

use super::mock_io::{MockClock, MockIo, MockSignals, SinkCall};

use eventlog::app::service::EventLogService;
use eventlog::config::EventLogConfig;
use eventlog::signals::Signal;

fn make_app() -> (EventLogService<4>, MockSignals, MockClock, MockIo) {
    (
        EventLogService::with_ring(EventLogConfig::default()),
        MockSignals::new(),
        MockClock::new(),
        MockIo::new(),
    )
}

// ── Qualifying transition fans out to all three sinks ─────────

#[test]
fn gas_on_writes_serial_display_and_file() {
    let (mut app, mut signals, clock, mut io) = make_app();

    signals.set(Signal::GasDetector, true);
    app.poll(&mut signals, &clock, &mut io);

    let line = "2024-03-01 12:00:00  GAS_DET_ON\r\n".to_string();
    assert_eq!(
        io.calls,
        vec![
            SinkCall::Serial(line.clone()),
            SinkCall::SetCursor { row: 0, col: 3 },
            SinkCall::Display(" ".repeat(16)),
            SinkCall::SetCursor { row: 0, col: 3 },
            SinkCall::Display("GAS_DET_ON".to_string()),
            SinkCall::Append {
                file: "events.txt".to_string(),
                text: line,
            },
        ]
    );
    assert_eq!(app.ring().count(), 1);
    assert_eq!(app.ring().get(0).unwrap().label().as_str(), "GAS_DET_ON");
}

#[test]
fn over_temperature_off_edge_is_recorded() {
    let (mut app, mut signals, clock, mut io) = make_app();

    signals.set(Signal::OverTemperature, true);
    app.poll(&mut signals, &clock, &mut io);
    clock.advance_secs(61);
    signals.set(Signal::OverTemperature, false);
    app.poll(&mut signals, &clock, &mut io);

    assert_eq!(io.display_writes().last(), Some(&"OVER_TEMP_OFF"));
    let appends = io.appends();
    assert_eq!(appends.len(), 2);
    assert_eq!(appends[1].1, "2024-03-01 12:01:01  OVER_TEMP_OFF\r\n");
}

// ── Repeated identical reads are silent ──────────────────────

#[test]
fn steady_level_produces_one_write() {
    let (mut app, mut signals, clock, mut io) = make_app();

    signals.set(Signal::GasDetector, true);
    for _ in 0..10 {
        app.poll(&mut signals, &clock, &mut io);
    }
    assert_eq!(app.ring().count(), 1);
    assert_eq!(io.appends().len(), 1);
}

#[test]
fn idle_poll_is_a_no_op_apart_from_reads() {
    let (mut app, mut signals, clock, mut io) = make_app();

    app.poll(&mut signals, &clock, &mut io);
    assert!(io.calls.is_empty());
    assert_eq!(signals.reads, Signal::ALL);
}

// ── Allow-list ────────────────────────────────────────────────

#[test]
fn non_qualifying_signals_never_write() {
    let (mut app, mut signals, clock, mut io) = make_app();

    for round in 0..4 {
        let on = round % 2 == 0;
        for s in [
            Signal::Alarm,
            Signal::IncorrectCode,
            Signal::SystemBlocked,
            Signal::Motion,
        ] {
            signals.set(s, on);
        }
        app.poll(&mut signals, &clock, &mut io);
    }

    assert!(io.calls.is_empty());
    assert_eq!(app.ring().count(), 0);
    // State is still tracked for them.
    assert!(!app.signal_states().get(Signal::Motion));
}

#[test]
fn simultaneous_edges_written_in_table_order() {
    let (mut app, mut signals, clock, mut io) = make_app();

    for s in Signal::ALL {
        signals.set(s, true);
    }
    app.poll(&mut signals, &clock, &mut io);

    let displayed = io.display_writes();
    let labels: Vec<&str> = displayed.into_iter().filter(|s| !s.trim().is_empty()).collect();
    assert_eq!(labels, ["GAS_DET_ON", "OVER_TEMP_ON"]);
}

// ── Storage failure does not stop the other sinks ────────────

#[test]
fn missing_card_still_records_and_reports() {
    let mut app: EventLogService<4> = EventLogService::with_ring(EventLogConfig::default());
    let mut signals = MockSignals::new();
    let clock = MockClock::new();
    let mut io = MockIo::unavailable();

    signals.set(Signal::GasDetector, true);
    app.poll(&mut signals, &clock, &mut io);

    assert_eq!(app.ring().count(), 1);
    assert_eq!(io.serial_text(), "2024-03-01 12:00:00  GAS_DET_ON\r\n");
    assert_eq!(io.display_writes().last(), Some(&"GAS_DET_ON"));
    assert!(io.appends().is_empty());
}

// ── Capacity-4 scenario ──────────────────────────────────────

#[test]
fn fifth_transition_overwrites_first_slot() {
    let (mut app, mut signals, clock, mut io) = make_app();

    let steps = [
        (Signal::GasDetector, true),
        (Signal::OverTemperature, true),
        (Signal::GasDetector, false),
        (Signal::OverTemperature, false),
        (Signal::GasDetector, true),
    ];
    for (signal, on) in steps {
        signals.set(signal, on);
        app.poll(&mut signals, &clock, &mut io);
        clock.advance_secs(1);
    }

    let ring = app.ring();
    assert_eq!(ring.count(), 5);
    assert_eq!(ring.live_count(), 4);
    let first = ring.get(0).unwrap();
    assert_eq!(first.label().as_str(), "GAS_DET_ON");
    assert_eq!(chrono::Timelike::second(&first.timestamp()), 4);
    assert_eq!(ring.get(3).unwrap().label().as_str(), "OVER_TEMP_OFF");
    assert!(ring.get(4).is_err());
}
