//! Integration tests for bulk export and the serial menu.

use super::mock_io::{MockClock, MockIo, MockSignals};

use eventlog::app::commands::AppCommand;
use eventlog::app::ports::StorageError;
use eventlog::app::service::EventLogService;
use eventlog::config::EventLogConfig;
use eventlog::format::parse_export_label;
use eventlog::signals::{Direction, Signal};

fn app_with_events(edges: &[(Signal, bool)]) -> (EventLogService<4>, MockClock) {
    let mut app = EventLogService::with_ring(EventLogConfig::default());
    let mut signals = MockSignals::new();
    let clock = MockClock::new();
    let mut io = MockIo::new();
    for &(signal, on) in edges {
        signals.set(signal, on);
        app.poll(&mut signals, &clock, &mut io);
        clock.advance_secs(1);
    }
    (app, clock)
}

#[test]
fn export_with_no_events_writes_no_file() {
    let (app, clock) = app_with_events(&[]);
    let mut io = MockIo::new();

    let report = app.export(&clock, &mut io);

    assert!(io.appends().is_empty(), "no file must be created");
    assert!(!report.any_stored());
    assert_eq!(report.total(), 0);
    assert_eq!(
        io.serial_text(),
        "There are no events to store or SD card is not available\r\n\r\n"
    );
}

#[test]
fn export_writes_every_record_to_one_timestamped_file() {
    let (app, clock) = app_with_events(&[
        (Signal::GasDetector, true),
        (Signal::OverTemperature, true),
    ]);
    let mut io = MockIo::new();

    let report = app.export(&clock, &mut io);

    assert_eq!(report.written, 2);
    assert_eq!(report.file_name.as_deref(), Some("2024_03_01_12_00_02.txt"));
    let appends = io.appends();
    assert_eq!(
        appends,
        vec![
            (
                "2024_03_01_12_00_02.txt",
                "Event = GAS_DET_ON\r\nDate and Time = Fri Mar  1 12:00:00 2024\r\n\r\n"
            ),
            (
                "2024_03_01_12_00_02.txt",
                "Event = OVER_TEMP_ON\r\nDate and Time = Fri Mar  1 12:00:01 2024\r\n\r\n"
            ),
        ]
    );
    assert_eq!(
        io.serial_text(),
        "Storing event 1 in file 2024_03_01_12_00_02.txt\r\n\
         Storing event 2 in file 2024_03_01_12_00_02.txt\r\n\
         File successfully written\r\n\r\n"
    );
}

#[test]
fn exported_blocks_parse_back_to_their_transitions() {
    let (app, clock) = app_with_events(&[
        (Signal::GasDetector, true),
        (Signal::GasDetector, false),
    ]);
    let mut io = MockIo::new();
    app.export(&clock, &mut io);

    let parsed: Vec<_> = io
        .appends()
        .into_iter()
        .map(|(_, block)| parse_export_label(block).unwrap())
        .collect();
    assert_eq!(
        parsed,
        [
            (Signal::GasDetector, Direction::On),
            (Signal::GasDetector, Direction::Off)
        ]
    );
}

#[test]
fn unavailable_card_is_reported_not_raised() {
    let (app, clock) = app_with_events(&[(Signal::GasDetector, true)]);
    let mut io = MockIo::unavailable();

    let report = app.export(&clock, &mut io);

    assert_eq!(report.failed, 1);
    assert_eq!(report.written, 0);
    assert!(
        io.serial_text()
            .ends_with("There are no events to store or SD card is not available\r\n\r\n")
    );
    assert_eq!(io.storage_error, Some(StorageError::Unavailable));
}

#[test]
fn wrapped_log_exports_live_records_and_skips_the_rest() {
    let (app, clock) = app_with_events(&[
        (Signal::GasDetector, true),
        (Signal::OverTemperature, true),
        (Signal::GasDetector, false),
        (Signal::OverTemperature, false),
        (Signal::GasDetector, true),
    ]);
    let mut io = MockIo::new();

    let report = app.export(&clock, &mut io);

    assert_eq!(report.written, 4);
    assert_eq!(report.not_attempted, 1);
    assert_eq!(report.failed, 0);
    assert!(report.any_stored());
}

#[test]
fn store_events_command_runs_export() {
    let (app, clock) = app_with_events(&[(Signal::OverTemperature, true)]);
    let mut io = MockIo::new();

    app.handle_command(AppCommand::StoreEvents, &clock, &mut io);

    assert_eq!(io.appends().len(), 1);
    assert!(io.serial_text().ends_with("File successfully written\r\n\r\n"));
}

#[test]
fn show_events_command_prints_blocks() {
    let (app, clock) = app_with_events(&[(Signal::OverTemperature, true)]);
    let mut io = MockIo::new();

    app.handle_command(AppCommand::ShowEvents, &clock, &mut io);

    assert_eq!(
        io.serial_text(),
        "Event = OVER_TEMP_ON\r\nDate and Time = Fri Mar  1 12:00:00 2024\r\n\r\n"
    );
    assert!(io.appends().is_empty());
}
