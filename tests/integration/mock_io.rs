//! Mock adapters for integration tests.
//!
//! Records every sink call in order so tests can assert on the full
//! output history without a UART, LCD or SD card.

use std::cell::Cell;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use eventlog::app::ports::{
    ClockPort, DisplayPort, FileStoragePort, SerialPort, SignalPort, StorageError,
};
use eventlog::signals::{SIGNAL_COUNT, Signal};

// ── Sink call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Serial(String),
    SetCursor { row: u8, col: u8 },
    Display(String),
    Append { file: String, text: String },
}

// ── MockIo ────────────────────────────────────────────────────

pub struct MockIo {
    pub calls: Vec<SinkCall>,
    /// Storage rejects every write while set.
    pub storage_error: Option<StorageError>,
}

#[allow(dead_code)]
impl MockIo {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            storage_error: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            calls: Vec::new(),
            storage_error: Some(StorageError::Unavailable),
        }
    }

    pub fn serial_text(&self) -> String {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Serial(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn appends(&self) -> Vec<(&str, &str)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Append { file, text } => Some((file.as_str(), text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn display_writes(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Display(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Default for MockIo {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialPort for MockIo {
    fn write_str(&mut self, text: &str) {
        self.calls.push(SinkCall::Serial(text.to_string()));
    }
}

impl DisplayPort for MockIo {
    fn set_cursor(&mut self, row: u8, col: u8) {
        self.calls.push(SinkCall::SetCursor { row, col });
    }

    fn write_str(&mut self, text: &str) {
        self.calls.push(SinkCall::Display(text.to_string()));
    }
}

impl FileStoragePort for MockIo {
    fn append(&mut self, file_name: &str, text: &str) -> Result<(), StorageError> {
        if let Some(e) = self.storage_error {
            return Err(e);
        }
        self.calls.push(SinkCall::Append {
            file: file_name.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}

// ── MockSignals ───────────────────────────────────────────────

pub struct MockSignals {
    pub levels: [bool; SIGNAL_COUNT],
    pub reads: Vec<Signal>,
}

#[allow(dead_code)]
impl MockSignals {
    pub fn new() -> Self {
        Self {
            levels: [false; SIGNAL_COUNT],
            reads: Vec::new(),
        }
    }

    pub fn set(&mut self, signal: Signal, on: bool) {
        self.levels[signal.index()] = on;
    }
}

impl Default for MockSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalPort for MockSignals {
    fn read(&mut self, signal: Signal) -> bool {
        self.reads.push(signal);
        self.levels[signal.index()]
    }
}

// ── MockClock ─────────────────────────────────────────────────

/// Starts at 2024-03-01 12:00:00 and only moves when told to.
pub struct MockClock {
    now: Cell<NaiveDateTime>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(
                NaiveDate::from_ymd_opt(2024, 3, 1)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
            ),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + TimeDelta::seconds(secs));
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for MockClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
