//! Port traits — the hexagonal boundary between the event log and the outside world.
//!
//! ```text
//!   SignalPort ──▶ ┌─────────────────┐ ──▶ SerialPort
//!   ClockPort  ──▶ │ EventLogService │ ──▶ DisplayPort
//!                  └─────────────────┘ ──▶ FileStoragePort
//! ```
//!
//! Driven adapters (GPIO inputs, wall clock, UART, character LCD, SD card)
//! implement these traits.  The [`EventLogService`](super::service::EventLogService)
//! consumes them via generics, so the domain core never touches hardware directly.
//!
//! Output ports are best-effort except [`FileStoragePort`], whose per-call
//! result feeds the export report.

use chrono::NaiveDateTime;

use crate::signals::Signal;

// ───────────────────────────────────────────────────────────────
// Signal ports (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One monitored boolean input.
///
/// Must return promptly and have no side effects visible to the log.
/// A failed hardware read is the reader's own business: it still has to
/// hand back a definite boolean.
pub trait SignalReader {
    fn read(&mut self) -> bool;
}

/// Aggregated read-side port: one reader per [`Signal`].
pub trait SignalPort {
    fn read(&mut self, signal: Signal) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Wall-clock source.  Local time, no zone: the panel has no notion of one.
pub trait ClockPort {
    fn now(&self) -> NaiveDateTime;
}

// ───────────────────────────────────────────────────────────────
// Sink ports (driven adapter: domain → outside world)
// ───────────────────────────────────────────────────────────────

/// Serial console (UART / USB-CDC).
pub trait SerialPort {
    fn write_str(&mut self, text: &str);
}

/// Character display.
pub trait DisplayPort {
    /// Move the write position.  `row`/`col` are zero-based.
    fn set_cursor(&mut self, row: u8, col: u8);

    /// Write text at the current position.
    fn write_str(&mut self, text: &str);
}

/// Removable-media file storage.
///
/// `append` creates the file when it does not exist and appends otherwise.
/// File names are flat (no directories) and at most
/// [`FILE_NAME_MAX_LEN`](crate::config::FILE_NAME_MAX_LEN) bytes.
pub trait FileStoragePort {
    fn append(&mut self, file_name: &str, text: &str) -> Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`FileStoragePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// No medium present or it could not be mounted.
    Unavailable,
    /// File name empty, too long, or contains a path separator.
    InvalidName,
    /// Generic I/O error from the storage backend.
    IoError,
}

/// Errors from configuration loading and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document could not be deserialised.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage unavailable"),
            Self::InvalidName => write!(f, "invalid file name"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
