//! Unified error types for the event log.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! callers' error handling uniform.  All variants are `Copy` so they can be
//! passed through the poll and export paths without allocation.
//!
//! Nothing here is fatal: storage failures are aggregated into an export
//! report and precondition violations surface as typed values instead of
//! reading past the live range of the ring.

use core::fmt;

use crate::app::ports::StorageError;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Ring buffer access or bounded formatting failed.
    Log(EventLogError),
    /// The file storage collaborator rejected a write.
    Storage(StorageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Log(e) => write!(f, "event log: {e}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

// ---------------------------------------------------------------------------
// Event log errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLogError {
    /// `get(index)` past the slots that currently hold a record.
    IndexOutOfRange { index: usize, live: usize },
    /// A label would not fit in `LABEL_MAX_LEN` bytes.
    LabelTooLong,
    /// A rendered line or export block would not fit its buffer.
    LineTooLong,
    /// A generated file name would exceed `FILE_NAME_MAX_LEN`.
    FileNameTooLong,
    /// Text could not be parsed back into a label.
    MalformedLabel,
}

impl fmt::Display for EventLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, live } => {
                write!(f, "index {index} out of range ({live} live records)")
            }
            Self::LabelTooLong => write!(f, "label too long"),
            Self::LineTooLong => write!(f, "rendered line too long"),
            Self::FileNameTooLong => write!(f, "file name too long"),
            Self::MalformedLabel => write!(f, "malformed label"),
        }
    }
}

impl From<EventLogError> for Error {
    fn from(e: EventLogError) -> Self {
        Self::Log(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, Error>;
