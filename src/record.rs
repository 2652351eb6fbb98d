//! Event records.
//!
//! A record is a timestamp plus a bounded label such as `GAS_DET_ON`.
//! Records are immutable once built; the ring buffer only ever replaces
//! them whole.

use core::fmt;

use chrono::NaiveDateTime;

use crate::config::LABEL_MAX_LEN;
use crate::error::EventLogError;
use crate::signals::{Direction, Signal};

/// `<SIGNAL NAME><_ON|_OFF>`, at most [`LABEL_MAX_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLabel(heapless::String<LABEL_MAX_LEN>);

impl EventLabel {
    /// Build a label from a stem and a direction.
    ///
    /// Fails instead of truncating when the result would not fit.
    pub fn new(name: &str, direction: Direction) -> Result<Self, EventLogError> {
        let mut s = heapless::String::new();
        s.push_str(name).map_err(|_| EventLogError::LabelTooLong)?;
        s.push_str(direction.suffix())
            .map_err(|_| EventLogError::LabelTooLong)?;
        Ok(Self(s))
    }

    pub fn for_signal(signal: Signal, direction: Direction) -> Result<Self, EventLogError> {
        Self::new(signal.name(), direction)
    }

    /// Split a label back into signal and direction.
    pub fn parse(text: &str) -> Result<(Signal, Direction), EventLogError> {
        let (stem, direction) = if let Some(stem) = text.strip_suffix(Direction::Off.suffix()) {
            (stem, Direction::Off)
        } else if let Some(stem) = text.strip_suffix(Direction::On.suffix()) {
            (stem, Direction::On)
        } else {
            return Err(EventLogError::MalformedLabel);
        };
        let signal = Signal::from_name(stem).ok_or(EventLogError::MalformedLabel)?;
        Ok((signal, direction))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    timestamp: NaiveDateTime,
    label: EventLabel,
}

impl EventRecord {
    pub fn new(timestamp: NaiveDateTime, label: EventLabel) -> Self {
        Self { timestamp, label }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn label(&self) -> &EventLabel {
        &self.label
    }
}
