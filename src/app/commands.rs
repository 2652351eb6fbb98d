//! Inbound commands to the application service.
//!
//! The serial menu maps single key presses onto these; the
//! [`EventLogService`](super::service::EventLogService) interprets them.

/// Commands that external adapters can send into the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Print every stored record on the serial console.
    ShowEvents,

    /// Export every stored record to a new timestamped file.
    StoreEvents,

    /// Print the current wall-clock time.
    ShowDateTime,
}

impl AppCommand {
    /// Menu key binding, case-insensitive.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'e' => Some(Self::ShowEvents),
            'w' => Some(Self::StoreEvents),
            't' => Some(Self::ShowDateTime),
            _ => None,
        }
    }
}
