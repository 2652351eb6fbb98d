//! Event log configuration
//!
//! Compile-time limits for the fixed-size storage and run-time parameters
//! for the sinks.  Run-time values can be overridden from a JSON document.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Number of records the production ring holds.
pub const EVENT_LOG_CAPACITY: usize = 20;

/// Maximum label length in bytes (`OVER_TEMP_OFF` is the longest at 13).
pub const LABEL_MAX_LEN: usize = 16;

/// Maximum file name length accepted by the storage medium.
pub const FILE_NAME_MAX_LEN: usize = 32;

/// Run-time configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventLogConfig {
    /// Interval between `poll()` invocations (milliseconds)
    pub poll_interval_ms: u32,
    /// File every qualifying transition is appended to
    pub live_log_file: String,

    // --- Display region used for the last event ---
    pub display_row: u8,
    pub display_col: u8,
    /// Characters blanked before the label is written
    pub display_clear_width: u8,

    /// Directory standing in for the removable medium (host builds)
    pub storage_root: String,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 10,
            live_log_file: String::from("events.txt"),

            display_row: 0,
            display_col: 3,
            display_clear_width: 16,

            storage_root: String::from("sdcard"),
        }
    }
}

impl EventLogConfig {
    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text).map_err(|_| ConfigError::Corrupted)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject out-of-range values.  Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=60_000).contains(&self.poll_interval_ms) {
            return Err(ConfigError::ValidationFailed(
                "poll_interval_ms must be 1–60000",
            ));
        }
        if self.live_log_file.is_empty() || self.live_log_file.len() > FILE_NAME_MAX_LEN {
            return Err(ConfigError::ValidationFailed(
                "live_log_file must be 1–32 bytes",
            ));
        }
        if self.live_log_file.contains(['/', '\\']) {
            return Err(ConfigError::ValidationFailed(
                "live_log_file must not contain a path separator",
            ));
        }
        if (self.display_clear_width as usize) < LABEL_MAX_LEN {
            return Err(ConfigError::ValidationFailed(
                "display_clear_width must cover the longest label",
            ));
        }
        Ok(())
    }
}
