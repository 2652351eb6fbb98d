//! Alarm-panel event log library.
//!
//! Samples six boolean panel signals, records gas and over-temperature
//! transitions in a fixed-capacity ring, fans each one out to the serial
//! console, the character display and a live log file, and exports the
//! stored records on demand.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod poller;
pub mod record;
pub mod ring;
pub mod signals;
