//! Application core — pure domain logic, zero I/O.
//!
//! Edge detection, the write allow-list, ring storage and export all live
//! behind the **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod commands;
pub mod ports;
pub mod service;
