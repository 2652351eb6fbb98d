//! Wall-clock adapter.
//!
//! Reads local time from the host RTC through `chrono`.  Sub-second
//! precision is dropped: records and file names resolve to whole seconds.

use chrono::{Local, NaiveDateTime, Timelike};

use crate::app::ports::ClockPort;

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}
