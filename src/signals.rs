//! Monitored signals and the write allow-list.
//!
//! The panel watches six boolean conditions.  Every one of them is sampled
//! and edge-tracked on each poll, but only the entries flagged `persisted`
//! in [`SIGNAL_TABLE`] reach the ring buffer and the sinks.

/// Number of monitored signals.
pub const SIGNAL_COUNT: usize = 6;

/// Closed set of monitored signals, in poll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Signal {
    /// Siren / alarm output.
    Alarm = 0,
    /// Gas detector.
    GasDetector = 1,
    /// Over-temperature detector.
    OverTemperature = 2,
    /// Incorrect-code indicator LED.
    IncorrectCode = 3,
    /// System-blocked indicator LED.
    SystemBlocked = 4,
    /// PIR motion sensor.
    Motion = 5,
}

impl Signal {
    /// All signals in poll order.
    pub const ALL: [Signal; SIGNAL_COUNT] = [
        Signal::Alarm,
        Signal::GasDetector,
        Signal::OverTemperature,
        Signal::IncorrectCode,
        Signal::SystemBlocked,
        Signal::Motion,
    ];

    /// Name used as the label stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alarm => "ALARM",
            Self::GasDetector => "GAS_DET",
            Self::OverTemperature => "OVER_TEMP",
            Self::IncorrectCode => "LED_IC",
            Self::SystemBlocked => "LED_SB",
            Self::Motion => "MOTION",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether transitions of this signal are recorded.
    pub fn is_persisted(self) -> bool {
        SIGNAL_TABLE[self.index()].persisted
    }
}

/// One row of the signal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalEntry {
    pub signal: Signal,
    /// Transitions are stored and written to the sinks.
    pub persisted: bool,
}

/// Signal table, iterated in this order by the poller.
pub const SIGNAL_TABLE: [SignalEntry; SIGNAL_COUNT] = [
    SignalEntry { signal: Signal::Alarm, persisted: false },
    SignalEntry { signal: Signal::GasDetector, persisted: true },
    SignalEntry { signal: Signal::OverTemperature, persisted: true },
    SignalEntry { signal: Signal::IncorrectCode, persisted: false },
    SignalEntry { signal: Signal::SystemBlocked, persisted: false },
    SignalEntry { signal: Signal::Motion, persisted: false },
];

/// Last-known state of every signal.  All `false` at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalStates {
    states: [bool; SIGNAL_COUNT],
}

impl SignalStates {
    pub const fn new() -> Self {
        Self {
            states: [false; SIGNAL_COUNT],
        }
    }

    pub fn get(&self, signal: Signal) -> bool {
        self.states[signal.index()]
    }

    pub fn set(&mut self, signal: Signal, on: bool) {
        self.states[signal.index()] = on;
    }
}

/// Direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    On,
    Off,
}

impl Direction {
    pub const fn from_state(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    /// Label suffix, including the separator.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::On => "_ON",
            Self::Off => "_OFF",
        }
    }
}
