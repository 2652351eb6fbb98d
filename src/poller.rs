//! Edge detection across poll cycles.

use crate::app::ports::SignalPort;
use crate::signals::{Direction, SIGNAL_COUNT, SIGNAL_TABLE, Signal, SignalStates};

/// A signal whose state differs from the previous poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub signal: Signal,
    pub direction: Direction,
    /// Copied from the signal table.
    pub persisted: bool,
}

pub type Transitions = heapless::Vec<Transition, SIGNAL_COUNT>;

/// Owns the last-known state of every signal.
#[derive(Debug, Default)]
pub struct EdgeDetector {
    states: SignalStates,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            states: SignalStates::new(),
        }
    }

    /// Read every signal once, in table order, and return the ones that
    /// changed.  Remembered state is updated for all six either way.
    pub fn detect(&mut self, port: &mut impl SignalPort) -> Transitions {
        let mut changed = Transitions::new();
        for entry in SIGNAL_TABLE {
            let current = port.read(entry.signal);
            if current != self.states.get(entry.signal) {
                // Capacity equals the table length, so this cannot overflow.
                let _ = changed.push(Transition {
                    signal: entry.signal,
                    direction: Direction::from_state(current),
                    persisted: entry.persisted,
                });
            }
            self.states.set(entry.signal, current);
        }
        changed
    }

    pub fn states(&self) -> &SignalStates {
        &self.states
    }
}
