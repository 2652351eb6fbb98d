//! Signal input adapters.
//!
//! [`InputSignal`] turns any `embedded_hal` digital input into a
//! [`SignalReader`]; [`SharedSignal`] is a software-driven input for the
//! host simulator and tests.  [`SignalHub`] owns one reader per monitored
//! signal and exposes them through [`SignalPort`].

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::InputPin;
use log::warn;

use crate::app::ports::{SignalPort, SignalReader};
use crate::signals::{SIGNAL_COUNT, Signal};

/// Logic level that means "on".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

/// GPIO-backed reader.
///
/// A failed pin read keeps the last good value, so a flaky input never
/// produces a spurious edge.
pub struct InputSignal<P: InputPin> {
    pin: P,
    polarity: Polarity,
    last: bool,
}

impl<P: InputPin> InputSignal<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self {
            pin,
            polarity,
            last: false,
        }
    }
}

impl<P: InputPin> SignalReader for InputSignal<P> {
    fn read(&mut self) -> bool {
        let level = match self.polarity {
            Polarity::ActiveHigh => self.pin.is_high(),
            Polarity::ActiveLow => self.pin.is_low(),
        };
        match level {
            Ok(on) => self.last = on,
            Err(e) => warn!("input read failed ({:?}), holding {}", e, self.last),
        }
        self.last
    }
}

/// Software input; clones share the same level.
#[derive(Debug, Clone, Default)]
pub struct SharedSignal(Rc<Cell<bool>>);

impl SharedSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, on: bool) {
        self.0.set(on);
    }

    /// Flip the level and return the new one.
    pub fn toggle(&self) -> bool {
        let on = !self.0.get();
        self.0.set(on);
        on
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }
}

impl SignalReader for SharedSignal {
    fn read(&mut self) -> bool {
        self.0.get()
    }
}

/// One reader per signal, indexed in poll order.
pub struct SignalHub {
    readers: [Box<dyn SignalReader>; SIGNAL_COUNT],
}

impl SignalHub {
    /// `readers[i]` serves `Signal::ALL[i]`.
    pub fn new(readers: [Box<dyn SignalReader>; SIGNAL_COUNT]) -> Self {
        Self { readers }
    }

    /// A hub of software inputs plus handles to drive them.
    pub fn simulated() -> (Self, [SharedSignal; SIGNAL_COUNT]) {
        let handles: [SharedSignal; SIGNAL_COUNT] = core::array::from_fn(|_| SharedSignal::new());
        let readers = core::array::from_fn(|i| Box::new(handles[i].clone()) as Box<dyn SignalReader>);
        (Self::new(readers), handles)
    }
}

impl SignalPort for SignalHub {
    fn read(&mut self, signal: Signal) -> bool {
        self.readers[signal.index()].read()
    }
}
