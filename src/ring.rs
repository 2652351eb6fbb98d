//! Fixed-capacity event ring buffer.
//!
//! Capacity is a const generic, so storage is sized at compile time and
//! never reallocates.  Once full, each push overwrites the slot under the
//! cursor (the oldest record).
//!
//! Two counters are kept apart:
//!
//! - [`count`](EventRing::count) — every push ever made, never clamped.
//! - [`live_count`](EventRing::live_count) — slots holding a record, at most `N`.
//!
//! Indexing is by slot.  Slots are in insertion order only until the first
//! wrap; after that slot `i` holds whatever the cursor last wrote there.

use crate::error::EventLogError;
use crate::record::EventRecord;

pub struct EventRing<const N: usize> {
    slots: heapless::Vec<EventRecord, N>,
    cursor: usize,
    writes: usize,
}

impl<const N: usize> Default for EventRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventRing<N> {
    pub const fn new() -> Self {
        const { assert!(N > 0, "ring capacity must be non-zero") };
        Self {
            slots: heapless::Vec::new(),
            cursor: 0,
            writes: 0,
        }
    }

    /// Store `record` at the cursor and advance.  Never fails.
    pub fn push(&mut self, record: EventRecord) {
        // `push` only succeeds before the first wrap, when cursor == len.
        if let Err(record) = self.slots.push(record) {
            self.slots[self.cursor] = record;
        }
        self.cursor = (self.cursor + 1) % N;
        self.writes = self.writes.saturating_add(1);
    }

    /// Total pushes since construction.  Exceeds `N` once the ring wraps.
    pub fn count(&self) -> usize {
        self.writes
    }

    /// Slots currently holding a record.
    pub fn live_count(&self) -> usize {
        self.slots.len()
    }

    /// Record in slot `index`.
    ///
    /// `index` must be below [`live_count`](Self::live_count); anything else
    /// is [`EventLogError::IndexOutOfRange`], including indices below
    /// `count()` once the ring has wrapped.
    pub fn get(&self, index: usize) -> Result<&EventRecord, EventLogError> {
        self.slots
            .get(index)
            .ok_or(EventLogError::IndexOutOfRange {
                index,
                live: self.slots.len(),
            })
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Slot the next push writes to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Live records, oldest first.
    pub fn iter_chronological(&self) -> impl Iterator<Item = &EventRecord> {
        let split = if self.slots.len() < N { 0 } else { self.cursor };
        self.slots[split..].iter().chain(self.slots[..split].iter())
    }
}
