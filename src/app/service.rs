//! Application service — the hexagonal core.
//!
//! [`EventLogService`] owns the edge detector and the ring buffer.  All I/O
//! flows through port traits injected at call sites, so the whole service
//! runs against mock adapters in tests.
//!
//! ```text
//!  SignalPort ──▶ ┌──────────────────────┐ ──▶ SerialPort
//!                 │   EventLogService    │ ──▶ DisplayPort
//!  ClockPort  ──▶ │ EdgeDetector · Ring  │ ──▶ FileStoragePort
//!                 └──────────────────────┘
//! ```
//!
//! The service is single-writer: every mutating call takes `&mut self`.

use log::{debug, info, warn};

use crate::config::{EVENT_LOG_CAPACITY, EventLogConfig};
use crate::error::Result;
use crate::export::{self, ExportReport};
use crate::format;
use crate::poller::{EdgeDetector, Transition};
use crate::record::{EventLabel, EventRecord};
use crate::ring::EventRing;
use crate::signals::SignalStates;

use super::commands::AppCommand;
use super::ports::{ClockPort, DisplayPort, FileStoragePort, SerialPort, SignalPort};

const NO_EVENTS_MSG: &str = "There are no events to show\r\n";

// ───────────────────────────────────────────────────────────────
// EventLogService
// ───────────────────────────────────────────────────────────────

pub struct EventLogService<const N: usize = EVENT_LOG_CAPACITY> {
    config: EventLogConfig,
    detector: EdgeDetector,
    ring: EventRing<N>,
    poll_count: u64,
}

impl EventLogService<EVENT_LOG_CAPACITY> {
    /// Service with the production ring size.
    pub fn new(config: EventLogConfig) -> Self {
        Self::with_ring(config)
    }
}

impl<const N: usize> EventLogService<N> {
    /// Service with a ring of `N` records.
    pub fn with_ring(config: EventLogConfig) -> Self {
        Self {
            config,
            detector: EdgeDetector::new(),
            ring: EventRing::new(),
            poll_count: 0,
        }
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Sample every signal once and log each qualifying edge.
    ///
    /// Signals off the allow-list are tracked but produce no output.
    /// Sink failures are logged and otherwise ignored.
    pub fn poll(
        &mut self,
        signals: &mut impl SignalPort,
        clock: &impl ClockPort,
        io: &mut (impl SerialPort + DisplayPort + FileStoragePort),
    ) {
        self.poll_count += 1;
        for transition in self.detector.detect(signals) {
            if !transition.persisted {
                debug!(
                    "{:?} -> {:?} (not recorded)",
                    transition.signal, transition.direction
                );
                continue;
            }
            if let Err(e) = self.write_event(transition, clock, io) {
                warn!("Event {:?} {:?}: {}", transition.signal, transition.direction, e);
            }
        }
    }

    /// Record one qualifying transition and fan it out to the three sinks.
    fn write_event(
        &mut self,
        transition: Transition,
        clock: &impl ClockPort,
        io: &mut (impl SerialPort + DisplayPort + FileStoragePort),
    ) -> Result<()> {
        let label = EventLabel::for_signal(transition.signal, transition.direction)?;
        let now = clock.now();
        self.ring.push(EventRecord::new(now, label.clone()));
        info!("Recorded {} ({} total)", label, self.ring.count());

        let line = format::log_line(now, &label)?;
        SerialPort::write_str(io, &line);

        let (row, col) = (self.config.display_row, self.config.display_col);
        io.set_cursor(row, col);
        let blanks: heapless::String<64> = (0..self.config.display_clear_width.min(64))
            .map(|_| ' ')
            .collect();
        DisplayPort::write_str(io, &blanks);
        io.set_cursor(row, col);
        DisplayPort::write_str(io, label.as_str());

        io.append(&self.config.live_log_file, &line)?;
        Ok(())
    }

    // ── On-demand operations ──────────────────────────────────

    /// Dump every stored record into a new timestamped file.
    /// Always completes; inspect the report for per-record results.
    pub fn export(
        &self,
        clock: &impl ClockPort,
        io: &mut (impl SerialPort + FileStoragePort),
    ) -> ExportReport {
        export::export_all(&self.ring, clock.now(), io)
    }

    /// Print the live records, oldest first, on the serial console.
    pub fn show_events(&self, io: &mut impl SerialPort) {
        if self.ring.is_empty() {
            io.write_str(NO_EVENTS_MSG);
            return;
        }
        for record in self.ring.iter_chronological() {
            match format::export_block(record) {
                Ok(block) => io.write_str(&block),
                Err(e) => warn!("Cannot render {}: {}", record.label(), e),
            }
        }
    }

    /// Print the current wall-clock time on the serial console.
    pub fn show_date_time(&self, clock: &impl ClockPort, io: &mut impl SerialPort) {
        match format::ctime(clock.now()) {
            Ok(now) => {
                let mut line: heapless::String<64> = heapless::String::new();
                // "Date and Time = " plus a 24-byte date always fits.
                let _ = line.push_str("Date and Time = ");
                let _ = line.push_str(&now);
                let _ = line.push_str("\r\n");
                io.write_str(&line);
            }
            Err(e) => warn!("Cannot render clock: {}", e),
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process a menu command.
    pub fn handle_command(
        &self,
        cmd: AppCommand,
        clock: &impl ClockPort,
        io: &mut (impl SerialPort + FileStoragePort),
    ) {
        debug!("Command {:?}", cmd);
        match cmd {
            AppCommand::ShowEvents => self.show_events(io),
            AppCommand::StoreEvents => {
                let _ = self.export(clock, io);
            }
            AppCommand::ShowDateTime => self.show_date_time(clock, io),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn ring(&self) -> &EventRing<N> {
        &self.ring
    }

    pub fn signal_states(&self) -> &SignalStates {
        self.detector.states()
    }

    pub fn config(&self) -> &EventLogConfig {
        &self.config
    }

    /// Polls executed since startup.
    pub fn poll_count(&self) -> u64 {
        self.poll_count
    }
}
