//! Bulk export of stored records to one timestamped file.
//!
//! The exporter walks indices `0..count()` of the ring, renders each record
//! as an export block and appends it to a freshly named file.  Individual
//! failures never abort the batch; they are tallied in an [`ExportReport`]
//! and summarised on the serial console.
//!
//! Because `count()` is the unclamped write total, a wrapped ring yields
//! indices past the live range.  Those come back as
//! [`WriteOutcome::NotAttempted`], distinct from a storage failure.

use core::fmt::Write;

use chrono::NaiveDateTime;
use log::{debug, info, warn};

use crate::app::ports::{FileStoragePort, SerialPort, StorageError};
use crate::format::{self, FileName};
use crate::ring::EventRing;

const STORED_MSG: &str = "File successfully written\r\n\r\n";
const NOTHING_STORED_MSG: &str =
    "There are no events to store or SD card is not available\r\n\r\n";

/// What happened to one index of the export loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Storage rejected the write.
    Failed(StorageError),
    /// The index had no readable record, or it could not be rendered.
    NotAttempted,
}

/// Aggregate result of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// `None` when the clock produced a name that did not fit.
    pub file_name: Option<FileName>,
    pub written: usize,
    pub failed: usize,
    pub not_attempted: usize,
}

impl ExportReport {
    fn new(file_name: Option<FileName>) -> Self {
        Self {
            file_name,
            written: 0,
            failed: 0,
            not_attempted: 0,
        }
    }

    fn tally(&mut self, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Written => self.written += 1,
            WriteOutcome::Failed(_) => self.failed += 1,
            WriteOutcome::NotAttempted => self.not_attempted += 1,
        }
    }

    /// At least one record reached the file.
    pub fn any_stored(&self) -> bool {
        self.written > 0
    }

    /// Indices visited.
    pub fn total(&self) -> usize {
        self.written + self.failed + self.not_attempted
    }
}

/// Export every record of `ring` into a file named after `now`.
pub fn export_all<const N: usize>(
    ring: &EventRing<N>,
    now: NaiveDateTime,
    io: &mut (impl SerialPort + FileStoragePort),
) -> ExportReport {
    let file_name = match format::export_file_name(now) {
        Ok(name) => Some(name),
        Err(e) => {
            warn!("Export: cannot build file name: {}", e);
            None
        }
    };
    let mut report = ExportReport::new(file_name);

    for index in 0..ring.count() {
        let outcome = match &report.file_name {
            Some(name) => export_one(ring, index, name, io),
            None => WriteOutcome::NotAttempted,
        };
        report.tally(outcome);
    }

    if report.any_stored() {
        io.write_str(STORED_MSG);
    } else {
        io.write_str(NOTHING_STORED_MSG);
    }
    info!(
        "Export finished: written={} failed={} not_attempted={}",
        report.written, report.failed, report.not_attempted
    );
    report
}

fn export_one<const N: usize>(
    ring: &EventRing<N>,
    index: usize,
    file_name: &FileName,
    io: &mut (impl SerialPort + FileStoragePort),
) -> WriteOutcome {
    let record = match ring.get(index) {
        Ok(record) => record,
        Err(e) => {
            debug!("Export: skipping index {}: {}", index, e);
            return WriteOutcome::NotAttempted;
        }
    };
    let block = match format::export_block(record) {
        Ok(block) => block,
        Err(e) => {
            warn!("Export: cannot render index {}: {}", index, e);
            return WriteOutcome::NotAttempted;
        }
    };

    match io.append(file_name, &block) {
        Ok(()) => {
            let mut progress: heapless::String<80> = heapless::String::new();
            // Name is bounded to 32 bytes, so the message always fits.
            let _ = write!(progress, "Storing event {} in file {}\r\n", index + 1, file_name);
            io.write_str(&progress);
            WriteOutcome::Written
        }
        Err(e) => {
            debug!("Export: write of index {} failed: {}", index, e);
            WriteOutcome::Failed(e)
        }
    }
}
