//! Text rendering for records.
//!
//! Every output is built in a fixed-capacity `heapless::String` through
//! `core::fmt::Write`; anything that would overflow its buffer is an error,
//! never a partial write.
//!
//! | Output        | Shape                                                      |
//! |---------------|------------------------------------------------------------|
//! | live log line | `2024-03-01 12:00:00  GAS_DET_ON\r\n`                      |
//! | export block  | `Event = GAS_DET_ON\r\nDate and Time = Fri Mar  1 12:00:00 2024\r\n\r\n` |
//! | export file   | `2024_03_01_12_00_00.txt`                                  |

use core::fmt::Write;

use chrono::NaiveDateTime;

use crate::config::FILE_NAME_MAX_LEN;
use crate::error::EventLogError;
use crate::record::{EventLabel, EventRecord};
use crate::signals::{Direction, Signal};

/// Capacity of a rendered live log line.
pub const LOG_LINE_LEN: usize = 64;
/// Capacity of a rendered export block.
pub const EXPORT_BLOCK_LEN: usize = 96;
/// Capacity of a ctime-style date string.
pub const CTIME_LEN: usize = 32;

pub type LogLine = heapless::String<LOG_LINE_LEN>;
pub type ExportBlock = heapless::String<EXPORT_BLOCK_LEN>;
pub type FileName = heapless::String<FILE_NAME_MAX_LEN>;
pub type CtimeString = heapless::String<CTIME_LEN>;

const LOG_TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
const FILE_NAME_PATTERN: &str = "%Y_%m_%d_%H_%M_%S";
/// `Www Mmm dd hh:mm:ss yyyy`, day space-padded, English names regardless of locale.
const CTIME_PATTERN: &str = "%a %b %e %H:%M:%S %Y";

const EXPORT_EVENT_PREFIX: &str = "Event = ";
const EXPORT_DATE_PREFIX: &str = "Date and Time = ";

/// `"<YYYY-MM-DD HH:MM:SS>  <label>\r\n"`
pub fn log_line(timestamp: NaiveDateTime, label: &EventLabel) -> Result<LogLine, EventLogError> {
    let mut line = LogLine::new();
    write!(line, "{}  {}\r\n", timestamp.format(LOG_TIMESTAMP_PATTERN), label)
        .map_err(|_| EventLogError::LineTooLong)?;
    Ok(line)
}

/// Fixed-width ctime-style date, without the trailing newline.
pub fn ctime(timestamp: NaiveDateTime) -> Result<CtimeString, EventLogError> {
    let mut s = CtimeString::new();
    write!(s, "{}", timestamp.format(CTIME_PATTERN)).map_err(|_| EventLogError::LineTooLong)?;
    Ok(s)
}

/// `"Event = <label>\r\nDate and Time = <ctime>\r\n\r\n"`
pub fn export_block(record: &EventRecord) -> Result<ExportBlock, EventLogError> {
    let mut block = ExportBlock::new();
    write!(
        block,
        "{EXPORT_EVENT_PREFIX}{}\r\n{EXPORT_DATE_PREFIX}{}\r\n\r\n",
        record.label(),
        record.timestamp().format(CTIME_PATTERN),
    )
    .map_err(|_| EventLogError::LineTooLong)?;
    Ok(block)
}

/// `<YYYY_MM_DD_HH_MM_SS>.txt`
pub fn export_file_name(now: NaiveDateTime) -> Result<FileName, EventLogError> {
    let mut name = FileName::new();
    write!(name, "{}.txt", now.format(FILE_NAME_PATTERN))
        .map_err(|_| EventLogError::FileNameTooLong)?;
    Ok(name)
}

/// Recover signal and direction from a rendered export block.
pub fn parse_export_label(block: &str) -> Result<(Signal, Direction), EventLogError> {
    let first = block
        .split("\r\n")
        .next()
        .ok_or(EventLogError::MalformedLabel)?;
    let label = first
        .strip_prefix(EXPORT_EVENT_PREFIX)
        .ok_or(EventLogError::MalformedLabel)?;
    EventLabel::parse(label)
}
