//! Panel adapter — bundles the three output sinks behind one value.
//!
//! The service takes a single `io` implementing [`SerialPort`],
//! [`DisplayPort`] and [`FileStoragePort`]; this avoids three separate
//! mutable borrows while keeping the port boundary explicit.

use std::io::Write;

use crate::adapters::display::CharacterDisplay;
use crate::adapters::serial::ConsoleSerial;
use crate::adapters::storage::DirectoryStorage;
use crate::app::ports::{DisplayPort, FileStoragePort, SerialPort, StorageError};

pub struct PanelAdapter<W: Write> {
    serial: ConsoleSerial<W>,
    display: CharacterDisplay,
    storage: DirectoryStorage,
}

impl<W: Write> PanelAdapter<W> {
    pub fn new(serial: ConsoleSerial<W>, display: CharacterDisplay, storage: DirectoryStorage) -> Self {
        Self {
            serial,
            display,
            storage,
        }
    }

    pub fn display(&self) -> &CharacterDisplay {
        &self.display
    }

    pub fn storage(&self) -> &DirectoryStorage {
        &self.storage
    }
}

impl<W: Write> SerialPort for PanelAdapter<W> {
    fn write_str(&mut self, text: &str) {
        self.serial.write_str(text);
    }
}

impl<W: Write> DisplayPort for PanelAdapter<W> {
    fn set_cursor(&mut self, row: u8, col: u8) {
        self.display.set_cursor(row, col);
    }

    fn write_str(&mut self, text: &str) {
        self.display.write_str(text);
    }
}

impl<W: Write> FileStoragePort for PanelAdapter<W> {
    fn append(&mut self, file_name: &str, text: &str) -> Result<(), StorageError> {
        self.storage.append(file_name, text)
    }
}
