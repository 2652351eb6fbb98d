//! Serial console adapter.
//!
//! Implements [`SerialPort`] over any `std::io::Write` (stdout on the host
//! simulator, a UART writer on hardware).  Writes are best-effort: an I/O
//! error is logged and dropped.

use std::io::Write;

use log::warn;

use crate::app::ports::SerialPort;

pub struct ConsoleSerial<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSerial<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleSerial<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> SerialPort for ConsoleSerial<W> {
    fn write_str(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            warn!("serial write failed: {}", e);
        }
    }
}
