//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements      | Connects to                     |
//! |------------|-----------------|---------------------------------|
//! | `signals`  | SignalPort      | GPIO inputs / simulated levels  |
//! | `clock`    | ClockPort       | Host RTC (local time)           |
//! | `serial`   | SerialPort      | UART / stdout                   |
//! | `display`  | DisplayPort     | 20×4 character LCD              |
//! | `panel`    | all three sinks | serial + display + storage      |
//! | `storage`  | FileStoragePort | SD card root directory          |

pub mod clock;
pub mod display;
pub mod panel;
pub mod serial;
pub mod signals;
pub mod storage;
