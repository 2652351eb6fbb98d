//! Event log host simulator — main entry point.
//!
//! Runs the event log against host adapters: software signal inputs driven
//! from the keyboard, stdout as the serial console, an in-memory LCD and a
//! directory standing in for the SD card.
//!
//! ```text
//!  stdin ──▶ key thread ──mpsc──▶ main loop ──▶ EventLogService::poll
//!                                     │
//!                                     └──▶ handle_command (e / w / t)
//! ```

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, info};

use eventlog::adapters::clock::SystemClock;
use eventlog::adapters::display::CharacterDisplay;
use eventlog::adapters::panel::PanelAdapter;
use eventlog::adapters::serial::ConsoleSerial;
use eventlog::adapters::signals::{SharedSignal, SignalHub};
use eventlog::adapters::storage::DirectoryStorage;
use eventlog::app::commands::AppCommand;
use eventlog::app::ports::SerialPort;
use eventlog::app::service::EventLogService;
use eventlog::config::EventLogConfig;
use eventlog::signals::{SIGNAL_COUNT, Signal};

/// Alarm panel event log simulator
#[derive(Parser, Debug)]
#[command(name = "eventlog-sim")]
#[command(about = "Drive the panel event log from the keyboard", long_about = None)]
#[command(version)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory used as the SD card (overrides the config)
    #[arg(short, long, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const MENU: &str = "\r\nKeys:\r\n\
    \x20 a/g/o/i/b/m  toggle alarm, gas, over-temp, incorrect-code, system-blocked, motion\r\n\
    \x20 e            show stored events\r\n\
    \x20 w            store events on the SD card\r\n\
    \x20 t            show date and time\r\n\
    \x20 h            this menu\r\n\
    \x20 q            quit\r\n\r\n";

enum Key {
    Toggle(Signal),
    Command(AppCommand),
    Help,
    Quit,
}

fn parse_key(key: char) -> Option<Key> {
    if let Some(cmd) = AppCommand::from_key(key) {
        return Some(Key::Command(cmd));
    }
    let signal = match key.to_ascii_lowercase() {
        'a' => Signal::Alarm,
        'g' => Signal::GasDetector,
        'o' => Signal::OverTemperature,
        'i' => Signal::IncorrectCode,
        'b' => Signal::SystemBlocked,
        'm' => Signal::Motion,
        'h' | '?' => return Some(Key::Help),
        'q' => return Some(Key::Quit),
        _ => return None,
    };
    Some(Key::Toggle(signal))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    info!("EventLog simulator v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => EventLogConfig::default(),
    };
    if let Some(dir) = &args.storage_dir {
        config.storage_root = dir.to_string_lossy().into_owned();
    }
    config.validate().map_err(|e| anyhow!("invalid configuration: {e}"))?;

    let storage_root = PathBuf::from(&config.storage_root);
    std::fs::create_dir_all(&storage_root)
        .with_context(|| format!("creating {}", storage_root.display()))?;

    let tick = Duration::from_millis(u64::from(config.poll_interval_ms));
    let (mut signals, handles) = SignalHub::simulated();
    let clock = SystemClock::new();
    let mut panel = PanelAdapter::new(
        ConsoleSerial::stdout(),
        CharacterDisplay::new(),
        DirectoryStorage::new(storage_root),
    );
    let mut app = EventLogService::new(config);

    let keys = spawn_key_reader();
    panel.write_str(MENU);

    loop {
        app.poll(&mut signals, &clock, &mut panel);

        match keys.try_recv() {
            Ok(key) => match parse_key(key) {
                Some(Key::Toggle(signal)) => toggle(&handles, signal),
                Some(Key::Command(cmd)) => app.handle_command(cmd, &clock, &mut panel),
                Some(Key::Help) => panel.write_str(MENU),
                Some(Key::Quit) => break,
                None => debug!("ignoring key {:?}", key),
            },
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        thread::sleep(tick);
    }

    info!(
        "Shutting down after {} polls, {} events recorded",
        app.poll_count(),
        app.ring().count()
    );
    Ok(())
}

fn toggle(handles: &[SharedSignal; SIGNAL_COUNT], signal: Signal) {
    let on = handles[signal.index()].toggle();
    info!("{} input now {}", signal.name(), if on { "ON" } else { "OFF" });
}

fn load_config(path: &Path) -> Result<EventLogConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    EventLogConfig::from_json(&text).map_err(|e| anyhow!("{}: {e}", path.display()))
}

/// Forward every non-whitespace character typed on stdin.
fn spawn_key_reader() -> Receiver<char> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            for key in line.chars().filter(|c| !c.is_whitespace()) {
                if tx.send(key).is_err() {
                    return;
                }
            }
        }
    });
    rx
}

fn init_logging(verbose: u8) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}
