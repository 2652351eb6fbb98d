//! Fuzz target: export block / label parsing
//!
//! Feeds arbitrary text to `parse_export_label` and asserts that it never
//! panics and that anything it accepts rebuilds into an identical label.
//!
//! cargo fuzz run fuzz_export_label

#![no_main]

use eventlog::format::parse_export_label;
use eventlog::record::EventLabel;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok((signal, direction)) = parse_export_label(text) {
        let label = EventLabel::for_signal(signal, direction)
            .expect("every signal name fits in a label");
        let first_line = text.split("\r\n").next().unwrap_or_default();
        assert_eq!(first_line, format!("Event = {}", label));
    }

    let _ = EventLabel::parse(text);
});
