use log::{Level, LevelFilter, Log, Metadata, Record};
use mrzscan::PassportScanner;
use std::sync::Mutex;
use std::thread::{self, ThreadId};

struct CapturingLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

fn warnings_on_this_thread() -> Vec<String> {
    let id = thread::current().id();
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(thread_id, level, _)| *thread_id == id && *level == Level::Warn)
        .map(|(_, _, message)| message.clone())
        .collect()
}

#[test]
fn decode_text_warns_once_per_check_digit_mismatch() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);

    let text = "P<GBRSMITH<<JOHN<ALBERT<<<<<<<<<<<<<<<<<<<<\n1234567890GBR8001019M2501012<<<<<<<<<<<<<<04\n";
    let mrz = PassportScanner::new().decode_text(text).unwrap();
    assert_eq!(mrz.check_digits.invalid_fields().len(), 4);

    let warnings = warnings_on_this_thread();
    assert_eq!(warnings.len(), 4);
    for label in ["document number", "date of birth", "date of expiry", "composite"] {
        assert!(
            warnings.iter().any(|w| w.contains(label)),
            "no warning for {}: {:?}",
            label,
            warnings
        );
    }
}
