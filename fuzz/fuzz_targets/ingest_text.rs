#![no_main]

use libfuzzer_sys::fuzz_target;
use marcqa::ingest::{text, IngestOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(record) = text::ingest(source, &IngestOptions::default()) {
        let _ = record.select("008~7-10");
        let _ = record.to_json();
        let _ = record.validate();
    }
});
