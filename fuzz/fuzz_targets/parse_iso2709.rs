#![no_main]

use libfuzzer_sys::fuzz_target;
use marcqa::batch::ingest_binary_batch_with;
use marcqa::ingest::IngestOptions;
use marcqa::RecoveryMode;

fuzz_target!(|data: &[u8]| {
    let options = IngestOptions::default();
    for mode in [RecoveryMode::Strict, RecoveryMode::Lenient, RecoveryMode::Permissive] {
        for record in ingest_binary_batch_with(data, &options, mode).into_iter().flatten() {
            let _ = record.to_json();
            let _ = record.validate();
        }
    }
});
