#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use mlprof_analysis::{RuntimeClassifier, UnresolvedSession};

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        // Snapshot parsing and analysis should never panic.
        if let Ok(plan) = mlprof_provider::parse_snapshot(json, Path::new("fuzz.mlmodelc")) {
            if let Ok(session) = UnresolvedSession::new(plan, None).analyze(&RuntimeClassifier) {
                let analysis = session.analysis();
                assert_eq!(analysis.counts.total(), analysis.operators.len());
            }
        }
    }
});
