#![no_main]

use libfuzzer_sys::fuzz_target;

use appconfig_synth::LogicalId;

fuzz_target!(|data: &[u8]| {
    if let Ok(construct_id) = std::str::from_utf8(data) {
        if let Ok(id) = LogicalId::from_construct_id(construct_id) {
            assert!(!id.as_str().is_empty());
            assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
});
