#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // appconfig.toml parsing and stack validation should never panic
        if let Ok(config) = toml::from_str::<appconfig_synth::Config>(content) {
            let definition = config.definition();
            let _ = definition.validate_stack_name();
            let _ = definition.strategy.validate();
        }
    }
});
