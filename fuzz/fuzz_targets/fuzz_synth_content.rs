#![no_main]

use libfuzzer_sys::fuzz_target;

use appconfig_synth::{build_stack, ContentSource, ContentSources, StackDefinition};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let sources = ContentSources {
            initial: ContentSource::new("config-v1.json", content),
            updated: ContentSource::new("config-v2.json", content),
        };
        let stack = build_stack(&StackDefinition::default(), &sources)
            .expect("any text content synthesizes");

        let rendered = stack.template.to_json_pretty().expect("template renders");
        let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");
        assert_eq!(
            parsed["Resources"]["achcvv1"]["Properties"]["Content"].as_str(),
            Some(content)
        );
    }
});
