//! Test fixtures - reusable content constants for tests.

/// Initial configuration version
pub const FLAG_ON: &str = r#"{"flag": true}"#;

/// Updated configuration version
pub const FLAG_OFF: &str = r#"{"flag": false}"#;

/// Logical ids in declaration order
pub const LOGICAL_IDS: [&str; 6] = [
    "acappconfigsourcedemo",
    "acenvsandbox",
    "acprfjson",
    "achcvv1",
    "acdepstratdemo",
    "acdepalpha",
];

/// A config that renames everything it can
pub const CUSTOM_CONFIG: &str = r#"
[stack]
name = "PaymentsFlags"
description = "Payments feature flags"

[application]
name = "Payments"

[environment]
name = "Staging"

[content]
initial = "flags/on.json"
updated = "flags/off.json"

[strategy]
name = "Linear 20"
deployment_duration_minutes = 10
final_bake_time_minutes = 5
growth_factor = 20.0
growth_type = "linear"
"#;
