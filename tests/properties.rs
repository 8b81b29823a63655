//! Property tests for appconfig-synth.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "same input, same bytes".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/logical_id.rs"]
mod logical_id;

#[path = "properties/synthesis.rs"]
mod synthesis;
