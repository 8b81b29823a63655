//! Common test utilities for appconfig-synth CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated source directory plus helpers to run the binary
//! - Assertion helpers and macros
//! - Fixtures: Reusable content constants

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
