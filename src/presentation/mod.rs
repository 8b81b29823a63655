//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text and NDJSON)

pub mod cli;
pub mod factory;
pub mod json;
pub mod output;

pub use cli::{Cli, Commands, SourceArgs};
pub use factory::{create_check_use_case, create_diff_use_case, create_synth_use_case};
