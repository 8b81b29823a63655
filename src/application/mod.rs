//! Application Layer
//!
//! Use cases that orchestrate the synthesis flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SynthUseCase` - Read content, declare the stack, write template and manifest
//! - `DiffUseCase` - Compare a fresh synthesis against the template on disk
//! - `CheckUseCase` - Validate a source directory without writing

pub mod check;
pub mod diff;
pub mod manifest;
pub mod sources;
pub mod synth;

pub use check::{CheckItem, CheckReport, CheckStatus, CheckUseCase};
pub use diff::{DiffResult, DiffUseCase, TemplateChange};
pub use manifest::{Manifest, ManifestSource, MANIFEST_FILE_NAME};
pub use sources::{read_content_source, read_content_sources};
pub use synth::{
    render, template_file_name, OutputSummary, ResourceSummary, SourceSummary, SynthOptions,
    SynthReport, SynthUseCase,
};
