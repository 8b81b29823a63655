//! Diff Use Case
//!
//! Orchestrates the diff flow:
//! 1. Synthesize the template in memory
//! 2. Read the template currently in the output directory
//! 3. Return a unified diff between the two
//!
//! This is a dry-run of the synth use case: nothing is written.

use std::path::PathBuf;

use similar::{ChangeTag, TextDiff};

use crate::config::Config;
use crate::domain::ports::{FileSystem, FsError};
use crate::error::SynthResult;

use super::synth::{SynthOptions, SynthUseCase};

/// How the synthesized template relates to the one on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateChange {
    /// No template on disk yet
    New,
    /// On-disk template differs
    Modified {
        /// Unified diff, on-disk first
        diff: String,
        added: usize,
        removed: usize,
    },
    /// Byte-identical
    Unchanged,
}

/// Result of the diff operation
#[derive(Debug, Clone)]
pub struct DiffResult {
    pub stack_name: String,
    pub template_path: PathBuf,
    pub change: TemplateChange,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.change != TemplateChange::Unchanged
    }
}

/// Diff Use Case
pub struct DiffUseCase<F: FileSystem + Clone> {
    fs: F,
}

impl<F: FileSystem + Clone> DiffUseCase<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Execute the diff operation
    pub fn execute(&self, options: &SynthOptions, config: &Config) -> SynthResult<DiffResult> {
        let preview = options.clone().render_only();
        let report = SynthUseCase::new(self.fs.clone()).execute(&preview, config)?;

        let change = match self.fs.read(&report.template_path) {
            Ok(current) => compare(&current, &report.template),
            Err(FsError::NotFound(_)) => TemplateChange::New,
            Err(err) => return Err(err.into()),
        };

        Ok(DiffResult {
            stack_name: report.stack_name,
            template_path: report.template_path,
            change,
        })
    }
}

/// Compare the on-disk template with a freshly synthesized one
pub fn compare(current: &str, synthesized: &str) -> TemplateChange {
    if current == synthesized {
        return TemplateChange::Unchanged;
    }

    let diff = TextDiff::from_lines(current, synthesized);
    let mut added = 0;
    let mut removed = 0;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => added += 1,
            ChangeTag::Delete => removed += 1,
            ChangeTag::Equal => {}
        }
    }

    let unified = diff
        .unified_diff()
        .context_radius(3)
        .header("on disk", "synthesized")
        .to_string();

    TemplateChange::Modified {
        diff: unified,
        added,
        removed,
    }
}
