//! Synth Use Case
//!
//! Orchestrates the synth flow:
//! 1. Read both content files (abort on the first failure)
//! 2. Build the stack from the config's literal values
//! 3. Re-check referential closure
//! 4. Render the template and manifest, and write them unless this is a preview

use std::path::{Path, PathBuf};

use crate::config::{Config, TemplateFormat};
use crate::domain::ports::FileSystem;
use crate::domain::services::{build_stack, Stack};
use crate::domain::value_objects::{ContentHash, LogicalId, ResourceKind};
use crate::error::SynthResult;

use super::manifest::{Manifest, MANIFEST_FILE_NAME};
use super::sources::read_content_sources;

/// Options for the synth operation
#[derive(Debug, Clone)]
pub struct SynthOptions {
    /// Directory holding the content files (and `appconfig.toml`)
    pub source: PathBuf,
    /// Directory the template and manifest are written to
    pub out_dir: PathBuf,
    /// Template format
    pub format: TemplateFormat,
    /// Write files (false = render only)
    pub write: bool,
}

impl SynthOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            out_dir: PathBuf::from("synth.out"),
            format: TemplateFormat::Json,
            write: true,
        }
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_format(mut self, format: TemplateFormat) -> Self {
        self.format = format;
        self
    }

    pub fn render_only(mut self) -> Self {
        self.write = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSummary {
    /// Id the resource was declared under, before normalization
    pub construct_id: String,
    pub logical_id: LogicalId,
    pub kind: ResourceKind,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    pub id: LogicalId,
    pub export_name: String,
    pub target: LogicalId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub hash: ContentHash,
    pub attached: bool,
}

/// Result of the synth operation
#[derive(Debug, Clone)]
pub struct SynthReport {
    pub stack_name: String,
    /// Rendered template text
    pub template: String,
    pub template_hash: ContentHash,
    pub template_path: PathBuf,
    pub manifest_path: PathBuf,
    /// Files actually written (empty for a preview)
    pub written: Vec<PathBuf>,
    pub resources: Vec<ResourceSummary>,
    pub outputs: Vec<OutputSummary>,
    pub sources: Vec<SourceSummary>,
}

impl SynthReport {
    /// Content that was read but is not wired into any deployment
    pub fn unattached(&self) -> impl Iterator<Item = &SourceSummary> {
        self.sources.iter().filter(|s| !s.attached)
    }
}

/// File name of a stack's template
pub fn template_file_name(stack_name: &str, format: TemplateFormat) -> String {
    format!("{}.template.{}", stack_name, format.extension())
}

/// Render a template in the requested format
pub fn render(stack: &Stack, format: TemplateFormat) -> SynthResult<String> {
    match format {
        TemplateFormat::Json => stack.template.to_json_pretty(),
        TemplateFormat::Yaml => stack.template.to_yaml(),
    }
}

/// Synth Use Case
pub struct SynthUseCase<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> SynthUseCase<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Read content and declare the stack, without rendering
    pub fn synthesize(&self, source: &Path, config: &Config) -> SynthResult<Stack> {
        let (initial, updated) = config.content_paths(source);
        let sources = read_content_sources(&self.fs, &initial, &updated)?;

        let stack = build_stack(&config.definition(), &sources)?;
        stack.template.validate()?;
        Ok(stack)
    }

    /// Execute the synth operation
    pub fn execute(&self, options: &SynthOptions, config: &Config) -> SynthResult<SynthReport> {
        let stack = self.synthesize(&options.source, config)?;

        let template = render(&stack, options.format)?;
        let template_hash = ContentHash::from_content(&template);
        let template_file = template_file_name(&stack.name, options.format);
        let template_path = options.out_dir.join(&template_file);
        let manifest_path = options.out_dir.join(MANIFEST_FILE_NAME);

        let mut written = Vec::new();
        if options.write {
            let manifest = Manifest::new(&stack, &options.source, &template_file, &template_hash)
                .to_json_pretty()?;
            self.write_outputs(&template_path, &template, &manifest_path, &manifest)?;
            written.push(template_path.clone());
            written.push(manifest_path.clone());
        }

        Ok(SynthReport {
            stack_name: stack.name.clone(),
            template,
            template_hash,
            template_path,
            manifest_path,
            written,
            resources: summarize_resources(&stack),
            outputs: summarize_outputs(&stack),
            sources: summarize_sources(&stack),
        })
    }

    /// Write the template, then the manifest that describes it.
    ///
    /// The manifest is written last. If that write fails, the template on disk
    /// is restored to its previous content, or removed when there was none.
    fn write_outputs(
        &self,
        template_path: &Path,
        template: &str,
        manifest_path: &Path,
        manifest: &str,
    ) -> SynthResult<()> {
        let previous = self.fs.read(template_path).ok();
        self.fs.write(template_path, template)?;

        if let Err(err) = self.fs.write(manifest_path, manifest) {
            let _ = match previous {
                Some(content) => self.fs.write(template_path, &content),
                None => self.fs.remove(template_path),
            };
            return Err(err.into());
        }
        Ok(())
    }
}

fn summarize_resources(stack: &Stack) -> Vec<ResourceSummary> {
    stack
        .template
        .resources()
        .iter()
        .map(|r| ResourceSummary {
            construct_id: r.construct_id().to_string(),
            logical_id: r.logical_id().clone(),
            kind: r.kind(),
            name: r.properties().name().map(str::to_string),
        })
        .collect()
}

fn summarize_outputs(stack: &Stack) -> Vec<OutputSummary> {
    stack
        .template
        .outputs()
        .iter()
        .map(|o| OutputSummary {
            id: o.id().clone(),
            export_name: o.export_name().to_string(),
            target: o.value().logical_id().clone(),
        })
        .collect()
}

fn summarize_sources(stack: &Stack) -> Vec<SourceSummary> {
    let attached = std::iter::once((&stack.attached, true));
    let unattached = stack.unattached.iter().map(|s| (s, false));
    attached
        .chain(unattached)
        .map(|(source, attached)| SourceSummary {
            path: source.path().to_path_buf(),
            hash: source.hash().clone(),
            attached,
        })
        .collect()
}
