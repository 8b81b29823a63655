//! Synthesis manifest
//!
//! Written next to the template so operators and CI can see which template
//! file belongs to which stack, and which content went into it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::ContentSource;
use crate::domain::services::Stack;
use crate::domain::value_objects::ContentHash;
use crate::error::SynthResult;

/// Manifest file name inside the output directory
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Manifest schema version
pub const MANIFEST_VERSION: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSource {
    pub path: String,
    pub hash: String,
    /// Whether a deployment in the template references this content
    pub attached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub stack_name: String,
    pub template_file: String,
    pub template_hash: String,
    pub sources: Vec<ManifestSource>,
}

impl Manifest {
    /// Describe a synthesized stack. Source paths are recorded relative to `source_dir`.
    pub fn new(
        stack: &Stack,
        source_dir: &Path,
        template_file: &str,
        template_hash: &ContentHash,
    ) -> Self {
        let entry = |source: &ContentSource, attached: bool| ManifestSource {
            path: relative_display(source.path(), source_dir),
            hash: source.hash().to_string(),
            attached,
        };

        let mut sources = vec![entry(&stack.attached, true)];
        sources.extend(stack.unattached.iter().map(|s| entry(s, false)));

        Self {
            version: MANIFEST_VERSION.to_string(),
            stack_name: stack.name.clone(),
            template_file: template_file.to_string(),
            template_hash: template_hash.to_string(),
            sources,
        }
    }

    pub fn to_json_pretty(&self) -> SynthResult<String> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

fn relative_display(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContentSources;
    use crate::domain::services::{build_stack, StackDefinition};

    fn stack() -> Stack {
        let sources = ContentSources {
            initial: ContentSource::new("infra/config-v1.json", r#"{"flag": true}"#),
            updated: ContentSource::new("infra/config-v2.json", r#"{"flag": false}"#),
        };
        build_stack(&StackDefinition::default(), &sources).unwrap()
    }

    #[test]
    fn manifest_records_attached_and_unattached_sources() {
        let stack = stack();
        let hash = ContentHash::from_content("template");
        let manifest = Manifest::new(
            &stack,
            Path::new("infra"),
            "AppConfigStack.template.json",
            &hash,
        );

        assert_eq!(manifest.stack_name, "AppConfigStack");
        assert_eq!(manifest.template_hash, hash.to_string());
        assert_eq!(manifest.sources.len(), 2);
        assert_eq!(manifest.sources[0].path, "config-v1.json");
        assert!(manifest.sources[0].attached);
        assert_eq!(manifest.sources[1].path, "config-v2.json");
        assert!(!manifest.sources[1].attached);
        assert_eq!(
            manifest.sources[0].hash,
            ContentHash::from_content(r#"{"flag": true}"#).to_string()
        );
    }

    #[test]
    fn manifest_json_parses_back() {
        let stack = stack();
        let manifest = Manifest::new(
            &stack,
            Path::new("infra"),
            "AppConfigStack.template.json",
            &ContentHash::from_content("t"),
        );

        let json = manifest.to_json_pretty().unwrap();
        let parsed: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, manifest);
    }
}
