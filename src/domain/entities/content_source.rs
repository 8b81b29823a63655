//! ContentSource entity - a configuration payload read from disk

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Text content of one configuration file, fingerprinted at read time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSource {
    path: PathBuf,
    content: String,
    hash: ContentHash,
}

impl ContentSource {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let hash = ContentHash::from_content(&content);
        Self {
            path: path.into(),
            content,
            hash,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }
}

/// The two configuration versions a stack is synthesized from.
///
/// Only `initial` is wired into the deployment; `updated` is read so that a
/// missing file still fails synthesis, and is reported as unattached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSources {
    pub initial: ContentSource,
    pub updated: ContentSource,
}
