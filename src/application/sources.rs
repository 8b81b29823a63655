//! Content loading
//!
//! Reads both configuration versions through the `FileSystem` port. Both
//! reads happen before the stack builder runs, so a missing or unreadable
//! file aborts synthesis with nothing declared.

use std::path::Path;

use crate::domain::entities::{ContentSource, ContentSources};
use crate::domain::ports::{FileSystem, FsError};
use crate::error::{SynthError, SynthResult};

/// Read one content file as UTF-8 text
pub fn read_content_source<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
) -> SynthResult<ContentSource> {
    match fs.read(path) {
        Ok(content) => Ok(ContentSource::new(path, content)),
        Err(FsError::NotFound(_)) => Err(SynthError::ContentFileNotFound {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(SynthError::ContentFileUnreadable {
            path: path.to_path_buf(),
            message: err.to_string(),
        }),
    }
}

/// Read the initial and updated configuration versions
pub fn read_content_sources<F: FileSystem + ?Sized>(
    fs: &F,
    initial: &Path,
    updated: &Path,
) -> SynthResult<ContentSources> {
    Ok(ContentSources {
        initial: read_content_source(fs, initial)?,
        updated: read_content_source(fs, updated)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;

    #[test]
    fn reads_both_files() {
        let fs = MockFileSystem::new()
            .with_file("config-v1.json", r#"{"flag": true}"#)
            .with_file("config-v2.json", r#"{"flag": false}"#);

        let sources = read_content_sources(
            &fs,
            Path::new("config-v1.json"),
            Path::new("config-v2.json"),
        )
        .unwrap();

        assert_eq!(sources.initial.content(), r#"{"flag": true}"#);
        assert_eq!(sources.updated.content(), r#"{"flag": false}"#);
    }

    #[test]
    fn missing_initial_is_not_found() {
        let fs = MockFileSystem::new().with_file("config-v2.json", "{}");

        let err = read_content_sources(
            &fs,
            Path::new("config-v1.json"),
            Path::new("config-v2.json"),
        )
        .unwrap_err();

        assert!(
            matches!(err, SynthError::ContentFileNotFound { ref path } if path == &PathBuf::from("config-v1.json"))
        );
    }

    #[test]
    fn missing_updated_is_not_found() {
        let fs = MockFileSystem::new().with_file("config-v1.json", "{}");

        let err = read_content_sources(
            &fs,
            Path::new("config-v1.json"),
            Path::new("config-v2.json"),
        )
        .unwrap_err();

        assert!(
            matches!(err, SynthError::ContentFileNotFound { ref path } if path == &PathBuf::from("config-v2.json"))
        );
    }

    #[test]
    fn unreadable_file_is_read_error() {
        let fs = MockFileSystem::new()
            .with_file("config-v1.json", "{}")
            .with_unreadable("config-v2.json");

        let err = read_content_sources(
            &fs,
            Path::new("config-v1.json"),
            Path::new("config-v2.json"),
        )
        .unwrap_err();

        assert!(matches!(err, SynthError::ContentFileUnreadable { .. }));
        assert_eq!(err.code(), "read_error");
    }

    #[test]
    fn invalid_utf8_is_rejected_not_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config-v1.json");
        std::fs::write(&path, [b'{', 0xff, 0xfe, b'}']).unwrap();

        let err = read_content_source(&crate::fs::LocalFs::new(), &path).unwrap_err();

        assert!(matches!(err, SynthError::ContentFileUnreadable { path: ref p, .. } if p == &path));
    }
}
