//! Configuration loading

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::error::{SynthError, SynthResult};

use super::types::{Config, TemplateFormat};

/// Name of the optional config file next to the content files
pub const CONFIG_FILE_NAME: &str = "appconfig.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "APPCONFIG_SYNTH_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Result of resolving the configuration for a source directory
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// Path of the config file, if one was found
    pub path: Option<PathBuf>,
}

/// Parse `appconfig.toml` text and collect non-fatal warnings (e.g. unknown keys).
///
/// Warning keys are full dotted paths (`output.name`), so a key that is valid
/// in one section but misplaced in another is reported against its own table.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> SynthResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SynthError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            line: find_line_number(content, &key),
            suggestion: suggest_key(&key),
            file: path.to_path_buf(),
            key,
        })
        .collect();

    Ok((config, warnings))
}

/// Read and parse a config file through the file system port.
pub fn load_with_warnings<F: FileSystem>(
    fs: &F,
    path: &Path,
) -> SynthResult<(Config, Vec<ConfigWarning>)> {
    let content = fs.read(path)?;
    parse_with_warnings(&content, path)
}

/// Resolve configuration for a source directory.
///
/// A missing `appconfig.toml` means built-in defaults; a malformed one is an
/// error. Environment overrides are applied last.
pub fn load_for_source<F: FileSystem>(fs: &F, source_dir: &Path) -> SynthResult<LoadedConfig> {
    let path = source_dir.join(CONFIG_FILE_NAME);

    let mut loaded = if fs.exists(&path) {
        let (config, warnings) = load_with_warnings(fs, &path)?;
        LoadedConfig {
            config,
            warnings,
            path: Some(path),
        }
    } else {
        LoadedConfig::default()
    };

    loaded.config = with_env_overrides(loaded.config);
    Ok(loaded)
}

/// Apply environment variable overrides (`APPCONFIG_SYNTH_*` prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup (unit tests pass a map)
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

    if let Some(name) = var("STACK_NAME").filter(|v| !v.trim().is_empty()) {
        config.stack.name = name;
    }

    if let Some(name) = var("ENVIRONMENT").filter(|v| !v.trim().is_empty()) {
        config.environment.name = name;
    }

    if let Some(format) = var("FORMAT") {
        match format.trim().to_lowercase().as_str() {
            "json" => config.output.format = TemplateFormat::Json,
            "yaml" | "yml" => config.output.format = TemplateFormat::Yaml,
            _ => {}
        }
    }

    config
}

/// Keys accepted in each table; the root entry lists the tables themselves.
const SECTION_KEYS: &[(&str, &[&str])] = &[
    (
        "",
        &[
            "stack",
            "application",
            "environment",
            "profile",
            "content",
            "strategy",
            "output",
        ],
    ),
    ("stack", &["name", "description"]),
    ("application", &["name"]),
    ("environment", &["name", "description"]),
    ("profile", &["name", "location_uri"]),
    ("content", &["initial", "updated", "content_type"]),
    (
        "strategy",
        &[
            "name",
            "deployment_duration_minutes",
            "final_bake_time_minutes",
            "growth_factor",
            "growth_type",
            "replicate_to",
            "description",
        ],
    ),
    ("output", &["format", "verbosity", "directory"]),
];

/// Split `output.name` into its table (`output`) and key (`name`).
fn split_key_path(key_path: &str) -> (&str, &str) {
    key_path.rsplit_once('.').unwrap_or(("", key_path))
}

/// Line of `key = ...` inside the key's own `[table]`, or of the `[key]`
/// header itself when an unknown table was ignored as a whole.
fn find_line_number(content: &str, key_path: &str) -> Option<usize> {
    let (section, key) = split_key_path(key_path);
    let mut current = "";

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if let Some(header) = trimmed.strip_prefix('[') {
            let header = header.trim_start_matches('[');
            let name = header.split(']').next().unwrap_or_default().trim();
            if name == key_path || name.starts_with(&format!("{}.", key_path)) {
                return Some(i + 1);
            }
            current = name;
            continue;
        }

        if current != section {
            continue;
        }

        let assigns_key = trimmed
            .strip_prefix(key)
            .map(|rest| rest.trim_start().starts_with('='))
            .unwrap_or(false);
        if assigns_key {
            return Some(i + 1);
        }
    }
    None
}

/// Nearest valid key in the same table, as a full dotted path
fn suggest_key(key_path: &str) -> Option<String> {
    let (section, key) = split_key_path(key_path);
    let candidates = SECTION_KEYS
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, keys)| *keys)?;

    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates.iter().filter(|c| **c != key) {
        let dist = levenshtein(key, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 && section.is_empty() => Some(candidate.to_string()),
        Some((candidate, dist)) if dist <= 2 => Some(format!("{}.{}", section, candidate)),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("format", "format"), 0);
        assert_eq!(levenshtein("fromat", "format"), 2);
        assert_eq!(levenshtein("", "abc"), 3);
    }

    #[test]
    fn suggest_key_close_match() {
        assert_eq!(
            suggest_key("strategy.growth_factr"),
            Some("strategy.growth_factor".to_string())
        );
        assert_eq!(suggest_key("strategy.xyzzy-plugh"), None);
    }

    #[test]
    fn suggest_key_stays_within_section() {
        // `name` is valid in [stack] but not in [output]; no output key is close.
        assert_eq!(suggest_key("output.name"), None);
        assert_eq!(suggest_key("output.fromat"), Some("output.format".to_string()));
        assert_eq!(suggest_key("strategi"), Some("strategy".to_string()));
    }

    #[test]
    fn line_number_is_scoped_to_section() {
        let content = "[stack]\nname = \"A\"\n\n[output]\nname = \"oops\"\n";
        assert_eq!(find_line_number(content, "output.name"), Some(5));
        assert_eq!(find_line_number(content, "stack.name"), Some(2));
    }

    #[test]
    fn line_number_ignores_longer_keys_with_same_prefix() {
        let content = "[content]\ncontent_type = \"text/plain\"\ncontent = 1\n";
        assert_eq!(find_line_number(content, "content.content"), Some(3));
    }

    #[test]
    fn line_number_for_unknown_table() {
        let content = "[stack]\nname = \"A\"\n[outputs]\nformat = \"yaml\"\n";
        assert_eq!(find_line_number(content, "outputs"), Some(3));
    }
}
