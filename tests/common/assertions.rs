//! Custom assertions for CLI tests.
//!
//! These provide descriptive failure messages to aid debugging.

use std::path::Path;

use serde_json::Value;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Parse NDJSON, panicking with the offending line on failure
pub fn parse_ndjson(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({e}): {l}"))
        })
        .collect()
}

/// Events named `name`
pub fn events_named<'a>(events: &'a [Value], name: &str) -> Vec<&'a Value> {
    events.iter().filter(|e| e["event"] == name).collect()
}

/// Every `{"Ref": id}` in the template must name a key in `Resources`.
pub fn assert_refs_resolve(template: &Value) {
    let resources = template["Resources"]
        .as_object()
        .expect("Resources is an object");

    fn walk<'a>(value: &'a Value, refs: &mut Vec<&'a str>) {
        match value {
            Value::Object(map) => {
                if let Some(Value::String(id)) = map.get("Ref") {
                    refs.push(id);
                }
                map.values().for_each(|v| walk(v, refs));
            }
            Value::Array(items) => items.iter().for_each(|v| walk(v, refs)),
            _ => {}
        }
    }

    let mut refs = Vec::new();
    walk(template, &mut refs);
    assert!(!refs.is_empty(), "template has no references");
    for id in refs {
        assert!(
            resources.contains_key(id),
            "Ref '{}' does not name a resource. Resources: {:?}",
            id,
            resources.keys().collect::<Vec<_>>()
        );
    }
}

/// Assert a file exists under a test root.
#[macro_export]
macro_rules! assert_exists {
    ($env:expr, $path:expr) => {
        let full_path = $env.path($path);
        assert!(
            full_path.exists(),
            "Expected file at '{}', but it doesn't exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.root.path()).join("\n  ")
        );
    };
}

/// Assert a path does not exist under a test root.
#[macro_export]
macro_rules! assert_not_exists {
    ($env:expr, $path:expr) => {
        let full_path = $env.path($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist, but it does.",
            $path
        );
    };
}
