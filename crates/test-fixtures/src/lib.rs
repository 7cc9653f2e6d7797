//! Test fixture loader for Banker golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them from tests in any workspace crate.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until a sibling `test-fixtures` exists.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// A golden safety scenario: raw inputs plus the expected verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct SafetyScenario {
    pub name: String,
    pub description: String,
    pub processes: Vec<u32>,
    pub resources: Vec<u32>,
    pub allocation: Vec<Vec<i64>>,
    pub max_need: Vec<Vec<i64>>,
    pub available: Vec<i64>,
    pub expected: ExpectedVerdict,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedVerdict {
    pub safe: bool,
    pub order: Vec<usize>,
    #[serde(default)]
    pub blocked: Vec<usize>,
}

const SAFETY_SCENARIOS: &str = "golden/safety";

/// Load every scenario under `golden/safety/`, sorted by file name.
pub fn load_safety_scenarios() -> Vec<SafetyScenario> {
    list_fixtures(SAFETY_SCENARIOS)
        .iter()
        .filter_map(|path| path.file_name()?.to_str())
        .map(|file| load_fixture(&format!("{SAFETY_SCENARIOS}/{file}")))
        .collect()
}
