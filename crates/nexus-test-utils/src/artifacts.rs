//! Listing records and local file fixtures.

use nexus_core::ArtifactRecord;
use nexus_fs::{HashAlgorithm, hash_bytes};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// A record with only a `path`.
pub fn record(path: &str) -> ArtifactRecord {
    record_from(json!({ "path": path }))
}

/// A record shaped like a raw-repository asset whose checksums describe
/// `content`.
pub fn record_with_content(repository: &str, path: &str, content: &[u8]) -> ArtifactRecord {
    record_from(json!({
        "path": path,
        "repository": repository,
        "format": "raw",
        "downloadUrl": format!("http://nexus/repository/{repository}/{path}"),
        "checksum": checksums(content, &HashAlgorithm::ALL),
    }))
}

/// A record advertising only the given algorithms for `content`.
pub fn record_with_checksums(path: &str, content: &[u8], algorithms: &[HashAlgorithm]) -> ArtifactRecord {
    record_from(json!({
        "path": path,
        "checksum": checksums(content, algorithms),
    }))
}

/// Wrap a JSON object as a record.
///
/// # Panics
/// Panics if `value` is not an object.
pub fn record_from(value: Value) -> ArtifactRecord {
    ArtifactRecord::from_value(value).unwrap_or_else(|| panic!("record_from: expected a JSON object"))
}

fn checksums(content: &[u8], algorithms: &[HashAlgorithm]) -> Value {
    let sums: Map<String, Value> = algorithms
        .iter()
        .map(|algorithm| (algorithm.as_str().to_string(), Value::String(hash_bytes(*algorithm, content))))
        .collect();
    Value::Object(sums)
}

/// Write `content` to `root/relative`, creating parents.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn write_file(root: &Path, relative: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("write_file: failed to create {}: {e}", parent.display()));
    }
    fs::write(&path, content).unwrap_or_else(|e| panic!("write_file: failed to write {}: {e}", path.display()));
    path
}
