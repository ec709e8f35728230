//! Artifact listing records

use nexus_fs::HashAlgorithm;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single asset as reported by the server.
///
/// Records are kept as the raw JSON object so that fields this client does
/// not interpret survive untouched. Only `path` and the `checksum` map are
/// read here:
///
/// ```json
/// {
///   "path": "a/fake.rpm",
///   "repository": "cloudera-manager",
///   "checksum": { "sha1": "2186934d...", "md5": "d94b865a..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactRecord(Map<String, Value>);

impl ArtifactRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap a JSON value; `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// The asset path, only when present and a string.
    pub fn path(&self) -> Option<&str> {
        self.0.get("path").and_then(Value::as_str)
    }

    /// The advertised hex digest for `algorithm`, if any.
    pub fn checksum(&self, algorithm: HashAlgorithm) -> Option<&str> {
        self.checksum_value(algorithm).and_then(Value::as_str)
    }

    /// The raw `checksum` entry for `algorithm`, whatever its JSON type.
    pub fn checksum_value(&self, algorithm: HashAlgorithm) -> Option<&Value> {
        self.0
            .get("checksum")
            .and_then(Value::as_object)
            .and_then(|sums| sums.get(algorithm.as_str()))
    }

    pub fn download_url(&self) -> Option<&str> {
        self.0.get("downloadUrl").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ArtifactRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_string_path_is_absent() {
        let record = ArtifactRecord::from_value(json!({"path": 42})).unwrap();
        assert_eq!(record.path(), None);
    }

    #[test]
    fn checksum_lookup_by_algorithm() {
        let record = ArtifactRecord::from_value(json!({
            "path": "a/b",
            "checksum": {"md5": "abc", "sha1": 7}
        }))
        .unwrap();

        assert_eq!(record.checksum(HashAlgorithm::Md5), Some("abc"));
        assert_eq!(record.checksum(HashAlgorithm::Sha1), None);
        assert_eq!(record.checksum(HashAlgorithm::Sha256), None);
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(ArtifactRecord::from_value(json!(["path"])).is_none());
    }
}
