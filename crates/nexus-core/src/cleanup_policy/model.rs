//! Cleanup policy configuration

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A named cleanup policy as stored by the server.
///
/// Only `name` is required. Fields this client does not know, and known
/// fields whose value does not fit the typed slot, are kept in `extra` and
/// sent back verbatim, so the shape is the server script's business.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupPolicy {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<CleanupCriteria>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CleanupPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: None,
            mode: None,
            notes: None,
            criteria: None,
            extra: Map::new(),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_criteria(mut self, criteria: CleanupCriteria) -> Self {
        self.criteria = Some(criteria);
        self
    }
}

/// Conditions under which a component becomes eligible for cleanup.
///
/// Decoded like [`CleanupPolicy`]: a value that does not fit stays in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupCriteria {
    /// Days since the component was last downloaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_downloaded: Option<u64>,
    /// Days since the component was last published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_blob_updated: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for CleanupPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let name = match fields.remove("name") {
            Some(Value::String(name)) => name,
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "cleanup policy name must be a string, found {other}"
                )));
            }
            None => return Err(de::Error::missing_field("name")),
        };

        Ok(Self {
            name,
            format: take_field(&mut fields, "format", decode),
            mode: take_field(&mut fields, "mode", decode),
            notes: take_field(&mut fields, "notes", decode),
            criteria: take_field(&mut fields, "criteria", decode),
            extra: fields,
        })
    }
}

impl<'de> Deserialize<'de> for CleanupCriteria {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        Ok(Self {
            last_downloaded: take_field(&mut fields, "lastDownloaded", days),
            last_blob_updated: take_field(&mut fields, "lastBlobUpdated", days),
            regex: take_field(&mut fields, "regex", decode),
            extra: fields,
        })
    }
}

/// Move `key` out of `fields` when `convert` accepts its value.
///
/// `null` counts as absent and is dropped. A rejected value is left in
/// `fields`.
fn take_field<T>(
    fields: &mut Map<String, Value>,
    key: &str,
    convert: fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = fields.get(key)?;
    if value.is_null() {
        fields.remove(key);
        return None;
    }

    let typed = convert(value)?;
    fields.remove(key);
    Some(typed)
}

fn decode<T: DeserializeOwned>(value: &Value) -> Option<T> {
    T::deserialize(value).ok()
}

/// Scripts echo day counts back as strings; accept both forms.
fn days(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_wire_names() {
        let policy = CleanupPolicy::new("pol1").with_format("raw").with_criteria(CleanupCriteria {
            last_downloaded: Some(30),
            ..Default::default()
        });

        assert_eq!(
            serde_json::to_value(&policy).unwrap(),
            json!({"name": "pol1", "format": "raw", "criteria": {"lastDownloaded": 30}})
        );
    }

    #[test]
    fn keeps_unknown_fields() {
        let policy: CleanupPolicy =
            serde_json::from_value(json!({"name": "p", "retain": 3})).unwrap();
        assert_eq!(policy.extra.get("retain"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&policy).unwrap()["retain"], json!(3));
    }

    #[test]
    fn criteria_accept_string_days() {
        let criteria: CleanupCriteria =
            serde_json::from_value(json!({"lastBlobUpdated": "14", "lastDownloaded": null}))
                .unwrap();
        assert_eq!(criteria.last_blob_updated, Some(14));
        assert_eq!(criteria.last_downloaded, None);
    }

    #[test]
    fn name_is_required() {
        assert!(serde_json::from_value::<CleanupPolicy>(json!({"format": "raw"})).is_err());
    }

    #[test]
    fn name_must_be_a_string() {
        assert!(serde_json::from_value::<CleanupPolicy>(json!({"name": 7})).is_err());
    }

    #[test]
    fn mistyped_fields_move_to_extra() {
        let stored = json!({
            "name": "p",
            "notes": 5,
            "format": "raw",
            "criteria": {"lastDownloaded": -1, "lastBlobUpdated": 2.5, "regex": ".*"}
        });

        let policy: CleanupPolicy = serde_json::from_value(stored.clone()).unwrap();

        assert_eq!(policy.notes, None);
        assert_eq!(policy.extra.get("notes"), Some(&json!(5)));
        assert_eq!(policy.format.as_deref(), Some("raw"));
        let criteria = policy.criteria.as_ref().unwrap();
        assert_eq!(criteria.last_downloaded, None);
        assert_eq!(criteria.last_blob_updated, None);
        assert_eq!(criteria.regex.as_deref(), Some(".*"));
        assert_eq!(serde_json::to_value(&policy).unwrap(), stored);
    }

    #[test]
    fn non_object_criteria_stay_verbatim() {
        let policy: CleanupPolicy =
            serde_json::from_value(json!({"name": "p", "criteria": "weekly"})).unwrap();
        assert_eq!(policy.criteria, None);
        assert_eq!(policy.extra.get("criteria"), Some(&json!("weekly")));
    }
}
