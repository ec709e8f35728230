//! Download planning
//!
//! Turns a listing into one decision per asset so a download can be
//! repeated without re-fetching content that is already present locally.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::path::{Path, PathBuf};

use super::compare::same_content;
use crate::Result;
use crate::artifact::{ArtifactFilter, ArtifactRecord};
use crate::path::{ComponentLocation, REMOTE_PATH_SEPARATOR};

/// Why an asset has to be transferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferReason {
    /// No local file at the target path
    Missing,
    /// Local content differs, or the asset has no usable checksum
    Changed,
    /// Caching disabled by the caller
    Forced,
}

/// What to do with one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum SyncDecision {
    Skip,
    Transfer { reason: TransferReason },
}

/// A planned decision for one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAction {
    /// Asset path inside the repository
    pub remote_path: String,
    /// Local target file
    pub local_path: PathBuf,
    #[serde(flatten)]
    pub decision: SyncDecision,
}

/// The outcome of planning a download
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPlan {
    /// Decisions in listing order
    pub actions: Vec<SyncAction>,
    /// Assets that were ignored, with the reason
    pub messages: Vec<String>,
}

impl SyncPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions that require a transfer
    pub fn transfers(&self) -> impl Iterator<Item = &SyncAction> {
        self.actions
            .iter()
            .filter(|action| matches!(action.decision, SyncDecision::Transfer { .. }))
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers().count()
    }

    pub fn skip_count(&self) -> usize {
        self.actions.len() - self.transfer_count()
    }

    /// Whether nothing needs to be transferred
    pub fn is_up_to_date(&self) -> bool {
        self.transfer_count() == 0
    }

    /// Combine two plans, keeping the order of both
    pub fn merge(mut self, other: SyncPlan) -> Self {
        self.actions.extend(other.actions);
        self.messages.extend(other.messages);
        self
    }
}

/// Plans downloads from a listing into a local directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncPlanner {
    /// Place every asset directly in the local root
    pub flatten: bool,
    /// Transfer even when the local content already matches
    pub no_cache: bool,
}

impl SyncPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    pub fn with_no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }

    /// Plan downloading everything under `source` into `local_root`.
    ///
    /// A directory target selects assets by prefix, a file target by exact
    /// path. Assets from another repository, and paths that would escape
    /// `local_root`, are left out and reported in
    /// [`SyncPlan::messages`].
    pub fn plan_download<I>(&self, records: I, source: &ComponentLocation, local_root: &Path) -> Result<SyncPlan>
    where
        I: IntoIterator,
        I::Item: Borrow<ArtifactRecord>,
    {
        let filter = match source.remote_path() {
            Some(path) if source.is_directory_target() => ArtifactFilter::prefix(path),
            Some(path) => ArtifactFilter::exact(path),
            None => ArtifactFilter::any(),
        };

        let mut plan = SyncPlan::new();
        for item in records {
            let record = item.borrow();
            if !filter.matches(record) {
                continue;
            }
            let Some(remote_path) = record.path() else {
                continue;
            };

            if let Some(repository) = record.get("repository").and_then(|r| r.as_str()) {
                if repository != source.repository() {
                    plan.messages
                        .push(format!("{remote_path}: belongs to repository '{repository}'"));
                    continue;
                }
            }

            let Some(local_path) = self.local_path(remote_path, source.directory(), local_root) else {
                plan.messages
                    .push(format!("{remote_path}: path escapes the local destination"));
                continue;
            };

            let decision = self.decide(record, &local_path)?;
            tracing::debug!(remote = remote_path, local = %local_path.display(), ?decision, "Planned asset");
            plan.actions.push(SyncAction {
                remote_path: remote_path.to_string(),
                local_path,
                decision,
            });
        }

        tracing::info!(
            transfers = plan.transfer_count(),
            skipped = plan.skip_count(),
            ignored = plan.messages.len(),
            "Download plan ready"
        );
        Ok(plan)
    }

    /// Local target for `remote_path`.
    ///
    /// Without `flatten` the remote directory prefix is dropped and the rest
    /// of the hierarchy is kept. `None` for paths containing `..` segments or
    /// nothing usable.
    pub fn local_path(&self, remote_path: &str, remote_directory: Option<&str>, local_root: &Path) -> Option<PathBuf> {
        let relative = match remote_directory {
            Some(dir) => remote_path
                .strip_prefix(dir)
                .and_then(|rest| rest.strip_prefix(REMOTE_PATH_SEPARATOR))
                .unwrap_or(remote_path),
            None => remote_path,
        };

        let segments: Vec<&str> = relative
            .split(REMOTE_PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect();

        if segments.iter().any(|segment| *segment == "..") {
            return None;
        }

        let segments = if self.flatten {
            &segments[segments.len().saturating_sub(1)..]
        } else {
            &segments[..]
        };

        if segments.is_empty() {
            return None;
        }

        Some(segments.iter().fold(local_root.to_path_buf(), |path, segment| path.join(segment)))
    }

    /// Decide whether `record` must be transferred to `local_path`.
    pub fn decide(&self, record: &ArtifactRecord, local_path: &Path) -> Result<SyncDecision> {
        if !local_path.is_file() {
            return Ok(SyncDecision::Transfer {
                reason: TransferReason::Missing,
            });
        }
        if self.no_cache {
            return Ok(SyncDecision::Transfer {
                reason: TransferReason::Forced,
            });
        }
        if same_content(record, local_path)? {
            Ok(SyncDecision::Skip)
        } else {
            Ok(SyncDecision::Transfer {
                reason: TransferReason::Changed,
            })
        }
    }
}
