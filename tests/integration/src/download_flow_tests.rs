//! End-to-end download planning
//!
//! Exercises the full local flow: resolve a remote path -> page through a
//! listing -> filter -> compare against local files -> plan -> materialise.

use nexus_core::{
    ArtifactFilter, ArtifactRecord, ComponentLocation, Paginator, SearchPage, SyncDecision,
    SyncPlanner, TransferReason, TransportError, same_content,
};
use nexus_fs::io::ensure_exists;
use nexus_test_utils::artifacts::{record_with_content, write_file};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// Remote content of the `raw` repository used by these tests.
const REMOTE: &[(&str, &[u8])] = &[
    ("site/index.html", b"<h1>home</h1>"),
    ("site/css/main.css", b"body {}"),
    ("site/img/logo.svg", b"<svg/>"),
    ("other/readme.txt", b"unrelated"),
];

/// Split the remote listing into pages of two, chained by token.
fn pages() -> Vec<SearchPage> {
    let items: Vec<serde_json::Value> = REMOTE
        .iter()
        .map(|(path, content)| record_with_content("raw", path, content).into_inner().into())
        .collect();

    items
        .chunks(2)
        .enumerate()
        .map(|(i, chunk)| SearchPage {
            items: chunk.to_vec(),
            continuation_token: (i + 1 < items.len().div_ceil(2)).then(|| format!("page-{}", i + 1)),
        })
        .collect()
}

/// A fetch function serving [`pages`] by continuation token.
fn server() -> impl FnMut(Option<&str>) -> Result<SearchPage, TransportError> {
    let pages = pages();
    move |token| {
        let index = match token {
            None => 0,
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| TransportError::with_status(400, "bad token"))?,
        };
        pages
            .get(index)
            .cloned()
            .ok_or_else(|| TransportError::with_status(404, "no such page"))
    }
}

fn listing_under(prefix: &str) -> Vec<ArtifactRecord> {
    ArtifactFilter::prefix(prefix)
        .apply(Paginator::new(server()))
        .collect::<Result<_, _>>()
        .unwrap()
}

/// Write every planned transfer's remote content to its local path.
fn materialise(actions: &[nexus_core::SyncAction]) {
    for action in actions {
        if let SyncDecision::Transfer { .. } = action.decision {
            let content = REMOTE
                .iter()
                .find(|(path, _)| *path == action.remote_path)
                .map(|(_, content)| *content)
                .unwrap();
            ensure_exists(&action.local_path, false).unwrap();
            fs::write(&action.local_path, content).unwrap();
        }
    }
}

#[test]
fn test_fresh_download_then_up_to_date() {
    let temp = TempDir::new().unwrap();
    let source = ComponentLocation::parse("raw/site/").unwrap();
    let records = listing_under(&source.remote_path().unwrap());
    assert_eq!(records.len(), 3);

    let planner = SyncPlanner::new();
    let plan = planner.plan_download(&records, &source, temp.path()).unwrap();
    assert_eq!(plan.transfer_count(), 3);
    assert!(plan.transfers().all(|a| a.decision
        == SyncDecision::Transfer {
            reason: TransferReason::Missing
        }));

    materialise(&plan.actions);
    assert!(temp.path().join("css/main.css").is_file());

    let again = planner.plan_download(&records, &source, temp.path()).unwrap();
    assert!(again.is_up_to_date());
    assert_eq!(again.skip_count(), 3);
}

#[test]
fn test_local_edit_is_detected() {
    let temp = TempDir::new().unwrap();
    let source = ComponentLocation::parse("raw/site/").unwrap();
    let records = listing_under("site/");

    let plan = SyncPlanner::new().plan_download(&records, &source, temp.path()).unwrap();
    materialise(&plan.actions);
    write_file(temp.path(), "index.html", b"<h1>edited</h1>");

    let logo = records
        .iter()
        .find(|r| r.path() == Some("site/img/logo.svg"))
        .unwrap();
    assert!(same_content(logo, &temp.path().join("img/logo.svg")).unwrap());

    let plan = SyncPlanner::new().plan_download(&records, &source, temp.path()).unwrap();
    let changed: Vec<&str> = plan.transfers().map(|a| a.remote_path.as_str()).collect();
    assert_eq!(changed, vec!["site/index.html"]);
}

#[test]
fn test_single_file_flattened() {
    let temp = TempDir::new().unwrap();
    let source = ComponentLocation::parse("raw/site/css/main.css").unwrap();
    let records = listing_under(&source.remote_path().unwrap());
    assert_eq!(records.len(), 1);

    let plan = SyncPlanner::new()
        .with_flatten(true)
        .plan_download(&records, &source, temp.path())
        .unwrap();

    assert_eq!(plan.actions.len(), 1);
    assert_eq!(plan.actions[0].local_path, temp.path().join("main.css"));
}

#[test]
fn test_whole_repository_plan_merges() {
    let temp = TempDir::new().unwrap();
    let site = ComponentLocation::parse("raw/site/").unwrap();
    let other = ComponentLocation::parse("raw/other/").unwrap();
    let records: Vec<ArtifactRecord> = Paginator::new(server()).collect::<Result<_, _>>().unwrap();

    let planner = SyncPlanner::new();
    let plan = planner
        .plan_download(&records, &site, &temp.path().join("site"))
        .unwrap()
        .merge(planner.plan_download(&records, &other, &temp.path().join("other")).unwrap());

    assert_eq!(plan.actions.len(), REMOTE.len());
    assert_eq!(plan.actions[3].local_path, temp.path().join("other/readme.txt"));
}

#[test]
fn test_listing_error_surfaces_in_order() {
    let mut served = 0;
    let fetch = move |_token: Option<&str>| {
        served += 1;
        if served == 1 {
            Ok(SearchPage {
                items: vec![serde_json::json!({"path": "site/a"})],
                continuation_token: Some("next".into()),
            })
        } else {
            Err(TransportError::with_status(503, "unavailable"))
        }
    };

    let results: Vec<_> = ArtifactFilter::any().apply(Paginator::new(fetch)).collect();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert_eq!(results[1].as_ref().unwrap_err().status, Some(503));
}
