//! Cleanup policy flows through the script channel
//!
//! Policy files are loaded from disk, the backing script is installed from a
//! catalog directory, and policies round-trip through an in-memory server.

use nexus_core::{
    CLEANUP_POLICY_SCRIPT, CleanupPolicy, CleanupPolicyRepository, Error, ScriptCatalog,
    ScriptChannel,
};
use nexus_fs::ConfigStore;
use nexus_test_utils::artifacts::write_file;
use nexus_test_utils::{MemoryScriptServer, PolicyStore, ScriptCall};
use pretty_assertions::assert_eq;
use std::rc::Rc;
use tempfile::TempDir;

fn catalog(temp: &TempDir) -> ScriptCatalog {
    let scripts = temp.path().join("scripts");
    write_file(
        &scripts,
        &format!("{CLEANUP_POLICY_SCRIPT}.groovy"),
        b"import groovy.json.JsonOutput\n",
    );
    ScriptCatalog::new(scripts)
}

#[test]
fn test_policy_file_to_server_and_back() {
    let temp = TempDir::new().unwrap();
    let policy_file = write_file(
        temp.path(),
        "policy.yaml",
        b"name: old-snapshots\nformat: maven2\nmode: delete\ncriteria:\n  lastDownloaded: 90\n  regex: '.*-SNAPSHOT.*'\n",
    );
    let policy: CleanupPolicy = ConfigStore::new().load(&policy_file).unwrap();

    let store = PolicyStore::new();
    let server = MemoryScriptServer::new().with_handler(CLEANUP_POLICY_SCRIPT, store.handler());
    let channel = ScriptChannel::new(&server);
    let repository = CleanupPolicyRepository::from_catalog(&channel, &catalog(&temp)).unwrap();

    repository.create_or_update(&policy).unwrap();
    let fetched = repository.get_by_name("old-snapshots").unwrap();

    assert_eq!(fetched, policy);
    assert_eq!(
        store.get("old-snapshots").unwrap()["criteria"]["regex"],
        ".*-SNAPSHOT.*"
    );
}

#[test]
fn test_two_clients_share_one_install() {
    let temp = TempDir::new().unwrap();
    let catalog = catalog(&temp);
    let store = PolicyStore::new();
    let server = Rc::new(
        MemoryScriptServer::new().with_handler(CLEANUP_POLICY_SCRIPT, store.handler()),
    );

    let first = ScriptChannel::new(Rc::clone(&server));
    let second = ScriptChannel::new(Rc::clone(&server));
    let writer = CleanupPolicyRepository::from_catalog(&first, &catalog).unwrap();
    let reader = CleanupPolicyRepository::from_catalog(&second, &catalog).unwrap();

    writer
        .create_or_update(&CleanupPolicy::new("shared").with_notes("from first"))
        .unwrap();

    assert_eq!(server.install_count(CLEANUP_POLICY_SCRIPT), 1);
    assert_eq!(
        reader.get_by_name("shared").unwrap().notes.as_deref(),
        Some("from first")
    );
}

#[test]
fn test_concurrent_install_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let server = MemoryScriptServer::new().racing_install(CLEANUP_POLICY_SCRIPT);
    let channel = ScriptChannel::new(&server);

    CleanupPolicyRepository::from_catalog(&channel, &catalog(&temp)).unwrap();

    assert_eq!(
        server.calls(),
        vec![
            ScriptCall::Exists(CLEANUP_POLICY_SCRIPT.into()),
            ScriptCall::Install(CLEANUP_POLICY_SCRIPT.into()),
            ScriptCall::Exists(CLEANUP_POLICY_SCRIPT.into()),
        ]
    );
}

#[test]
fn test_missing_catalog_entry_fails_before_any_call() {
    let temp = TempDir::new().unwrap();
    let server = MemoryScriptServer::new();
    let channel = ScriptChannel::new(&server);

    let err = CleanupPolicyRepository::from_catalog(&channel, &ScriptCatalog::new(temp.path()))
        .err()
        .unwrap();

    assert!(matches!(err, Error::Fs(_)));
    assert!(server.calls().is_empty());
}

#[test]
fn test_update_then_lookup_sees_latest() {
    let temp = TempDir::new().unwrap();
    let store = PolicyStore::new();
    let server = MemoryScriptServer::new().with_handler(CLEANUP_POLICY_SCRIPT, store.handler());
    let channel = ScriptChannel::new(&server);
    let repository = CleanupPolicyRepository::from_catalog(&channel, &catalog(&temp)).unwrap();

    repository
        .create_or_update(&CleanupPolicy::new("p").with_format("raw"))
        .unwrap();
    repository
        .create_or_update(&CleanupPolicy::new("p").with_format("npm"))
        .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(
        repository.get_by_name("p").unwrap().format.as_deref(),
        Some("npm")
    );
    assert!(matches!(
        repository.get_by_name("q"),
        Err(Error::InvalidCleanupPolicy { .. })
    ));
}
