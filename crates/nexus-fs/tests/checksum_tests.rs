//! Tests for local content hashing

use nexus_fs::{Error, HashAlgorithm, LocalSource, calculate_hash, hash_bytes};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs::{self, File};
use std::io::{Seek, SeekFrom};
use tempfile::TempDir;

#[rstest]
#[case(HashAlgorithm::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709")]
#[case(HashAlgorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e")]
#[case(
    HashAlgorithm::Sha256,
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
)]
fn empty_file_hashes_to_empty_input_digest(#[case] algorithm: HashAlgorithm, #[case] expected: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    assert_eq!(calculate_hash(algorithm, &path).unwrap(), expected);
}

#[rstest]
#[case(HashAlgorithm::Sha1, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed")]
#[case(HashAlgorithm::Md5, "5eb63bbbe01eeed093cb22bb8f5acdc3")]
fn file_known_values(#[case] algorithm: HashAlgorithm, #[case] expected: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("hello.txt");
    fs::write(&path, "hello world").unwrap();

    assert_eq!(calculate_hash(algorithm, path.as_path()).unwrap(), expected);
}

#[test]
fn open_handle_and_path_agree() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data.bin");
    let content: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).unwrap();

    let mut handle = File::open(&path).unwrap();
    for algorithm in HashAlgorithm::ALL {
        handle.seek(SeekFrom::Start(0)).unwrap();
        let from_handle = calculate_hash(algorithm, &mut handle).unwrap();
        let from_path = calculate_hash(algorithm, LocalSource::Path(&path)).unwrap();
        assert_eq!(from_handle, from_path, "{algorithm} digests differ");
        assert_eq!(from_path, hash_bytes(algorithm, &content));
    }
}

#[test]
fn missing_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("does_not_exist.bin");

    let err = calculate_hash(HashAlgorithm::Sha1, &path).unwrap_err();
    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn digests_are_lowercase_hex() {
    let digest = hash_bytes(HashAlgorithm::Sha512, b"nexus");
    assert_eq!(digest.len(), 128);
    assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}
