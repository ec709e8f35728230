//! Content digests for local files
//!
//! Digests are rendered as lowercase hex so they compare directly against
//! the values a Nexus server advertises under an asset's `checksum` map.
//! Sources are streamed through the hasher in fixed-size chunks; a file is
//! never loaded into memory as a whole.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A digest algorithm the server reports checksums for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Md5,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [HashAlgorithm; 4] = [Self::Sha1, Self::Md5, Self::Sha256, Self::Sha512];

    /// The key used for this algorithm in an asset's `checksum` map.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| Error::UnknownHashAlgorithm { name: s.to_string() })
    }
}

/// Local content to hash: either a path to open, or an already-open reader.
///
/// Both forms produce the same digest for the same bytes. A reader is
/// consumed from its current position to EOF.
pub enum LocalSource<'a> {
    Path(&'a Path),
    Reader(&'a mut dyn Read),
}

impl std::fmt::Debug for LocalSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl<'a> From<&'a Path> for LocalSource<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for LocalSource<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Self::Path(path.as_path())
    }
}

impl<'a, R: Read> From<&'a mut R> for LocalSource<'a> {
    fn from(reader: &'a mut R) -> Self {
        Self::Reader(reader)
    }
}

/// Calculate the hex digest of a local source with the given algorithm.
///
/// Zero-length input yields the algorithm's empty-input digest.
///
/// # Errors
///
/// Returns [`Error::Io`] if a path source cannot be opened or read, and
/// [`Error::Stream`] if a reader source fails.
pub fn calculate_hash<'a>(algorithm: HashAlgorithm, source: impl Into<LocalSource<'a>>) -> Result<String> {
    match source.into() {
        LocalSource::Path(path) => {
            let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
            digest_reader(algorithm, &mut file).map_err(|e| Error::io(path, e))
        }
        LocalSource::Reader(reader) => digest_reader(algorithm, reader).map_err(Error::Stream),
    }
}

/// Calculate the hex digest of an in-memory buffer.
pub fn hash_bytes(algorithm: HashAlgorithm, content: &[u8]) -> String {
    let mut reader = content;
    // Reading from a slice cannot fail
    digest_reader(algorithm, &mut reader).unwrap_or_default()
}

fn digest_reader(algorithm: HashAlgorithm, reader: &mut dyn Read) -> std::io::Result<String> {
    match algorithm {
        HashAlgorithm::Sha1 => stream::<Sha1>(reader),
        HashAlgorithm::Md5 => stream::<Md5>(reader),
        HashAlgorithm::Sha256 => stream::<Sha256>(reader),
        HashAlgorithm::Sha512 => stream::<Sha512>(reader),
    }
}

fn stream<D: Digest + Write>(reader: &mut dyn Read) -> std::io::Result<String> {
    let mut hasher = D::new();
    std::io::copy(reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in HashAlgorithm::ALL {
            let parsed: HashAlgorithm = algorithm.as_str().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let err = "crc32".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, Error::UnknownHashAlgorithm { ref name } if name == "crc32"));
    }

    #[test]
    fn empty_input_known_values() {
        assert_eq!(
            hash_bytes(HashAlgorithm::Sha1, b""),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            hash_bytes(HashAlgorithm::Md5, b""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn reader_and_bytes_agree() {
        let mut cursor = std::io::Cursor::new(b"hello world".to_vec());
        let from_reader = calculate_hash(HashAlgorithm::Sha256, &mut cursor).unwrap();
        assert_eq!(from_reader, hash_bytes(HashAlgorithm::Sha256, b"hello world"));
        assert_eq!(
            from_reader,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }
}
