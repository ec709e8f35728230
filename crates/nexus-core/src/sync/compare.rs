//! Content comparison against advertised checksums

use nexus_fs::{HashAlgorithm, LocalSource, calculate_hash};
use serde_json::Value;

use crate::Result;
use crate::artifact::ArtifactRecord;

/// Algorithms consulted, in order, when comparing content.
pub const CHECKSUM_PREFERENCE: [HashAlgorithm; 2] = [HashAlgorithm::Sha1, HashAlgorithm::Md5];

/// The first checksum key from [`CHECKSUM_PREFERENCE`] the record carries.
///
/// A present key wins even when its value is not a string; later
/// algorithms are not consulted.
pub fn preferred_checksum(artifact: &ArtifactRecord) -> Option<(HashAlgorithm, &Value)> {
    CHECKSUM_PREFERENCE
        .into_iter()
        .find_map(|algorithm| artifact.checksum_value(algorithm).map(|sum| (algorithm, sum)))
}

/// Whether `local` has the same content as `artifact`.
///
/// Only the preferred advertised checksum is computed. Without any usable
/// checksum the answer is `false`, forcing a transfer rather than trusting
/// an unverified match. Hex digests compare case-sensitively.
pub fn same_content<'a>(artifact: &ArtifactRecord, local: impl Into<LocalSource<'a>>) -> Result<bool> {
    let Some((algorithm, remote)) = preferred_checksum(artifact) else {
        return Ok(false);
    };
    let Some(remote) = remote.as_str() else {
        tracing::debug!(algorithm = %algorithm, "Advertised checksum is not a string");
        return Ok(false);
    };

    let local_hash = calculate_hash(algorithm, local)?;
    Ok(local_hash == remote)
}
