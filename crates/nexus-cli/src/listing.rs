//! Saved listing files

use std::path::Path;

use nexus_core::{ArtifactRecord, SearchPage};
use nexus_fs::ConfigStore;
use serde::Deserialize;

use crate::error::Result;

/// Accepted shapes of a listing file.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Records(Vec<ArtifactRecord>),
    Page(SearchPage),
}

/// Load the records of a listing file in file order.
pub fn load_listing(path: &Path) -> Result<Vec<ArtifactRecord>> {
    let listing: Listing = ConfigStore::new().load(path)?;
    let records = match listing {
        Listing::Records(records) => records,
        Listing::Page(page) => {
            if page.continuation_token.is_some() {
                tracing::warn!(
                    path = %path.display(),
                    "Listing is one page of a longer result; later pages are not included"
                );
            }
            page.into_records()
        }
    };

    tracing::debug!(path = %path.display(), count = records.len(), "Loaded listing");
    Ok(records)
}
