//! List command implementation

use std::path::Path;

use nexus_core::{ArtifactFilter, ArtifactRecord};

use crate::error::Result;
use crate::listing::load_listing;

/// Run the list command
pub fn run_list(listing: &Path, term: Option<String>, exact: bool, json: bool) -> Result<()> {
    let records = load_listing(listing)?;
    let filter = ArtifactFilter::new(term, !exact);
    let matched: Vec<&ArtifactRecord> = filter.apply(&records).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    // Only records with a path pass the filter
    for path in matched.iter().filter_map(|record| record.path()) {
        println!("{}", path);
    }

    tracing::info!(total = records.len(), matched = matched.len(), "Filtered listing");
    Ok(())
}
