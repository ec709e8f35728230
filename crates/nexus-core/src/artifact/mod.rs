//! Remote artifact listings
//!
//! - **record**: one asset as described by a listing or search response
//! - **filter**: lazy selection of records by path prefix or exact path
//! - **page**: page-by-page retrieval of listings with continuation tokens

mod filter;
mod page;
mod record;

pub use filter::{ArtifactFilter, FilterItem, Filtered, filtered_list};
pub use page::{Paginator, SearchPage};
pub use record::ArtifactRecord;
