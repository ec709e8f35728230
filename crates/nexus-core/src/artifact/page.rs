//! Paginated listing retrieval

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ArtifactRecord;
use crate::script::TransportError;

/// One page of a list or search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub continuation_token: Option<String>,
}

impl SearchPage {
    /// The page's items as records; non-object items are dropped.
    pub fn into_records(self) -> Vec<ArtifactRecord> {
        self.items.into_iter().filter_map(ArtifactRecord::from_value).collect()
    }
}

/// Lazily walks a paginated listing one record at a time.
///
/// `fetch` receives the continuation token of the previous page (`None` for
/// the first request). Only one page is buffered. Iteration ends after a
/// page without a continuation token, or right after yielding a fetch error.
pub struct Paginator<F> {
    fetch: F,
    buffered: std::vec::IntoIter<ArtifactRecord>,
    continuation_token: Option<String>,
    pages: usize,
    finished: bool,
}

impl<F> Paginator<F>
where
    F: FnMut(Option<&str>) -> Result<SearchPage, TransportError>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            buffered: Vec::new().into_iter(),
            continuation_token: None,
            pages: 0,
            finished: false,
        }
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }
}

impl<F> Iterator for Paginator<F>
where
    F: FnMut(Option<&str>) -> Result<SearchPage, TransportError>,
{
    type Item = Result<ArtifactRecord, TransportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffered.next() {
                return Some(Ok(record));
            }
            if self.finished {
                return None;
            }

            match (self.fetch)(self.continuation_token.as_deref()) {
                Ok(page) => {
                    self.pages += 1;
                    self.continuation_token = page.continuation_token.clone();
                    self.finished = self.continuation_token.is_none();
                    tracing::debug!(
                        page = self.pages,
                        items = page.items.len(),
                        more = !self.finished,
                        "Fetched listing page"
                    );
                    self.buffered = page.into_records().into_iter();
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
