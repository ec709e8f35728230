//! Lazy path filtering over artifact listings

use super::ArtifactRecord;

/// Selects listing records by their `path`.
///
/// Records without a string `path` never match. With no term every other
/// record matches; otherwise the path must start with the term
/// (`partial_match`) or equal it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFilter {
    term: Option<String>,
    partial_match: bool,
}

impl Default for ArtifactFilter {
    fn default() -> Self {
        Self {
            term: None,
            partial_match: true,
        }
    }
}

impl ArtifactFilter {
    pub fn new(term: Option<String>, partial_match: bool) -> Self {
        Self { term, partial_match }
    }

    /// Match every record that has a string path.
    pub fn any() -> Self {
        Self::default()
    }

    /// Match paths starting with `term`.
    pub fn prefix(term: impl Into<String>) -> Self {
        Self::new(Some(term.into()), true)
    }

    /// Match paths equal to `term`.
    pub fn exact(term: impl Into<String>) -> Self {
        Self::new(Some(term.into()), false)
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn partial_match(&self) -> bool {
        self.partial_match
    }

    pub fn matches(&self, record: &ArtifactRecord) -> bool {
        let Some(path) = record.path() else {
            return false;
        };

        match &self.term {
            None => true,
            Some(term) if self.partial_match => path.starts_with(term.as_str()),
            Some(term) => path == term,
        }
    }

    /// Lazily filter `records`, preserving their order.
    ///
    /// Only the current element is held; the returned iterator can be
    /// cloned (and so restarted) whenever the input iterator can.
    pub fn apply<I>(&self, records: I) -> Filtered<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: FilterItem,
    {
        Filtered {
            inner: records.into_iter(),
            filter: self.clone(),
        }
    }
}

/// Items an [`ArtifactFilter`] can select from.
pub trait FilterItem {
    /// The record to match, or `None` for items that always pass through.
    fn as_record(&self) -> Option<&ArtifactRecord>;
}

impl FilterItem for ArtifactRecord {
    fn as_record(&self) -> Option<&ArtifactRecord> {
        Some(self)
    }
}

impl FilterItem for &ArtifactRecord {
    fn as_record(&self) -> Option<&ArtifactRecord> {
        Some(*self)
    }
}

/// Errors from a paginated source pass through so the consumer sees them in
/// order.
impl<E> FilterItem for std::result::Result<ArtifactRecord, E> {
    fn as_record(&self) -> Option<&ArtifactRecord> {
        self.as_ref().ok()
    }
}

/// Iterator returned by [`ArtifactFilter::apply`].
#[derive(Debug, Clone)]
pub struct Filtered<I> {
    inner: I,
    filter: ArtifactFilter,
}

impl<I> Iterator for Filtered<I>
where
    I: Iterator,
    I::Item: FilterItem,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.inner.by_ref() {
            let keep = item
                .as_record()
                .is_none_or(|record| self.filter.matches(record));
            if keep {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Filter `records` by `term`, matching prefixes when `partial_match` is set.
pub fn filtered_list<I>(records: I, term: Option<&str>, partial_match: bool) -> Filtered<I::IntoIter>
where
    I: IntoIterator,
    I::Item: FilterItem,
{
    ArtifactFilter::new(term.map(str::to_string), partial_match).apply(records)
}
