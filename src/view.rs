//! Read-only view transforms over the ranked leaderboard.
//!
//! Ranking is computed once over the full unfiltered set by the pipeline;
//! the transforms here never recompute it. Filtering happens before
//! pagination, and a page's display position is its position within the
//! filtered list, distinct from the `rank` field assigned over the full set.

use crate::types::AggregatedContributor;

/// Default number of leaderboard rows per page.
pub const PAGE_SIZE: usize = 10;

/// Default number of entries in the top-performers strip.
pub const TOP_PERFORMERS: usize = 3;

/// Filter entries by a case-insensitive substring match against `login`.
///
/// An empty query selects everything. Relative order is preserved.
#[must_use]
pub fn filter_by_login<'a>(
    entries: &'a [AggregatedContributor],
    query: &str,
) -> Vec<&'a AggregatedContributor> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.login.to_lowercase().contains(&query))
        .collect()
}

/// Take one page of an already-ordered sequence.
///
/// Pages are 1-based and fixed-size; a page past the end is empty. Page 0
/// is treated as page 1.
#[must_use]
pub fn paginate<T>(entries: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page.max(1) - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(entries.len());
    if start >= entries.len() {
        return &[];
    }
    &entries[start..end]
}

/// Take the leading `n` entries of an already-ranked sequence.
#[must_use]
pub fn top_performers<T>(entries: &[T], n: usize) -> &[T] {
    &entries[..n.min(entries.len())]
}

/// Number of pages needed to show `len` entries at `page_size` per page.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
