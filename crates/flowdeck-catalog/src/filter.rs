//! Pure palette filters.
//!
//! Every filter borrows its input and returns a fresh catalog. Category keys
//! are always carried over, even when no items survive; use
//! [`prune_empty_categories`] when the caller wants them gone.

use indexmap::IndexMap;

use crate::model::{BetaFlag, CategorizedData, CategoryItems, LegacyFlag, Searchable};

/// Drop every item whose record is flagged as legacy.
///
/// Categories are preserved exactly, including those left empty.
#[must_use]
pub fn apply_legacy_filter<R>(data: &CategorizedData<R>) -> CategorizedData<R>
where
    R: LegacyFlag + Clone,
{
    let filtered = retain_items(data, |_, _, record| !record.is_legacy());
    trace_filter("legacy", data, &filtered);
    filtered
}

/// Drop every item whose record is flagged as beta.
#[must_use]
pub fn apply_beta_filter<R>(data: &CategorizedData<R>) -> CategorizedData<R>
where
    R: BetaFlag + Clone,
{
    let filtered = retain_items(data, |_, _, record| !record.is_beta());
    trace_filter("beta", data, &filtered);
    filtered
}

/// Keep items matching a free-text query.
///
/// An item matches when the normalised query occurs in its key, its
/// category key, or any of its [`Searchable::search_fields`]. A blank query
/// returns the catalog unchanged.
#[must_use]
pub fn apply_search_filter<R>(data: &CategorizedData<R>, query: &str) -> CategorizedData<R>
where
    R: Searchable + Clone,
{
    let needle = normalize_query(query);
    if needle.is_empty() {
        return data.clone();
    }

    let filtered = retain_items(data, |category, key, record| {
        contains_normalized(category, &needle)
            || contains_normalized(key, &needle)
            || record
                .search_fields()
                .into_iter()
                .any(|field| contains_normalized(field, &needle))
    });
    trace_filter("search", data, &filtered);
    filtered
}

/// Copy of `data` without categories whose item map is empty.
#[must_use]
pub fn prune_empty_categories<R: Clone>(data: &CategorizedData<R>) -> CategorizedData<R> {
    data.iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, items)| (category.clone(), items.clone()))
        .collect()
}

/// Total number of items across all categories.
#[must_use]
pub fn item_count<R>(data: &CategorizedData<R>) -> usize {
    data.values().map(IndexMap::len).sum()
}

/// Lower-case `query` and collapse runs of whitespace into single spaces.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize_query(haystack).contains(needle)
}

fn retain_items<R, F>(data: &CategorizedData<R>, mut keep: F) -> CategorizedData<R>
where
    R: Clone,
    F: FnMut(&str, &str, &R) -> bool,
{
    data.iter()
        .map(|(category, items)| {
            let kept = items
                .iter()
                .filter(|(key, record)| keep(category, key, record))
                .map(|(key, record)| (key.clone(), record.clone()))
                .collect::<CategoryItems<R>>();
            (category.clone(), kept)
        })
        .collect()
}

fn trace_filter<R>(filter: &'static str, before: &CategorizedData<R>, after: &CategorizedData<R>) {
    tracing::trace!(
        filter,
        categories = after.len(),
        items_in = item_count(before),
        items_out = item_count(after),
        "palette filter applied"
    );
}
