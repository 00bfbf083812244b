//! Settings-driven composition of the palette filters.
//!
//! # Design
//! - Stages run in a fixed order: legacy, beta, search, pruning.
//! - Each stage borrows the previous result; the caller's catalog is never touched.

use crate::filter::{
    apply_beta_filter, apply_legacy_filter, apply_search_filter, item_count, normalize_query,
    prune_empty_categories,
};
use crate::model::{CategorizedData, PaletteEntry};

/// Toggles controlling which filters the sidebar applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Keep legacy components visible.
    pub show_legacy: bool,
    /// Keep beta components visible.
    pub show_beta: bool,
    /// Optional free-text search query.
    pub search: Option<String>,
    /// Remove categories left without items.
    pub hide_empty_categories: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            show_legacy: false,
            show_beta: true,
            search: None,
            hide_empty_categories: false,
        }
    }
}

/// Counts describing a pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Categories in the input catalog.
    pub categories_in: usize,
    /// Categories in the filtered catalog.
    pub categories_out: usize,
    /// Items in the input catalog.
    pub items_in: usize,
    /// Items in the filtered catalog.
    pub items_out: usize,
}

/// Filtered catalog together with its run summary.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<R> {
    /// Catalog after every enabled stage.
    pub data: CategorizedData<R>,
    /// Counts for the run.
    pub summary: FilterSummary,
}

/// Applies the enabled filters in order.
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
    options: FilterOptions,
}

impl FilterPipeline {
    /// Build a pipeline from explicit options.
    #[must_use]
    pub const fn new(options: FilterOptions) -> Self {
        Self { options }
    }

    /// Run every enabled stage over `data`.
    #[must_use]
    pub fn run<R: PaletteEntry>(&self, data: &CategorizedData<R>) -> FilterOutcome<R> {
        let mut filtered = if self.options.show_legacy {
            data.clone()
        } else {
            apply_legacy_filter(data)
        };
        if !self.options.show_beta {
            filtered = apply_beta_filter(&filtered);
        }
        if let Some(query) = self.search_query() {
            filtered = apply_search_filter(&filtered, query);
        }
        if self.options.hide_empty_categories {
            filtered = prune_empty_categories(&filtered);
        }

        let summary = FilterSummary {
            categories_in: data.len(),
            categories_out: filtered.len(),
            items_in: item_count(data),
            items_out: item_count(&filtered),
        };
        tracing::debug!(
            categories_in = summary.categories_in,
            categories_out = summary.categories_out,
            items_in = summary.items_in,
            items_out = summary.items_out,
            "palette filter pipeline completed"
        );

        FilterOutcome {
            data: filtered,
            summary,
        }
    }

    fn search_query(&self) -> Option<&str> {
        self.options
            .search
            .as_deref()
            .filter(|query| !normalize_query(query).is_empty())
    }
}
