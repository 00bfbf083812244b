#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Component palette catalog and the filters the sidebar applies to it.
//!
//! Layout: `model.rs` (catalog containers, `ItemRecord`, marker traits),
//! `filter.rs` (pure legacy/beta/search filters), `pipeline.rs` (settings-driven
//! composition), `codec.rs` (JSON decoding/encoding), `error.rs`.

pub mod codec;
pub mod error;
pub mod filter;
pub mod model;
pub mod pipeline;

pub use codec::{decode_catalog, encode_catalog_pretty, read_catalog};
pub use error::{CatalogError, CatalogResult};
pub use filter::{
    apply_beta_filter, apply_legacy_filter, apply_search_filter, item_count, normalize_query,
    prune_empty_categories,
};
pub use model::{
    BetaFlag, CategorizedData, CategoryItems, ItemRecord, LegacyFlag, PaletteEntry, Searchable,
    is_truthy,
};
pub use pipeline::{FilterOptions, FilterOutcome, FilterPipeline, FilterSummary};
