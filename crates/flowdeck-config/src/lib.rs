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
#![allow(clippy::redundant_pub_crate)]

//! Sidebar settings for the component palette.
//!
//! Layout: `model.rs` (typed settings and overrides), `validate.rs`
//! (field-level parsing helpers), `loader.rs` (file loading), `defaults.rs`.

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{SettingsOverrides, SidebarSettings};
