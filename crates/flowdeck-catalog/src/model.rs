//! Catalog containers and the marker traits the palette filters rely on.
//!
//! # Design
//! - Containers are insertion-ordered so filtered output follows registry order.
//! - Records stay opaque: filters only see the markers exposed through traits.
//! - [`ItemRecord`] keeps the registry object verbatim, explicit `null`s included.

use std::num::FpCategory;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Items within a single category, keyed by component name.
pub type CategoryItems<R = ItemRecord> = IndexMap<String, R>;

/// Full palette catalog: category key to the items registered under it.
pub type CategorizedData<R = ItemRecord> = IndexMap<String, CategoryItems<R>>;

/// Records that may be flagged as legacy (deprecated and hidden by default).
pub trait LegacyFlag {
    /// Returns `true` when the record should be hidden by the legacy filter.
    fn is_legacy(&self) -> bool;
}

/// Records that may be flagged as beta.
pub trait BetaFlag {
    /// Returns `true` when the record is marked as beta.
    fn is_beta(&self) -> bool;
}

/// Records exposing human-readable text for palette search.
pub trait Searchable {
    /// Text fields that participate in search matching, in priority order.
    fn search_fields(&self) -> Vec<&str>;
}

/// Everything the filter pipeline needs from a catalog record.
pub trait PaletteEntry: LegacyFlag + BetaFlag + Searchable + Clone {}

impl<T> PaletteEntry for T where T: LegacyFlag + BetaFlag + Searchable + Clone {}

/// Component record as served by the registry.
///
/// The record is the registry's JSON object, stored as-is. Markers and labels
/// are read through accessors and never rejected, whatever their JSON type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemRecord {
    fields: Map<String, Value>,
}

impl ItemRecord {
    /// Builder-style setter for the legacy marker.
    #[must_use]
    pub fn with_legacy(self, legacy: bool) -> Self {
        self.with_field("legacy", Value::Bool(legacy))
    }

    /// Builder-style setter for an arbitrary registry field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Whether the `legacy` field is truthy; absent or `null` is not legacy.
    #[must_use]
    pub fn legacy(&self) -> bool {
        self.flag("legacy")
    }

    /// Whether the `beta` field is truthy.
    #[must_use]
    pub fn beta(&self) -> bool {
        self.flag("beta")
    }

    /// Sidebar label, when the registry supplies one as a string.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.text("display_name")
    }

    /// Short component description, when supplied as a string.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.text("description")
    }

    fn flag(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(is_truthy)
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

impl LegacyFlag for ItemRecord {
    fn is_legacy(&self) -> bool {
        self.legacy()
    }
}

impl BetaFlag for ItemRecord {
    fn is_beta(&self) -> bool {
        self.beta()
    }
}

impl Searchable for ItemRecord {
    fn search_fields(&self) -> Vec<&str> {
        self.display_name()
            .into_iter()
            .chain(self.description())
            .collect()
    }
}


// Untyped registry payloads follow the registry client's truthiness rules.
impl LegacyFlag for Value {
    fn is_legacy(&self) -> bool {
        self.get("legacy").is_some_and(is_truthy)
    }
}

impl BetaFlag for Value {
    fn is_beta(&self) -> bool {
        self.get("beta").is_some_and(is_truthy)
    }
}

impl Searchable for Value {
    fn search_fields(&self) -> Vec<&str> {
        ["display_name", "description"]
            .into_iter()
            .filter_map(|field| self.get(field).and_then(Value::as_str))
            .collect()
    }
}

/// Truthiness of a JSON value: `null`, `false`, `0`, and `""` are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|n| !matches!(n.classify(), FpCategory::Zero | FpCategory::Nan)),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
