//! Typed sidebar settings and override layers.
//!
//! # Design
//! - Settings documents are validated field by field so errors name the culprit.
//! - Overrides (CLI flags, environment) layer over file values, never the reverse.

use flowdeck_catalog::FilterOptions;
use flowdeck_telemetry::LogFormat;
use serde_json::Value;

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};
use crate::validate::{parse_bool, parse_log_format, parse_log_level, parse_search};

/// Effective sidebar settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSettings {
    /// Keep legacy components visible.
    pub show_legacy: bool,
    /// Keep beta components visible.
    pub show_beta: bool,
    /// Optional free-text search query.
    pub search: Option<String>,
    /// Remove categories left without items.
    pub hide_empty_categories: bool,
    /// Log level directive handed to the tracing subscriber.
    pub log_level: String,
    /// Log output format; inferred from the build when unset.
    pub log_format: Option<LogFormat>,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            show_legacy: defaults::SHOW_LEGACY,
            show_beta: defaults::SHOW_BETA,
            search: None,
            hide_empty_categories: defaults::HIDE_EMPTY_CATEGORIES,
            log_level: defaults::LOG_LEVEL.to_string(),
            log_format: None,
        }
    }
}

/// Values supplied on top of a settings document. `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// Override for [`SidebarSettings::show_legacy`].
    pub show_legacy: Option<bool>,
    /// Override for [`SidebarSettings::show_beta`].
    pub show_beta: Option<bool>,
    /// Override for [`SidebarSettings::search`].
    pub search: Option<String>,
    /// Override for [`SidebarSettings::hide_empty_categories`].
    pub hide_empty_categories: Option<bool>,
    /// Override for [`SidebarSettings::log_level`].
    pub log_level: Option<String>,
}

impl SidebarSettings {
    /// Validate a settings document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDocument`] for a non-object root,
    /// [`ConfigError::UnknownField`] for unrecognised keys, and
    /// [`ConfigError::InvalidField`] when a value has the wrong type.
    pub fn from_json_value(document: &Value) -> ConfigResult<Self> {
        let map = document.as_object().ok_or(ConfigError::InvalidDocument)?;
        let mut settings = Self::default();

        for (field, value) in map {
            match field.as_str() {
                "show_legacy" => settings.show_legacy = parse_bool(value, field)?,
                "show_beta" => settings.show_beta = parse_bool(value, field)?,
                "search" => settings.search = parse_search(value, field)?,
                "hide_empty_categories" => {
                    settings.hide_empty_categories = parse_bool(value, field)?;
                }
                "log_level" => settings.log_level = parse_log_level(value, field)?,
                "log_format" => settings.log_format = parse_log_format(value, field)?,
                other => {
                    return Err(ConfigError::UnknownField {
                        field: other.to_string(),
                    });
                }
            }
        }

        Ok(settings)
    }

    /// Layer `overrides` over these settings.
    #[must_use]
    pub fn apply_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(show_legacy) = overrides.show_legacy {
            self.show_legacy = show_legacy;
        }
        if let Some(show_beta) = overrides.show_beta {
            self.show_beta = show_beta;
        }
        if let Some(search) = overrides.search {
            self.search = Some(search).filter(|query| !query.trim().is_empty());
        }
        if let Some(hide_empty) = overrides.hide_empty_categories {
            self.hide_empty_categories = hide_empty;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }

    /// Filter toggles for the palette pipeline.
    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            show_legacy: self.show_legacy,
            show_beta: self.show_beta,
            search: self.search.clone(),
            hide_empty_categories: self.hide_empty_categories,
        }
    }
}
