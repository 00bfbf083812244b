//! Default values for sidebar settings.

/// Legacy components are hidden unless explicitly requested.
pub(crate) const SHOW_LEGACY: bool = false;
/// Beta components are shown by default.
pub(crate) const SHOW_BETA: bool = true;
/// Empty categories stay visible by default.
pub(crate) const HIDE_EMPTY_CATEGORIES: bool = false;
/// Log level used when neither the settings file nor `RUST_LOG` provide one.
pub(crate) const LOG_LEVEL: &str = "info";
