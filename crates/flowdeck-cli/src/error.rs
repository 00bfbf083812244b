//! CLI error type and exit-code mapping.

use std::fmt::{self, Display, Formatter};

use flowdeck_catalog::CatalogError;
use flowdeck_config::ConfigError;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Io { .. } | CatalogError::Encode { .. } => Self::failure(err),
            CatalogError::Decode { .. } => {
                Self::validation(format!("{:#}", anyhow::Error::new(err)))
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io { .. } => Self::failure(err),
            _ => Self::validation(format!("{:#}", anyhow::Error::new(err))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_distinguish_validation_from_failure() {
        assert_eq!(CliError::validation("bad flag").exit_code(), 2);
        assert_eq!(CliError::failure(anyhow!("boom")).exit_code(), 3);
    }

    #[test]
    fn decode_errors_are_validation_with_source_detail() {
        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = CliError::from(CatalogError::Decode { source });
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().starts_with("invalid catalog payload: "));
    }

    #[test]
    fn encode_errors_are_failures() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CliError::from(CatalogError::Encode { source });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn config_io_errors_are_failures() {
        let err = CliError::from(ConfigError::Io {
            operation: "settings.read",
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(err.exit_code(), 3);

        let err = CliError::from(ConfigError::UnknownField {
            field: "colour".into(),
        });
        assert_eq!(err.display_message(), "unknown settings field 'colour'");
    }
}
