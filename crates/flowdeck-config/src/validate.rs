//! Validation helpers for settings documents.

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};
use flowdeck_telemetry::LogFormat;

pub(crate) fn parse_bool(value: &Value, field: &str) -> ConfigResult<bool> {
    value.as_bool().ok_or_else(|| invalid(field, value, "must be a boolean"))
}

/// `null` and blank strings both mean "no query".
pub(crate) fn parse_search(value: &Value, field: &str) -> ConfigResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        _ => Err(invalid(field, value, "must be a string or null")),
    }
}

pub(crate) fn parse_log_level(value: &Value, field: &str) -> ConfigResult<String> {
    let level = value
        .as_str()
        .ok_or_else(|| invalid(field, value, "must be a string"))?
        .trim();
    if level.is_empty() {
        return Err(invalid(field, value, "must not be empty"));
    }
    Ok(level.to_string())
}

pub(crate) fn parse_log_format(value: &Value, field: &str) -> ConfigResult<Option<LogFormat>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => LogFormat::parse(text)
            .map(Some)
            .ok_or_else(|| invalid(field, value, "must be 'json' or 'pretty'")),
        _ => Err(invalid(field, value, "must be a string or null")),
    }
}

fn invalid(field: &str, value: &Value, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field: field.to_string(),
        value: Some(value.to_string()),
        reason,
    }
}
