//! JSON decoding and encoding for registry catalogs.
//!
//! Structural problems (a non-object root, a category that is not a mapping)
//! are rejected here so the filters only ever see well-formed catalogs.

use std::io::Read;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, CatalogResult};
use crate::model::CategorizedData;

/// Decode a catalog from a JSON document.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] when the document is not a mapping of
/// categories to item mappings whose records decode as `R`.
pub fn decode_catalog<R: DeserializeOwned>(text: &str) -> CatalogResult<CategorizedData<R>> {
    let data: CategorizedData<R> =
        serde_json::from_str(text).map_err(|source| CatalogError::Decode { source })?;
    tracing::debug!(categories = data.len(), "catalog decoded");
    Ok(data)
}

/// Read and decode a catalog from any reader (file, stdin, buffer).
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when reading fails, or
/// [`CatalogError::Decode`] when the payload is malformed.
pub fn read_catalog<R, Rd>(mut reader: Rd) -> CatalogResult<CategorizedData<R>>
where
    R: DeserializeOwned,
    Rd: Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| CatalogError::Io {
            operation: "catalog.read",
            source,
        })?;
    decode_catalog(&text)
}

/// Render a catalog as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CatalogError::Encode`] when a record fails to serialize.
pub fn encode_catalog_pretty<R: Serialize>(data: &CategorizedData<R>) -> CatalogResult<String> {
    serde_json::to_string_pretty(data).map_err(|source| CatalogError::Encode { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemRecord;
    use serde_json::Value;

    #[test]
    fn decodes_typed_catalog() {
        let data: CategorizedData<ItemRecord> =
            decode_catalog(r#"{"inputs":{"ChatInput":{"display_name":"Chat Input"}}}"#).unwrap();
        assert_eq!(data["inputs"]["ChatInput"].display_name(), Some("Chat Input"));
    }

    #[test]
    fn rejects_structurally_invalid_payloads() {
        for payload in ["[]", r#"{"inputs": []}"#, r#"{"inputs": {"a": 3}}"#, "not json"] {
            let err = decode_catalog::<ItemRecord>(payload).unwrap_err();
            assert!(matches!(err, CatalogError::Decode { .. }), "{payload}");
        }
    }

    #[test]
    fn typed_decoding_accepts_any_marker_type() {
        let data = decode_catalog::<ItemRecord>(
            r#"{"c":{"a":{"legacy":false,"beta":"experimental"},"b":{"legacy":"yes"}}}"#,
        )
        .unwrap();
        assert!(data["c"]["a"].beta());
        assert!(data["c"]["b"].legacy());
    }

    #[test]
    fn reads_from_reader_and_encodes_back() {
        let payload = br#"{"helpers":{"Note":{"legacy":false}}}"#;
        let data: CategorizedData<ItemRecord> = read_catalog(&payload[..]).unwrap();
        let encoded = encode_catalog_pretty(&data).unwrap();
        let reparsed: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(reparsed, serde_json::json!({"helpers":{"Note":{"legacy":false}}}));
    }
}
