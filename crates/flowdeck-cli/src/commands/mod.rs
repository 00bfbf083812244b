//! Command handlers grouped by concern.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::Context;
use flowdeck_catalog::{CategorizedData, ItemRecord, read_catalog};

use crate::error::{CliError, CliResult};

pub(crate) mod categories;
pub(crate) mod filter;

/// Load a typed catalog from `path`, where `-` means stdin.
pub(crate) fn load_catalog(path: &Path) -> CliResult<CategorizedData<ItemRecord>> {
    if path.as_os_str() == "-" {
        return Ok(read_catalog(io::stdin().lock())?);
    }
    let file = File::open(path)
        .with_context(|| format!("failed to open catalog {}", path.display()))
        .map_err(CliError::failure)?;
    Ok(read_catalog(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_test_support::files::Scratch;
    use flowdeck_test_support::fixtures::registry_catalog;

    #[test]
    fn load_catalog_reads_files() {
        let scratch = Scratch::new().expect("scratch dir");
        let path = scratch
            .write_json("catalog.json", &registry_catalog())
            .expect("catalog fixture");
        let data = load_catalog(&path).expect("catalog loads");
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn missing_catalog_is_a_failure() {
        let scratch = Scratch::new().expect("scratch dir");
        let err = load_catalog(&scratch.missing("nope.json")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("failed to open catalog"));
    }

    #[test]
    fn malformed_catalog_is_a_validation_error() {
        let scratch = Scratch::new().expect("scratch dir");
        let path = scratch
            .write_text("catalog.json", r#"{"inputs": ["ChatInput"]}"#)
            .expect("catalog fixture");
        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
