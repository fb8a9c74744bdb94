// ============================================================================
// JSON Parsing Functions
// ============================================================================
//
// File-based and string-based catalog parsing. The loader validates the
// basic shape, fills in the dataset checksum when the source does not
// carry one, and warns about duplicate identifiers without rejecting the
// dataset (identifier hygiene is the dataset producer's responsibility).

use crate::models::catalog::Catalog;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

fn validate_input_catalog(catalog_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(catalog_json).context("Invalid catalog JSON")?;
    let has_universities = value
        .as_object()
        .and_then(|obj| obj.get("universities"))
        .is_some();
    if !has_universities {
        anyhow::bail!("Missing required 'universities' field");
    }
    Ok(())
}

/// Parse a catalog from a JSON string.
///
/// Deserializes the catalog using Serde, then fills in the SHA-256
/// checksum of the raw input when the source carries none. The checksum
/// identifies the dataset version for deduplication and memoization.
pub fn parse_catalog_json_str(catalog_json: &str) -> Result<Catalog> {
    validate_input_catalog(catalog_json)?;

    let mut catalog: Catalog = serde_json::from_str(catalog_json)
        .context("Failed to deserialize catalog JSON using Serde")?;

    if catalog.checksum.is_empty() {
        catalog.checksum = crate::db::checksum::calculate_checksum(catalog_json);
    }

    warn_on_duplicate_ids(&catalog);

    log::debug!(
        "Parsed catalog '{}' with {} universities",
        catalog.name,
        catalog.universities.len()
    );

    Ok(catalog)
}

/// Parse a catalog from a JSON file on disk.
pub fn parse_catalog_json_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    parse_catalog_json_str(&content)
}

/// Log duplicate university ids and duplicate department codes within a
/// university. Duplicates break drill-down resolution, which matches by
/// first occurrence.
fn warn_on_duplicate_ids(catalog: &Catalog) {
    let mut seen_universities = HashSet::new();
    for university in &catalog.universities {
        if !seen_universities.insert(&university.id) {
            log::warn!("Duplicate university id '{}' in catalog", university.id);
        }

        let mut seen_codes = HashSet::new();
        for department in &university.departments {
            if !seen_codes.insert(&department.id) {
                log::warn!(
                    "Duplicate department code '{}' in university '{}'",
                    department.id,
                    university.id
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
