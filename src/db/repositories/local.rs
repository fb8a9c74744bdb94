//! In-memory repository implementation.
//!
//! Holds one parsed catalog behind a read-write lock. This is the only
//! backend the engine needs at runtime: the dataset is small, immutable
//! once loaded, and swapped wholesale when a new one is stored.

use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

use crate::db::checksum::calculate_checksum;
use crate::db::repository::{CatalogRepository, RepositoryError, RepositoryResult};
use crate::models::{parse_catalog_json_str, Catalog};

struct Stored {
    catalog: Arc<Catalog>,
    /// Checksum of the raw JSON the catalog was stored from. This is the
    /// dataset version; the catalog's own checksum field equals it unless
    /// the source declared one explicitly.
    checksum: String,
}

/// In-memory catalog repository.
pub struct LocalRepository {
    inner: RwLock<Option<Stored>>,
}

impl LocalRepository {
    /// Create an empty repository with no catalog loaded.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Create a repository pre-loaded from a JSON string.
    pub fn from_json_str(json: &str) -> RepositoryResult<Self> {
        let repo = Self::new();
        repo.store_catalog(json)?;
        Ok(repo)
    }

    /// Create a repository pre-loaded from a JSON file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read catalog file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&json)
    }

    /// Create a repository pre-loaded with the dataset compiled into the
    /// binary.
    #[cfg(feature = "embedded-data")]
    pub fn with_embedded_data() -> RepositoryResult<Self> {
        const EMBEDDED: &str = include_str!("../../../data/universities.json");
        Self::from_json_str(EMBEDDED)
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for LocalRepository {
    fn store_catalog(&self, json: &str) -> RepositoryResult<String> {
        let checksum = calculate_checksum(json);

        {
            let guard = self.inner.read();
            if let Some(stored) = guard.as_ref() {
                if stored.checksum == checksum {
                    log::debug!("Catalog {} already stored, skipping", checksum);
                    return Ok(checksum);
                }
            }
        }

        let catalog = parse_catalog_json_str(json)
            .map_err(|e| RepositoryError::validation(format!("{:#}", e)))?;

        log::info!(
            "Catalog '{}' loaded: {} universities (version {})",
            catalog.name,
            catalog.universities.len(),
            checksum
        );
        *self.inner.write() = Some(Stored {
            catalog: Arc::new(catalog),
            checksum: checksum.clone(),
        });
        Ok(checksum)
    }

    fn catalog(&self) -> RepositoryResult<Arc<Catalog>> {
        self.inner
            .read()
            .as_ref()
            .map(|s| Arc::clone(&s.catalog))
            .ok_or_else(|| {
                RepositoryError::not_found("no catalog loaded").with_operation("fetch_catalog")
            })
    }

    fn dataset_version(&self) -> RepositoryResult<String> {
        self.inner
            .read()
            .as_ref()
            .map(|s| s.checksum.clone())
            .ok_or_else(|| {
                RepositoryError::not_found("no catalog loaded").with_operation("dataset_version")
            })
    }

    fn distinct_cities(&self) -> RepositoryResult<Vec<String>> {
        Ok(self.catalog()?.distinct_cities())
    }

    fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
