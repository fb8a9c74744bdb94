//! Repository trait: abstract interface over catalog storage backends.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::Catalog;
use std::sync::Arc;

/// Storage abstraction for admission catalog datasets.
///
/// A repository holds at most one catalog at a time; storing a new dataset
/// atomically replaces the previous one. All operations are synchronous,
/// matching the single-threaded derivation pipeline built on top.
///
/// Implementations must be safe to share behind an `Arc` across threads.
pub trait CatalogRepository: Send + Sync {
    /// Parse and store a catalog from raw JSON, replacing any previous
    /// dataset. Returns the checksum identifying the stored dataset.
    ///
    /// Storing JSON whose checksum equals the current dataset's is a
    /// no-op that still returns the checksum.
    fn store_catalog(&self, json: &str) -> RepositoryResult<String>;

    /// The current catalog. Fails with `NotFound` when nothing has been
    /// stored yet.
    fn catalog(&self) -> RepositoryResult<Arc<Catalog>>;

    /// Checksum identity of the current dataset.
    fn dataset_version(&self) -> RepositoryResult<String>;

    /// Distinct city names across the current catalog, in first-occurrence
    /// order. Backs the city filter options.
    fn distinct_cities(&self) -> RepositoryResult<Vec<String>>;

    /// Verify the backend is operational.
    fn health_check(&self) -> RepositoryResult<bool>;
}
