//! Catalog storage via the Repository pattern.
//!
//! The engine reads one immutable catalog at a time; this module owns how
//! that catalog gets into memory and how a new dataset replaces it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Session / derivation layer (session.rs, services/)     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  CatalogRepository trait (repository/) - Interface      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │    (in-memory, file- or embedded-loaded)      │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The module includes:
//! - `repository`: trait definition and error types
//! - `repositories::local`: in-memory implementation
//! - `checksum`: dataset version identity
//! - `factory`: repository creation from code, env, or config file
//! - `repo_config`: TOML configuration support

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod checksum;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use checksum::calculate_checksum;
pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    CatalogRepository, ErrorContext, RepositoryError, RepositoryResult,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn CatalogRepository>> = OnceLock::new();

#[cfg(feature = "embedded-data")]
fn create_selected_repository() -> RepositoryResult<Arc<dyn CatalogRepository>> {
    RepositoryFactory::from_env()
}

#[cfg(not(feature = "embedded-data"))]
fn create_selected_repository() -> RepositoryResult<Arc<dyn CatalogRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo =
        create_selected_repository().context("Failed to initialize catalog repository")?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn CatalogRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
