//! Repository factory.
//!
//! Centralizes creation of repository instances from code, environment
//! variables, or a TOML configuration file.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{CatalogRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory repository, optionally pre-loaded from a file
    Local,
    /// In-memory repository pre-loaded with the compiled-in dataset
    Embedded,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "embedded" => Ok(Self::Embedded),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment.
    ///
    /// Reads `CATALOG_REPOSITORY`. Without it, defaults to Local when
    /// `CATALOG_DATA_PATH` points at a dataset file, otherwise Embedded.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("CATALOG_REPOSITORY") {
            return val.parse().unwrap_or(Self::Embedded);
        }

        if std::env::var("CATALOG_DATA_PATH").is_ok() {
            Self::Local
        } else {
            Self::Embedded
        }
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// `data_path` pre-loads the Local backend when given; the Embedded
    /// backend ignores it.
    pub fn create(
        repo_type: RepositoryType,
        data_path: Option<&str>,
    ) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        match repo_type {
            RepositoryType::Local => match data_path {
                Some(path) => Self::create_from_file(path),
                None => Ok(Self::create_local()),
            },
            RepositoryType::Embedded => {
                #[cfg(feature = "embedded-data")]
                {
                    Self::create_embedded()
                }
                #[cfg(not(feature = "embedded-data"))]
                {
                    Err(RepositoryError::configuration(
                        "Embedded dataset feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create an empty in-memory repository.
    pub fn create_local() -> Arc<dyn CatalogRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory repository pre-loaded from a JSON file.
    pub fn create_from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let repo = LocalRepository::from_json_file(path)?;
        Ok(Arc::new(repo))
    }

    /// Create a repository pre-loaded with the compiled-in dataset.
    #[cfg(feature = "embedded-data")]
    pub fn create_embedded() -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let repo = LocalRepository::with_embedded_data()?;
        Ok(Arc::new(repo))
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `CATALOG_REPOSITORY` and `CATALOG_DATA_PATH`.
    pub fn from_env() -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let repo_type = RepositoryType::from_env();
        let data_path = std::env::var("CATALOG_DATA_PATH").ok();
        Self::create(repo_type, data_path.as_deref())
    }

    /// Create repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    ///
    /// Searches for `catalog.toml` in standard locations.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config)
    }

    fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        Self::create(repo_type, config.data_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!(
            RepositoryType::from_str("local").unwrap(),
            RepositoryType::Local
        );
        assert_eq!(
            RepositoryType::from_str("Embedded").unwrap(),
            RepositoryType::Embedded
        );
        assert!(RepositoryType::from_str("postgres").is_err());
    }

    #[test]
    fn test_create_local_repository() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().unwrap());
    }

    #[cfg(feature = "embedded-data")]
    #[test]
    fn test_create_embedded_repository() {
        let repo = RepositoryFactory::create_embedded().unwrap();
        assert!(!repo.catalog().unwrap().universities.is_empty());
    }
}
