//! # Catalog State
//!
//! Read-only product catalog shared by every command.
//!
//! ## Loading
//! ```text
//! VINTAGE_CATALOG_PATH set? ──yes──► read file ──► Catalog::from_json
//!          │
//!          no
//!          ▼
//!   Catalog::seed()  (embedded twelve-product seed)
//! ```
//!
//! The catalog never changes after startup, so no mutex needed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use vintage_core::{Catalog, CoreError};

use super::ConfigState;

/// Wrapper around the immutable product catalog.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    /// Wraps an already-built catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Serves the embedded seed catalog.
    pub fn seed() -> Result<Self, CatalogLoadError> {
        Ok(CatalogState::new(Catalog::seed()?))
    }

    /// Loads a catalog from a JSON product file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogLoadError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(CatalogState::new(Catalog::from_json(&json)?))
    }

    /// Loads the catalog the configuration points at.
    pub fn load(config: &ConfigState) -> Result<Self, CatalogLoadError> {
        let state = match &config.catalog_path {
            Some(path) => Self::from_path(path)?,
            None => Self::seed()?,
        };

        info!(
            products = state.catalog.len(),
            source = ?config.catalog_path,
            "Catalog loaded"
        );
        Ok(state)
    }

    /// Gets a reference to the inner catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}

/// Errors raised while loading the catalog at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    #[test]
    fn test_load_defaults_to_seed() {
        let state = CatalogState::load(&ConfigState::default()).unwrap();
        assert_eq!(state.inner().len(), 12);
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join(format!("vintage-catalog-{}.json", process::id()));
        fs::write(
            &path,
            r#"[{"id":"a1","name":"Wool Scarf","priceCents":1999,"image":"",
                "category":"accessories","createdAt":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();

        let config = ConfigState {
            catalog_path: Some(path.clone()),
            ..ConfigState::default()
        };
        let state = CatalogState::load(&config).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(state.inner().len(), 1);
        assert_eq!(state.inner().get("a1").unwrap().price_cents, 1999);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CatalogState::from_path(Path::new("/nonexistent/vintage/catalog.json"))
            .unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }
}
