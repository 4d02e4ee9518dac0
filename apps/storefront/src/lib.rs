//! # Vintage Storefront Library
//!
//! Host process for the vintage clothing storefront. The frontend talks to
//! it over line-delimited JSON on stdin/stdout; all business rules live in
//! `vintage-core`.
//!
//! ## Module Organization
//! ```text
//! vintage_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── ipc.rs          ◄─── JSON request/reply loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Product catalog (seed or file)
//! │   ├── cart.rs     ◄─── Cart store
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Listing/search commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── config.rs   ◄─── Configuration command
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod ipc;
pub mod state;

use std::error::Error;

use tokio::io::BufReader;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::ApiError;
use state::{CartStore, CatalogLoadError, CatalogState, ConfigState};

/// Everything a command can touch, built once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: CartStore,
    pub config: ConfigState,
}

impl AppState {
    /// Assembles state from parts (tests inject their own).
    pub fn new(catalog: CatalogState, cart: CartStore, config: ConfigState) -> Self {
        AppState {
            catalog,
            cart,
            config,
        }
    }

    /// Reads the environment, then loads the catalog it names.
    ///
    /// Startup failures use the same `ApiError` shape as command failures
    /// (`CONFIG_ERROR` for bad settings or an unreadable catalog).
    pub fn from_env() -> Result<Self, ApiError> {
        let config = ConfigState::from_env()?;
        Ok(AppState::from_config(config)?)
    }

    /// Loads the catalog named by `config` and starts with an empty cart.
    pub fn from_config(config: ConfigState) -> Result<Self, CatalogLoadError> {
        let catalog = CatalogState::load(&config)?;
        Ok(AppState::new(catalog, CartStore::new(), config))
    }
}

/// Runs the storefront host.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,vintage=debug; override with RUST_LOG               │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • VINTAGE_* environment variables over defaults                     │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • VINTAGE_CATALOG_PATH or the embedded seed                         │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line, one reply per stdout line        │
/// │     • Until end of input or Ctrl-C                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();

    info!("Starting Vintage Storefront");

    let state = AppState::from_env().map_err(|e| {
        error!(code = ?e.code, message = %e.message, "Startup failed");
        e
    })?;

    info!(
        store = %state.config.store_name,
        currency = %state.config.currency_code,
        "State initialized"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        served = ipc::serve(&state, stdin, stdout) => served?,
        _ = shutdown_signal() => {},
    }

    info!("Storefront shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout is the IPC channel.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vintage=trace` - Show trace for vintage crates only
/// - Default: INFO, DEBUG for vintage crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,vintage=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves on Ctrl-C (or SIGTERM on unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_from_config_uses_seed() {
        let state = AppState::from_config(ConfigState::default()).unwrap();
        assert_eq!(state.catalog.inner().len(), 12);
        assert!(state.cart.snapshot().is_empty());
    }

    #[test]
    fn test_from_config_reports_missing_catalog() {
        let config = ConfigState {
            catalog_path: Some("/nonexistent/vintage.json".into()),
            ..ConfigState::default()
        };
        let err = ApiError::from(AppState::from_config(config).unwrap_err());
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("/nonexistent/vintage.json"));
    }

    #[test]
    fn test_from_config_reports_duplicate_catalog_ids() {
        let path = std::env::temp_dir().join(format!("vintage-dup-{}.json", std::process::id()));
        let product = r#"{"id":"7","name":"Belt","priceCents":900,"image":"",
            "category":"accessories","createdAt":"2024-01-01T00:00:00Z"}"#;
        std::fs::write(&path, format!("[{},{}]", product, product)).unwrap();

        let config = ConfigState {
            catalog_path: Some(path.clone()),
            ..ConfigState::default()
        };
        let result = AppState::from_config(config);
        std::fs::remove_file(&path).unwrap();

        let err = ApiError::from(result.unwrap_err());
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains('7'));
    }
}
