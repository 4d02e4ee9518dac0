//! # Vintage Storefront Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vintage Storefront                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         Frontend                                 │  │
//! │  │  • Home (featured)      • Products (filter/sort)                 │  │
//! │  │  • Product detail       • Cart page / header badge               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │  JSON lines (stdin/stdout)            │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Host (this crate)                        │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Builds the runtime, reports exit status           │  │
//! │  │  lib.rs ─────► Logging, config, catalog, serve loop              │  │
//! │  │  commands/ ──► add_to_cart, list_products, get_config, ...       │  │
//! │  │  state/ ─────► CatalogState, CartStore, ConfigState              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │              vintage-core (cart reducer, catalog)                │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;
use std::time::Duration;

use tracing::error;

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("storefront: failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(vintage_storefront::run());

    // A pending stdin read sits on a blocking thread that cannot be cancelled.
    runtime.shutdown_timeout(Duration::from_millis(250));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Storefront exited with error");
            ExitCode::FAILURE
        }
    }
}
