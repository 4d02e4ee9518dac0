//! # State Module
//!
//! Manages application state for the storefront host.
//!
//! ## Why Multiple State Types?
//! Each command declares only the state it reads or writes:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppState (lib.rs)                          │   │
//! │  │  built once in run(), passed by reference to the IPC loop       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartStore   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Catalog     │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │  (seed or    │  │   CartState  │  │  currency        │              │
//! │  │   file)      │  │  >>          │  │  tax estimate    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: immutable after load                                  │
//! │  • CartStore: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartStore;
pub use catalog::{CatalogLoadError, CatalogState};
pub use config::{ConfigError, ConfigState};
