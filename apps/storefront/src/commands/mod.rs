//! # Commands Module
//!
//! All commands exposed to the storefront frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Listing, featured, detail, search, categories
//! ├── cart.rs     ◄─── Cart manipulation
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  {"cmd":"add_to_cart","args":{"productId":"1","size":"M"}}              │
//! │         │                                                               │
//! │         │ (one JSON line on stdin)                                      │
//! │         ▼                                                               │
//! │  ipc::invoke ── decodes args, picks the state each command needs        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn add_to_cart(                                                        │
//! │      catalog: &CatalogState,   ◄── product lookup                       │
//! │      cart: &CartStore,         ◄── the one cart                         │
//! │      config: &ConfigState,     ◄── tax estimate                         │
//! │      product_id, size, quantity                                         │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  {"ok":true,"data":{"items":[...],"totals":{...}}}                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod config;
pub mod product;
