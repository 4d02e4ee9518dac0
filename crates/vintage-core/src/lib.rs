//! # vintage-core: Pure Business Logic for the Vintage Storefront
//!
//! This crate holds the storefront's business rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Vintage Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (SPA)                               │   │
//! │  │   Product Grid ──► Product Detail ──► Cart Page ──► Header     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON IPC                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Commands                          │   │
//! │  │    list_products, add_to_cart, update_cart_item, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vintage-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐         │   │
//! │  │   │  types   │ │  money   │ │   cart   │ │ catalog  │         │   │
//! │  │   │ Product  │ │  Money   │ │CartState │ │  list    │         │   │
//! │  │   │ TaxRate  │ │  tax     │ │CartAction│ │  search  │         │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart state machine
//! - [`catalog`] - Product listing, filtering, sorting and search
//! - [`summary`] - Order summary shown next to the cart
//! - [`validation`] - Input normalization and catalog validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use vintage_core::{CartAction, CartState, Catalog};
//!
//! let catalog = Catalog::seed().unwrap();
//! let jacket = catalog.get("1").unwrap().clone();
//!
//! let cart = CartState::new().reduce(CartAction::AddItem {
//!     product: jacket,
//!     size: Some("M".to_string()),
//!     quantity: 2,
//! });
//!
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.total().cents(), 2 * 8900);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLine, CartState};
pub use catalog::{Catalog, CategoryFilter, ProductQuery, SortOrder};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use summary::OrderSummary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Size options offered on the product detail page.
pub const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

/// Number of products shown in the home page "Featured Items" grid.
pub const FEATURED_PRODUCT_COUNT: usize = 8;

/// Estimated sales tax shown in the order summary, in basis points (8%).
///
/// This is an estimate for display only. The hosted checkout computes the
/// real tax.
pub const DEFAULT_TAX_ESTIMATE_BPS: u32 = 800;

/// Maximum length of a catalog search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
