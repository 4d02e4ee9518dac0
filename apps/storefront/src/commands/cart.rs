//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│  Cart    │                         │
//! │  │  Cart    │     │          │     │  Page    │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart       update_cart_item                   │
//! │       │                             remove_from_cart                   │
//! │       │                                  │                              │
//! │       └────────────── clear_cart ◄───────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the whole cart so the frontend never keeps its own
//! copy of the totals.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vintage_core::{CartAction, CartLine, CartState, OrderSummary};

use crate::error::ApiError;
use crate::state::{CartStore, CatalogState, ConfigState};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: OrderSummary,
}

impl CartResponse {
    fn new(cart: &CartState, config: &ConfigState) -> Self {
        CartResponse {
            items: cart.lines().to_vec(),
            totals: OrderSummary::from_cart(cart, config.tax_rate()),
        }
    }
}

/// Gets the current cart contents.
///
/// The header badge shows `totals.totalQuantity`.
pub fn get_cart(cart: &CartStore, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::new(c, config))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Same product and size already in cart: quantity increases
/// - Otherwise: appended as a new line
/// - Price is "frozen" at time of adding
/// - Missing or non-positive quantity adds one
///
/// ## Arguments
/// * `product_id` - Catalog product id
/// * `size` - Selected size; empty means no size
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartStore,
    config: &ConfigState,
    product_id: &str,
    size: Option<String>,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, ?size, quantity = %quantity, "add_to_cart command");

    let product = catalog.inner().require(product_id)?.clone();
    let state = cart.dispatch(CartAction::AddItem {
        product,
        size,
        quantity,
    });

    Ok(CartResponse::new(&state, config))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0 or less: removes the line
/// - No matching line: cart unchanged
pub fn update_cart_item(
    cart: &CartStore,
    config: &ConfigState,
    product_id: &str,
    size: Option<String>,
    quantity: i64,
) -> CartResponse {
    debug!(product_id = %product_id, ?size, quantity = %quantity, "update_cart_item command");

    let state = cart.dispatch(CartAction::UpdateQuantity {
        id: product_id.to_string(),
        size,
        quantity,
    });
    CartResponse::new(&state, config)
}

/// Removes a cart line. Removing a missing line is a no-op.
pub fn remove_from_cart(
    cart: &CartStore,
    config: &ConfigState,
    product_id: &str,
    size: Option<String>,
) -> CartResponse {
    debug!(product_id = %product_id, ?size, "remove_from_cart command");

    let state = cart.dispatch(CartAction::RemoveItem {
        id: product_id.to_string(),
        size,
    });
    CartResponse::new(&state, config)
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartStore, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    let state = cart.dispatch(CartAction::ClearCart);
    CartResponse::new(&state, config)
}
