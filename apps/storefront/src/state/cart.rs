//! # Cart State
//!
//! Owns the shopper's cart for the lifetime of the process.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple command handlers may access/modify the cart
//! 2. A transition (find line → rebuild lines → recompute total) must run
//!    as one critical section
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Frontend Action          Command                 CartAction            │
//! │  ───────────────          ───────                 ──────────            │
//! │                                                                         │
//! │  Add to cart ────────────► add_to_cart() ───────► AddItem              │
//! │                                                                         │
//! │  +/- quantity ───────────► update_cart_item() ──► UpdateQuantity       │
//! │                                                                         │
//! │  Remove ─────────────────► remove_from_cart() ──► RemoveItem           │
//! │                                                                         │
//! │  Clear ──────────────────► clear_cart() ────────► ClearCart            │
//! │                                                                         │
//! │  View cart / badge ──────► get_cart() ──────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;
use vintage_core::{CartAction, CartState};

/// Process-wide cart store.
///
/// Constructed once at startup and handed to command handlers; tests build
/// as many isolated stores as they like. Cloning shares the same cart.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<CartState>>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        CartStore::default()
    }

    /// Creates a store seeded with an existing cart (e.g. a restored session).
    pub fn with_state(state: CartState) -> Self {
        CartStore {
            cart: Arc::new(Mutex::new(state)),
        }
    }

    /// Applies one transition under the lock and returns the new state.
    pub fn dispatch(&self, action: CartAction) -> CartState {
        trace!(?action, "cart dispatch");
        let mut cart = self.lock();
        cart.apply(action);
        cart.clone()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Returns a copy of the current cart.
    pub fn snapshot(&self) -> CartState {
        self.lock().clone()
    }

    /// Every transition leaves the cart valid, so a lock poisoned by a
    /// panicking reader still guards a consistent cart.
    fn lock(&self) -> MutexGuard<'_, CartState> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
