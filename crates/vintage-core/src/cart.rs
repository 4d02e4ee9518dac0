//! # Cart Module
//!
//! The shopping cart state machine.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transitions                                     │
//! │                                                                         │
//! │  UI Action                CartAction              Line Change           │
//! │  ─────────                ──────────              ───────────           │
//! │                                                                         │
//! │  "Add to cart" ─────────► AddItem ──────────────► qty += n | push      │
//! │                                                                         │
//! │  +/- buttons ───────────► UpdateQuantity ───────► qty = n | remove     │
//! │                                                                         │
//! │  Remove link ───────────► RemoveItem ───────────► retain(!matches)     │
//! │                                                                         │
//! │  Order placed ──────────► ClearCart ────────────► lines.clear()        │
//! │                                                                         │
//! │  After EVERY transition: total = Σ price × quantity (rebuilt)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `(product id, selected size)`
//! - Every line has `quantity >= 1`
//! - `total` always equals the sum of line totals
//! - Lines keep insertion order
//!
//! No transition can fail. Bad quantities are normalized and unknown lines
//! are ignored.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;
use crate::validation::{normalize_quantity, normalize_size};

// =============================================================================
// Cart Line
// =============================================================================

/// One cart entry: a product/size combination and its quantity.
///
/// The product is a frozen snapshot taken when the line was created, so the
/// cart keeps showing the price the shopper saw even if the catalog changes.
/// On the wire the product fields are flattened into the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product snapshot at time of adding.
    #[serde(flatten)]
    pub product: Product,

    /// Size discriminator. `None` means "no size" and omits the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub selected_size: Option<String>,

    /// Quantity in cart (>= 1 while the line exists).
    pub quantity: i64,
}

impl CartLine {
    /// Product id of this line.
    #[inline]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// Checks whether this line is addressed by `(id, size)`.
    ///
    /// `size` must already be normalized.
    fn matches(&self, id: &str, size: Option<&str>) -> bool {
        self.product.id == id && self.selected_size.as_deref() == size
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// The four cart transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `quantity` of a product/size. Quantities below 1 count as 1.
    AddItem {
        product: Product,
        size: Option<String>,
        quantity: i64,
    },

    /// Remove the line for `(id, size)`, if any.
    RemoveItem { id: String, size: Option<String> },

    /// Set the quantity of `(id, size)`. Zero or below removes the line.
    UpdateQuantity {
        id: String,
        size: Option<String>,
        quantity: i64,
    },

    /// Empty the cart.
    ClearCart,
}

// =============================================================================
// Cart State
// =============================================================================

/// The shopping cart: ordered lines plus the derived total.
///
/// Fields are private so the total can never drift from the lines. Serialized
/// as `{"items": [...], "total": ...}`. Deserializing replays the stored items
/// through [`CartState::add_item`] and ignores any stored total, so a restored
/// cart satisfies the same invariants as a live one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CartSnapshot")]
pub struct CartState {
    #[serde(rename = "items")]
    lines: Vec<CartLine>,
    total: Money,
}

/// Wire shape accepted when restoring a cart.
#[derive(Deserialize)]
struct CartSnapshot {
    #[serde(default)]
    items: Vec<CartLine>,
}

impl From<CartSnapshot> for CartState {
    fn from(snapshot: CartSnapshot) -> Self {
        CartState::from_lines(snapshot.items)
    }
}

impl CartState {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Builds a cart by adding each line in order.
    ///
    /// Duplicate `(id, size)` pairs merge additively, and quantities below 1
    /// are normalized.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = CartState::new();
        for line in lines {
            cart.add_item(&line.product, line.selected_size.as_deref(), line.quantity);
        }
        cart
    }

    /// Applies one transition and returns the resulting state.
    ///
    /// ```rust
    /// use vintage_core::{CartAction, CartState, Catalog};
    ///
    /// let catalog = Catalog::seed().unwrap();
    /// let scarf = catalog.get("2").unwrap().clone();
    ///
    /// let cart = CartState::new()
    ///     .reduce(CartAction::AddItem { product: scarf, size: None, quantity: 2 })
    ///     .reduce(CartAction::UpdateQuantity { id: "2".into(), size: None, quantity: 0 });
    ///
    /// assert!(cart.is_empty());
    /// assert!(cart.total().is_zero());
    /// ```
    pub fn reduce(mut self, action: CartAction) -> Self {
        self.apply(action);
        self
    }

    /// Applies one transition in place.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem {
                product,
                size,
                quantity,
            } => self.add_item(&product, size.as_deref(), quantity),
            CartAction::RemoveItem { id, size } => self.remove_item(&id, size.as_deref()),
            CartAction::UpdateQuantity { id, size, quantity } => {
                self.update_quantity(&id, size.as_deref(), quantity)
            }
            CartAction::ClearCart => self.clear(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// - Matching `(id, size)` line: quantity becomes `old + quantity`
    /// - Otherwise: a new line is appended
    pub fn add_item(&mut self, product: &Product, size: Option<&str>, quantity: i64) {
        let quantity = normalize_quantity(quantity);
        let size = normalize_size(size);

        match self
            .lines
            .iter_mut()
            .find(|line| line.matches(&product.id, size.as_deref()))
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product: product.clone(),
                selected_size: size,
                quantity,
            }),
        }

        self.recompute_total();
    }

    /// Removes the line addressed by `(id, size)`. Unknown lines are a no-op.
    pub fn remove_item(&mut self, id: &str, size: Option<&str>) {
        let size = normalize_size(size);
        self.lines.retain(|line| !line.matches(id, size.as_deref()));
        self.recompute_total();
    }

    /// Sets the quantity of the line addressed by `(id, size)`.
    ///
    /// - `quantity <= 0`: same as [`CartState::remove_item`]
    /// - Unknown line: no-op
    pub fn update_quantity(&mut self, id: &str, size: Option<&str>, quantity: i64) {
        if quantity <= 0 {
            return self.remove_item(id, size);
        }

        let size = normalize_size(size);
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(id, size.as_deref()))
        {
            line.quantity = quantity;
        }

        self.recompute_total();
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recompute_total();
    }

    /// Rebuilds the total from the lines. Never patched incrementally.
    fn recompute_total(&mut self) {
        self.total = self.lines.iter().map(CartLine::line_total).sum();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Σ price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Looks up the line addressed by `(id, size)`.
    pub fn line(&self, id: &str, size: Option<&str>) -> Option<&CartLine> {
        let size = normalize_size(size);
        self.lines
            .iter()
            .find(|line| line.matches(id, size.as_deref()))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across lines (the header badge count).
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
