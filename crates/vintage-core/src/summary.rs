//! # Order Summary
//!
//! The figures shown in the cart page's "Order Summary" box.
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │  Order Summary                         │
//! │  Subtotal                    ₹267.00   │  ◄── CartState.total
//! │  Shipping                       Free   │  ◄── always zero
//! │  Tax                          ₹21.36   │  ◄── subtotal × estimate rate
//! │  ──────────────────────────────────    │
//! │  Total                       ₹288.36   │
//! └────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartState;
use crate::money::Money;
use crate::types::TaxRate;

/// Cart totals for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    /// Computes the summary for `cart` with tax estimated at `tax_rate`.
    pub fn from_cart(cart: &CartState, tax_rate: TaxRate) -> Self {
        let subtotal = cart.total();
        let shipping = Money::zero();
        let tax = subtotal.calculate_tax(tax_rate);

        OrderSummary {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Whether shipping is free (always, for now).
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_summary_of_jacket_cart() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = CartState::new();
        cart.add_item(catalog.get("1").unwrap(), Some("M"), 3);

        let summary = OrderSummary::from_cart(&cart, TaxRate::from_bps(800));
        assert_eq!(summary.line_count, 1);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.subtotal.cents(), 26700);
        assert_eq!(summary.tax.cents(), 2136);
        assert_eq!(summary.total.cents(), 28836);
        assert!(summary.free_shipping());
    }

    #[test]
    fn test_summary_of_empty_cart() {
        let summary = OrderSummary::from_cart(&CartState::new(), TaxRate::default());
        assert_eq!(summary.line_count, 0);
        assert!(summary.subtotal.is_zero());
        assert!(summary.tax.is_zero());
        assert!(summary.total.is_zero());
    }

    #[test]
    fn test_summary_counts_quantities_across_lines() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = CartState::new();
        cart.add_item(catalog.get("1").unwrap(), Some("S"), 1);
        cart.add_item(catalog.get("1").unwrap(), Some("M"), 2);
        cart.add_item(catalog.get("2").unwrap(), None, 4);

        let summary = OrderSummary::from_cart(&cart, TaxRate::zero());
        assert_eq!(summary.line_count, 3);
        assert_eq!(summary.total_quantity, 7);
        assert_eq!(summary.total, summary.subtotal);
    }
}
