//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  product (snap) │   │  bps (u32)      │       │
//! │  │  name           │   │  selected_size  │   │  800 = 8%       │       │
//! │  │  price_cents    │   │  quantity       │   └─────────────────┘       │
//! │  │  category       │   └─────────────────┘                              │
//! │  └─────────────────┘          (cart.rs)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are reference data owned by the catalog. The cart only ever
//! holds frozen copies of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_ESTIMATE_BPS)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown on cards and the detail page.
    pub name: String,

    /// Unit price in minor units.
    pub price_cents: i64,

    /// Image URL.
    pub image: String,

    /// Category tag ("clothing", "accessories", ...).
    pub category: String,

    /// Long description for the detail page.
    #[serde(default)]
    pub description: String,

    /// Whether the item is a genuine vintage piece.
    #[serde(default)]
    pub is_vintage: bool,

    /// When the product was listed. Drives "newest first" ordering.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the product belongs to `category` (case-insensitive).
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(8.0).bps(), 800);
        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
        assert!((TaxRate::from_bps(825).percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_default_is_estimate() {
        assert_eq!(TaxRate::default().bps(), 800);
    }

    #[test]
    fn test_product_deserializes_camel_case() {
        let json = r#"{
            "id": "2",
            "name": "Vintage Silk Scarf",
            "priceCents": 2500,
            "image": "scarf.jpg",
            "category": "accessories",
            "isVintage": true,
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price().cents(), 2500);
        assert!(product.is_vintage);
        assert!(product.description.is_empty());
        assert!(product.in_category("Accessories"));
    }
}
