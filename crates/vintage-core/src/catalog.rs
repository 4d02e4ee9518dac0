//! # Catalog Module
//!
//! Read-only product reference data and the listing queries run over it.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Listing                                      │
//! │                                                                         │
//! │  Products page: category chips + sort dropdown                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductQuery { category: all | <tag>, sort: newest | price-low | ... }│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter by category ──► stable sort ──► Vec<&Product>                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Whether products come from the embedded seed or a catalog file supplied
//! by the host makes no difference to the cart: it only ever sees `Product`
//! values.

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;
use crate::validation::{
    validate_category, validate_price_cents, validate_product_id, validate_product_name,
    validate_search_query,
};
use crate::FEATURED_PRODUCT_COUNT;

/// The seed catalog, embedded at compile time.
const SEED_CATALOG: &str = include_str!("../data/catalog.json");

// =============================================================================
// Query Types
// =============================================================================

/// Category filter for the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// A single category tag.
    Only(String),
}

impl CategoryFilter {
    fn accepts(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.in_category(category),
        }
    }
}

/// `"all"` (any case) and the empty string select every category.
impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.to_ascii_lowercase()))
        }
    }
}

/// Sort order for the listing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SortOrder {
    /// Most recently listed first.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    /// Cheapest first.
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Most expensive first.
    #[serde(rename = "price-high")]
    PriceHighToLow,
}

impl SortOrder {
    /// The key used by the sort dropdown.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceLowToHigh => "price-low",
            SortOrder::PriceHighToLow => "price-high",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "newest" => Ok(SortOrder::Newest),
            "price-low" => Ok(SortOrder::PriceLowToHigh),
            "price-high" => Ok(SortOrder::PriceHighToLow),
            other => Err(ValidationError::InvalidFormat {
                field: "sort".to_string(),
                reason: format!("unknown sort order '{}'", other),
            }),
        }
    }
}

/// A listing request: which category, in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

// =============================================================================
// Catalog
// =============================================================================

/// An immutable, validated product list with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads the embedded twelve-product seed catalog.
    pub fn seed() -> CoreResult<Self> {
        Catalog::from_json(SEED_CATALOG)
    }

    /// Parses and validates a JSON array of products.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        Catalog::from_products(products)
    }

    /// Validates each product and rejects duplicate ids.
    ///
    /// Catalog order is preserved; it is the tie-break for every sort.
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product_id(&product.id)?;
            validate_product_name(&product.name)?;
            validate_price_cents(product.price_cents)?;
            validate_category(&product.category)?;

            if !seen.insert(product.id.as_str()) {
                return Err(CoreError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Catalog { products })
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// The first few products, shown on the home page.
    pub fn featured(&self) -> &[Product] {
        let n = self.products.len().min(FEATURED_PRODUCT_COUNT);
        &self.products[..n]
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Filters and sorts products for the listing page.
    pub fn list(&self, query: &ProductQuery) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.category.accepts(p))
            .collect();

        // sort_by is stable, so equal keys keep catalog order
        match query.sort {
            SortOrder::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::PriceLowToHigh => products.sort_by_key(|p| p.price_cents),
            SortOrder::PriceHighToLow => products.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        }

        products
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> CoreResult<Vec<&Product>> {
        let query = validate_search_query(query)?.to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .collect())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Catalog {
        Catalog::seed().expect("seed catalog is valid")
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_seed_catalog_loads() {
        let catalog = seed();
        assert_eq!(catalog.len(), 12);

        let jacket = catalog.get("1").unwrap();
        assert_eq!(jacket.name, "Vintage Leather Jacket");
        assert_eq!(jacket.price_cents, 8900);
        assert!(jacket.is_vintage);
    }

    #[test]
    fn test_featured_is_first_eight() {
        let catalog = seed();
        let featured: Vec<&str> = catalog.featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(
            seed().categories(),
            vec!["clothing", "accessories", "bags", "shoes"]
        );
    }

    #[test]
    fn test_list_filters_by_category() {
        let catalog = seed();
        let query = ProductQuery {
            category: "bags".parse().unwrap(),
            sort: SortOrder::Newest,
        };
        assert_eq!(ids(&catalog.list(&query)), vec!["4", "12"]);

        let all = catalog.list(&ProductQuery::default());
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn test_list_unknown_category_is_empty() {
        let query = ProductQuery {
            category: CategoryFilter::Only("furniture".to_string()),
            sort: SortOrder::Newest,
        };
        assert!(seed().list(&query).is_empty());
    }

    #[test]
    fn test_newest_matches_catalog_order_for_seed() {
        let catalog = seed();
        let newest = catalog.list(&ProductQuery::default());
        let expected: Vec<String> = catalog.all().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids(&newest), expected);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let catalog = seed();

        let low = catalog.list(&ProductQuery {
            category: CategoryFilter::All,
            sort: SortOrder::PriceLowToHigh,
        });
        assert_eq!(low.first().map(|p| p.price_cents), Some(2500));
        // "3" and "12" both cost 45; catalog order breaks the tie
        let pos = |id: &str| low.iter().position(|p| p.id == id).unwrap();
        assert!(pos("3") < pos("12"));

        let high = catalog.list(&ProductQuery {
            category: CategoryFilter::All,
            sort: SortOrder::PriceHighToLow,
        });
        assert_eq!(high.first().map(|p| p.id.as_str()), Some("6"));
        assert!(high.windows(2).all(|w| w[0].price_cents >= w[1].price_cents));
    }

    #[test]
    fn test_search() {
        let catalog = seed();

        let hits = catalog.search("DENIM").unwrap();
        assert_eq!(ids(&hits), vec!["3", "11"]);

        assert!(catalog.search("   ").unwrap().is_empty());
        assert!(catalog.search(&"x".repeat(200)).is_err());
    }

    #[test]
    fn test_parse_query_keys() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Shoes".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("shoes".to_string())
        );
        assert_eq!("price-high".parse::<SortOrder>().unwrap(), SortOrder::PriceHighToLow);
        assert!("cheapest".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::PriceLowToHigh.to_string(), "price-low");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut products = seed().all().to_vec();
        products.push(products[0].clone());

        let err = Catalog::from_products(products).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateProduct(id) if id == "1"));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut products = seed().all().to_vec();
        products[1].price_cents = -1;
        assert!(matches!(
            Catalog::from_products(products),
            Err(CoreError::Validation(_))
        ));

        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CoreError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_require_reports_missing_id() {
        let catalog = seed();
        assert!(catalog.require("1").is_ok());
        assert!(matches!(
            catalog.require("99"),
            Err(CoreError::ProductNotFound(id)) if id == "99"
        ));
    }
}
