//! # Product Commands
//!
//! Commands for browsing, filtering and searching the catalog.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Products Page                                        │
//! │                                                                         │
//! │  Category tabs: [all] [clothing] [accessories] [shoes] [bags]           │
//! │  Sort dropdown: newest │ price-low │ price-high                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {"cmd":"list_products","args":{"category":"bags","sort":"price-low"}}  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                          │
//! │  │  1. Parse category ("all" = no filter)    │                          │
//! │  │  2. Parse sort (unknown key = error)      │                          │
//! │  │  3. Catalog::list (filter, stable sort)   │                          │
//! │  └───────────────────────────────────────────┘                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductDto> rendered as the product grid                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};
use vintage_core::{CategoryFilter, Product, ProductQuery, SortOrder};

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

/// Product DTO (Data Transfer Object) for frontend.
///
/// ## Why DTO?
/// - Decouples the catalog model from the API contract
/// - Carries the price already formatted in the store currency
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    /// Price formatted for display, e.g. "₹89.00".
    pub price_display: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub is_vintage: bool,
    /// RFC 3339 listing timestamp.
    pub created_at: String,
}

impl ProductDto {
    fn new(p: &Product, config: &ConfigState) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            price_cents: p.price_cents,
            price_display: config.format_currency(p.price()),
            image: p.image.clone(),
            category: p.category.clone(),
            description: p.description.clone(),
            is_vintage: p.is_vintage,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

fn to_dtos<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    config: &ConfigState,
) -> Vec<ProductDto> {
    products
        .into_iter()
        .map(|p| ProductDto::new(p, config))
        .collect()
}

/// Lists products for the listing page.
///
/// ## Arguments
/// * `category` - Category tag, or "all" / none for every category
/// * `sort` - "newest" (default), "price-low" or "price-high"
///
/// ## Returns
/// Matching products; ties keep catalog order. An unknown sort key is
/// rejected with `INVALID_ARGUMENTS`.
pub fn list_products(
    catalog: &CatalogState,
    config: &ConfigState,
    category: Option<&str>,
    sort: Option<&str>,
) -> Result<Vec<ProductDto>, ApiError> {
    debug!(?category, ?sort, "list_products command");

    let category = match category {
        Some(c) => c.parse::<CategoryFilter>().unwrap_or_default(),
        None => CategoryFilter::All,
    };
    let sort = match sort {
        Some(s) => s
            .parse::<SortOrder>()
            .map_err(|e| ApiError::invalid_arguments(e.to_string()))?,
        None => SortOrder::default(),
    };

    let products = catalog.inner().list(&ProductQuery { category, sort });
    Ok(to_dtos(products, config))
}

/// The home page's featured products (first eight in the catalog).
pub fn featured_products(catalog: &CatalogState, config: &ConfigState) -> Vec<ProductDto> {
    debug!("featured_products command");
    to_dtos(catalog.inner().featured(), config)
}

/// Gets a single product for the detail page.
///
/// ## Returns
/// The product if found, or a `NOT_FOUND` error
pub fn get_product(
    catalog: &CatalogState,
    config: &ConfigState,
    id: &str,
) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product command");
    let product = catalog.inner().require(id)?;
    Ok(ProductDto::new(product, config))
}

/// Searches product names and descriptions (case-insensitive).
///
/// ## Arguments
/// * `query` - Search term, at most 100 characters; blank returns nothing
pub fn search_products(
    catalog: &CatalogState,
    config: &ConfigState,
    query: &str,
) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    debug!(query = %query, "search_products command");

    let products = catalog.inner().search(query)?;
    let dtos = to_dtos(products, config);

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        query = %query.trim(),
        "search_products complete"
    );

    Ok(dtos)
}

/// Distinct categories in catalog order, for the category tabs.
pub fn list_categories(catalog: &CatalogState) -> Vec<String> {
    debug!("list_categories command");
    catalog
        .inner()
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn fixtures() -> (CatalogState, ConfigState) {
        (CatalogState::seed().unwrap(), ConfigState::default())
    }

    fn ids(dtos: &[ProductDto]) -> Vec<&str> {
        dtos.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_list_all_newest_keeps_catalog_order() {
        let (catalog, config) = fixtures();
        let dtos = list_products(&catalog, &config, None, None).unwrap();
        assert_eq!(dtos.len(), 12);
        assert_eq!(dtos[0].id, "1");
        assert_eq!(dtos[11].id, "12");
    }

    #[test]
    fn test_list_category_and_sort() {
        let (catalog, config) = fixtures();

        let bags = list_products(&catalog, &config, Some("bags"), Some("price-high")).unwrap();
        assert_eq!(ids(&bags), vec!["4", "12"]);

        let all = list_products(&catalog, &config, Some("all"), Some("price-low")).unwrap();
        assert_eq!(all[0].price_cents, 2500);
    }

    #[test]
    fn test_unknown_sort_is_invalid_arguments() {
        let (catalog, config) = fixtures();
        let err = list_products(&catalog, &config, None, Some("popular")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArguments);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let (catalog, config) = fixtures();
        let dtos = list_products(&catalog, &config, Some("furniture"), None).unwrap();
        assert!(dtos.is_empty());
    }

    #[test]
    fn test_featured_is_first_eight() {
        let (catalog, config) = fixtures();
        let dtos = featured_products(&catalog, &config);
        assert_eq!(ids(&dtos), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_get_product() {
        let (catalog, config) = fixtures();
        let dto = get_product(&catalog, &config, "1").unwrap();
        assert_eq!(dto.name, "Vintage Leather Jacket");
        assert_eq!(dto.price_display, "₹89.00");

        let err = get_product(&catalog, &config, "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_search_products() {
        let (catalog, config) = fixtures();
        let dtos = search_products(&catalog, &config, "denim").unwrap();
        assert_eq!(ids(&dtos), vec!["3", "11"]);

        assert!(search_products(&catalog, &config, "   ").unwrap().is_empty());

        let err = search_products(&catalog, &config, &"x".repeat(101)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_list_categories() {
        let (catalog, _) = fixtures();
        assert_eq!(
            list_categories(&catalog),
            vec!["clothing", "accessories", "bags", "shoes"]
        );
    }
}
