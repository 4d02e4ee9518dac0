//! # Validation Module
//!
//! Input normalization for the cart and validation for catalog data.
//!
//! ## Two Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Policies                                │
//! │                                                                         │
//! │  Cart input (quantity, size)                                           │
//! │  └── NORMALIZE, never reject                                           │
//! │      quantity <= 0 on add  → 1                                         │
//! │      size ""              → no size                                    │
//! │                                                                         │
//! │  Catalog data (id, name, price, category, search query)                │
//! │  └── VALIDATE and reject with ValidationError                          │
//! │      a bad catalog file should fail loudly at startup                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_SEARCH_QUERY_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Cart Normalizers
// =============================================================================

/// Normalizes an AddItem quantity: anything below 1 becomes 1.
///
/// ```rust
/// use vintage_core::validation::normalize_quantity;
///
/// assert_eq!(normalize_quantity(3), 3);
/// assert_eq!(normalize_quantity(0), 1);
/// assert_eq!(normalize_quantity(-7), 1);
/// ```
#[inline]
pub fn normalize_quantity(qty: i64) -> i64 {
    qty.max(1)
}

/// Normalizes a size discriminator. The empty string means "no size".
///
/// ```rust
/// use vintage_core::validation::normalize_size;
///
/// assert_eq!(normalize_size(Some("M")), Some("M".to_string()));
/// assert_eq!(normalize_size(Some("")), None);
/// assert_eq!(normalize_size(None), None);
/// ```
pub fn normalize_size(size: Option<&str>) -> Option<String> {
    match size {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product id: non-blank, at most 64 characters, no whitespace.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name: non-blank, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a price in minor units. Zero is allowed.
///
/// ```rust
/// use vintage_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(8900).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a category tag: lowercase ASCII letters and hyphens.
///
/// "all" is reserved for the listing filter.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category == "all" {
        return Err(ValidationError::InvalidFormat {
            field: "category".to_string(),
            reason: "'all' is reserved".to_string(),
        });
    }

    if !category
        .chars()
        .all(|c| c.is_ascii_lowercase() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "category".to_string(),
            reason: "must contain only lowercase letters and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query and returns it trimmed.
///
/// Empty is allowed (matches nothing). Maximum 100 characters.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_quantity() {
        assert_eq!(normalize_quantity(1), 1);
        assert_eq!(normalize_quantity(42), 42);
        assert_eq!(normalize_quantity(0), 1);
        assert_eq!(normalize_quantity(i64::MIN), 1);
    }

    #[test]
    fn test_normalize_size_keeps_non_empty_verbatim() {
        assert_eq!(normalize_size(Some("XL")), Some("XL".to_string()));
        assert_eq!(normalize_size(Some(" ")), Some(" ".to_string()));
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("1").is_ok());
        assert!(validate_product_id("jacket-80s").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("has space").is_err());
        assert!(validate_product_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Vintage Leather Jacket").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("clothing").is_ok());
        assert!(validate_category("home-decor").is_ok());

        assert!(validate_category("").is_err());
        assert!(validate_category("all").is_err());
        assert!(validate_category("Clothing").is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  denim ").unwrap(), "denim");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }
}
