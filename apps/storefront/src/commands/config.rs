//! # Config Commands
//!
//! Commands for retrieving application configuration.

use serde::Serialize;
use tracing::debug;
use vintage_core::{FEATURED_PRODUCT_COUNT, SIZES};

use crate::state::ConfigState;

/// Configuration plus the fixed storefront options the UI renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    #[serde(flatten)]
    pub config: ConfigState,

    /// Size options on the product page.
    pub sizes: Vec<&'static str>,

    /// Number of products on the home page.
    pub featured_count: usize,
}

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (store name in the header)
/// - Currency formatting
/// - Size picker on the product page
pub fn get_config(config: &ConfigState) -> ConfigResponse {
    debug!("get_config command");
    ConfigResponse {
        config: config.clone(),
        sizes: SIZES.to_vec(),
        featured_count: FEATURED_PRODUCT_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_shape() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();
        assert_eq!(json["currencyCode"], "INR");
        assert_eq!(json["taxEstimateBps"], 800);
        assert_eq!(json["sizes"], serde_json::json!(["XS", "S", "M", "L", "XL"]));
        assert_eq!(json["featuredCount"], 8);
        assert!(json.get("catalogPath").is_none());
    }
}
