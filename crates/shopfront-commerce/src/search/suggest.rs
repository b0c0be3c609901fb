//! Autocomplete suggestions for the search bar.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of suggestions shown under the search bar.
pub const SUGGESTION_LIMIT: usize = 8;

/// Suggest products whose name contains `query`, case-insensitively.
///
/// Returns at most [`SUGGESTION_LIMIT`] products in catalog order, skipping
/// any product whose name was already emitted. A blank query yields nothing.
pub fn suggest<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    suggest_with_limit(products, query, SUGGESTION_LIMIT)
}

/// [`suggest`] with a tighter cap.
///
/// `limit` can only lower the cap; values above [`SUGGESTION_LIMIT`] are
/// clamped. Iteration stops as soon as the cap is reached.
pub fn suggest_with_limit<'a>(
    products: &'a [Product],
    query: &str,
    limit: usize,
) -> Vec<&'a Product> {
    let limit = limit.min(SUGGESTION_LIMIT);
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(limit.min(products.len()));

    for product in products {
        if out.len() == limit {
            break;
        }
        if product.name.to_lowercase().contains(&needle) && seen.insert(product.name.as_str()) {
            out.push(product);
        }
    }

    tracing::trace!(query = %needle, matches = out.len(), "computed suggestions");
    out
}

/// A suggestion row as rendered in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Product to navigate to when clicked.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
}

impl From<&Product> for Suggestion {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: u64, name: &str) -> Product {
        Product::new(id, name, Money::new(1000, Currency::BDT))
    }

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_suggest_matches_in_source_order() {
        let products = vec![
            product(1, "Red Shoe"),
            product(2, "Blue Shoe"),
            product(3, "Red Hat"),
        ];
        assert_eq!(names(&suggest(&products, "red")), vec!["Red Shoe", "Red Hat"]);
    }

    #[test]
    fn test_suggest_is_case_insensitive_and_trims() {
        let products = vec![product(1, "MacBook Air"), product(2, "iPad")];
        assert_eq!(names(&suggest(&products, "  MACBOOK ")), vec!["MacBook Air"]);
    }

    #[test]
    fn test_suggest_empty_query() {
        let products = vec![product(1, "Red Shoe")];
        assert!(suggest(&products, "").is_empty());
        assert!(suggest(&products, "   ").is_empty());
    }

    #[test]
    fn test_suggest_dedupes_by_name() {
        let products = vec![
            product(1, "Red Shoe"),
            product(2, "Red Shoe"),
            product(3, "Red Hat"),
        ];
        let out = suggest(&products, "red");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, ProductId::new(1));
        assert_eq!(out[1].id, ProductId::new(3));
    }

    #[test]
    fn test_suggest_caps_at_limit() {
        let products: Vec<Product> = (1..=20).map(|i| product(i, &format!("Laptop {i}"))).collect();
        let out = suggest(&products, "laptop");
        assert_eq!(out.len(), SUGGESTION_LIMIT);
        assert_eq!(out[0].name, "Laptop 1");
        assert_eq!(out[7].name, "Laptop 8");
    }

    #[test]
    fn test_suggest_limit_cannot_exceed_cap() {
        let products: Vec<Product> = (1..=20).map(|i| product(i, &format!("Laptop {i}"))).collect();
        assert_eq!(suggest_with_limit(&products, "laptop", 20).len(), SUGGESTION_LIMIT);
        assert_eq!(suggest_with_limit(&products, "laptop", 3).len(), 3);
    }

    #[test]
    fn test_suggest_duplicates_do_not_consume_cap() {
        let mut products: Vec<Product> = (1..=10).map(|i| product(i, "Phone")).collect();
        products.push(product(11, "Phone Case"));
        assert_eq!(names(&suggest_with_limit(&products, "phone", 2)), vec!["Phone", "Phone Case"]);
    }

    #[test]
    fn test_suggest_empty_catalog() {
        assert!(suggest(&[], "anything").is_empty());
    }

    #[test]
    fn test_suggestion_from_product() {
        let p = product(4, "Mug");
        let s = Suggestion::from(&p);
        assert_eq!(s.id, ProductId::new(4));
        assert_eq!(s.price.display(), "\u{09f3}10.00");
    }
}
