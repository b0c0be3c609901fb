//! Product catalog module.
//!
//! Holds the product snapshot fetched from the backend. The catalog is
//! read-only once loaded; search borrows from it.

mod product;

pub use product::{Product, Stock};

use crate::ids::ProductId;
use crate::search::{self, ListingView, SearchQuery};
use crate::CommerceError;

/// An ordered, immutable product snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap an already fetched product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse the backend's product list JSON (an array of products).
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        tracing::debug!(count = products.len(), "loaded catalog");
        Ok(Self::new(products))
    }

    /// All products in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn find(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Autocomplete suggestions for `query`.
    pub fn suggest(&self, query: &str) -> Vec<&Product> {
        search::suggest(&self.products, query)
    }

    /// Products matching a raw, possibly URL-encoded query.
    pub fn filter(&self, raw_query: &str) -> Vec<&Product> {
        search::filter(&self.products, raw_query)
    }

    /// Listing page for a parsed query.
    pub fn listing(&self, query: SearchQuery) -> ListingView<'_> {
        ListingView::new(&self.products, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"[
        {"id": 1, "name": "Red Shoe", "price": "1200.00", "stock": 4, "category": "Footwear"},
        {"id": 2, "name": "Blue Shoe", "price": "1100.00", "stock": true},
        {"id": 3, "name": "Red Hat", "price": "350.50", "stock": false, "description": null}
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(JSON).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[2].price.amount_cents, 35_050);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(matches!(
            Catalog::from_json(r#"{"id": 1}"#),
            Err(CommerceError::SerializationError(_))
        ));
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::from_json(JSON).unwrap();
        assert_eq!(catalog.find(ProductId::new(2)).unwrap().name, "Blue Shoe");
        assert!(matches!(
            catalog.find(ProductId::new(99)),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_search_through_catalog() {
        let catalog = Catalog::from_json(JSON).unwrap();
        assert_eq!(catalog.suggest("red").len(), 2);
        assert_eq!(catalog.filter("footwear").len(), 1);
        assert_eq!(catalog.listing(SearchQuery::new("shoe")).len(), 2);
        assert!(Catalog::default().filter("").is_empty());
    }
}
