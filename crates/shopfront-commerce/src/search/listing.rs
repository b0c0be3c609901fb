//! Product listing page state.

use crate::catalog::Product;
use crate::search::{filter_decoded, SearchQuery};

/// `"1 product"` / `"3 products"`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// What the listing page shows for a given URL query.
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    /// The parsed `search` parameter.
    pub query: SearchQuery,
    /// Matching products in catalog order.
    pub products: Vec<&'a Product>,
}

impl<'a> ListingView<'a> {
    /// Build the listing for a query string such as `?search=red`.
    pub fn from_query_string(products: &'a [Product], qs: &str) -> Self {
        Self::new(products, SearchQuery::from_query_string(qs))
    }

    /// Build the listing for an already parsed query.
    pub fn new(products: &'a [Product], query: SearchQuery) -> Self {
        let products = filter_decoded(products, query.text());
        Self { query, products }
    }

    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Results banner, shown only while searching.
    pub fn header(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        Some(format!(
            "{} found for: \"{}\"",
            pluralize(self.len(), "product"),
            self.query.text()
        ))
    }

    /// Empty-state message, `None` when there is something to show.
    pub fn empty_message(&self) -> Option<String> {
        if !self.is_empty() {
            return None;
        }
        Some(if self.query.is_empty() {
            "No products to show".to_string()
        } else {
            format!("No products found for \"{}\"", self.query.text())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Red Shoe", Money::default()),
            Product::new(2, "Blue Shoe", Money::default()),
            Product::new(3, "Red Hat", Money::default()),
        ]
    }

    #[test]
    fn test_listing_without_search() {
        let products = catalog();
        let view = ListingView::from_query_string(&products, "");
        assert_eq!(view.len(), 3);
        assert_eq!(view.header(), None);
        assert_eq!(view.empty_message(), None);
    }

    #[test]
    fn test_listing_with_search() {
        let products = catalog();
        let view = ListingView::from_query_string(&products, "?search=red");
        assert_eq!(view.len(), 2);
        assert_eq!(view.header().as_deref(), Some("2 products found for: \"red\""));
    }

    #[test]
    fn test_listing_single_result_header() {
        let products = catalog();
        let view = ListingView::from_query_string(&products, "?search=blue");
        assert_eq!(view.header().as_deref(), Some("1 product found for: \"blue\""));
    }

    #[test]
    fn test_listing_no_results() {
        let products = catalog();
        let view = ListingView::from_query_string(&products, "?search=zebra");
        assert!(view.is_empty());
        assert_eq!(view.empty_message().as_deref(), Some("No products found for \"zebra\""));
    }

    #[test]
    fn test_listing_empty_catalog() {
        let view = ListingView::from_query_string(&[], "");
        assert_eq!(view.empty_message().as_deref(), Some("No products to show"));
    }

    #[test]
    fn test_listing_does_not_double_decode() {
        let products = vec![Product::new(1, "100%25 cotton", Money::default())];
        let view = ListingView::from_query_string(&products, "?search=100%2525");
        assert_eq!(view.query.text(), "100%25");
        assert_eq!(view.len(), 1);
    }
}
