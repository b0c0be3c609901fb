//! Listing filter: substring match over name, description, and category.

use crate::catalog::Product;
use std::borrow::Cow;

/// Decode a URL-encoded query value.
///
/// `+` becomes a space and `%XX` escapes are decoded. Input that does not
/// decode to valid UTF-8 is returned unchanged.
pub fn decode_query(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['%', '+']) {
        return Cow::Borrowed(raw);
    }

    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(e) => {
            tracing::debug!(raw, error = %e, "query did not decode, matching literally");
            Cow::Borrowed(raw)
        }
    }
}

/// Filter `products` by a raw, possibly URL-encoded query.
///
/// An empty query returns every product. Order is preserved.
pub fn filter<'a>(products: &'a [Product], raw_query: &str) -> Vec<&'a Product> {
    filter_decoded(products, &decode_query(raw_query))
}

/// Filter `products` by an already decoded query.
pub fn filter_decoded<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }

    let out: Vec<&Product> = products
        .iter()
        .filter(|p| matches_query(p, &needle))
        .collect();

    tracing::debug!(query = %needle, total = products.len(), matched = out.len(), "filtered listing");
    out
}

/// Check a product against a lower-cased needle.
pub fn matches_query(product: &Product, needle: &str) -> bool {
    [
        product.name.as_str(),
        product.description_or_empty(),
        product.category_or_empty(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog() -> Vec<Product> {
        let price = Money::new(1000, Currency::BDT);
        vec![
            Product::new(1, "Red Shoe", price).with_category("Footwear"),
            Product::new(2, "Blue Shoe", price).with_description("Deep red laces"),
            Product::new(3, "Red Hat", price),
            Product::new(4, "Laptop", price)
                .with_description("100% off today")
                .with_category("Electronics"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let products = catalog();
        assert_eq!(ids(&filter(&products, "")), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter(&products, "   ")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_matches_name_description_and_category() {
        let products = catalog();
        assert_eq!(ids(&filter(&products, "red")), vec![1, 2, 3]);
        assert_eq!(ids(&filter(&products, "FOOTWEAR")), vec![1]);
        assert_eq!(ids(&filter(&products, "electronics")), vec![4]);
    }

    #[test]
    fn test_name_only_scenario() {
        let price = Money::new(1, Currency::BDT);
        let products = vec![
            Product::new(1, "Red Shoe", price),
            Product::new(2, "Blue Shoe", price),
            Product::new(3, "Red Hat", price),
        ];
        let out = filter(&products, "red");
        let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Red Shoe", "Red Hat"]);
    }

    #[test]
    fn test_missing_fields_do_not_match_or_panic() {
        let products = vec![Product::new(9, "Plain", Money::default())];
        assert!(filter(&products, "footwear").is_empty());
    }

    #[test]
    fn test_encoded_query_is_decoded() {
        let products = catalog();
        assert_eq!(ids(&filter(&products, "100%25+off")), vec![4]);
        assert_eq!(ids(&filter(&products, "red%20hat")), vec![3]);
    }

    #[test]
    fn test_decode_query() {
        assert_eq!(decode_query("100%25+off"), "100% off");
        assert_eq!(decode_query("plain"), "plain");
        assert_eq!(decode_query("caf%C3%A9"), "caf\u{e9}");
    }

    #[test]
    fn test_malformed_escape_is_kept_literally() {
        assert_eq!(decode_query("50%zz"), "50%zz");
        assert_eq!(decode_query("%E0%A6"), "%E0%A6");

        let products = vec![Product::new(1, "Deal %E0%A6", Money::default())];
        assert_eq!(ids(&filter(&products, "%E0%A6")), vec![1]);
    }

    #[test]
    fn test_no_match_and_empty_catalog() {
        let products = catalog();
        assert!(filter(&products, "zebra").is_empty());
        assert!(filter(&[], "red").is_empty());
        assert!(filter(&[], "").is_empty());
    }
}
