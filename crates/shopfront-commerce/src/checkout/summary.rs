//! Order total shown beside the payment panel.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for a single-product checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    /// Summary for one unit of `product`. Shipping and tax are free.
    pub fn for_product(product: &Product) -> Self {
        let subtotal = product.price;
        let shipping = Money::zero(subtotal.currency);
        let tax = Money::zero(subtotal.currency);
        let total = subtotal
            .try_add(&shipping)
            .and_then(|m| m.try_add(&tax))
            .unwrap_or(subtotal);
        Self {
            subtotal,
            shipping,
            tax,
            total,
        }
    }

    /// Display rows as `(label, amount)`, total last.
    pub fn rows(&self) -> [(&'static str, Money); 4] {
        [
            ("Subtotal", self.subtotal),
            ("Shipping", self.shipping),
            ("Tax", self.tax),
            ("Total", self.total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_summary_for_product() {
        let product = Product::new(1, "Laptop", Money::new(8_500_000, Currency::BDT));
        let summary = OrderSummary::for_product(&product);

        assert_eq!(summary.total, summary.subtotal);
        assert!(summary.shipping.is_zero());
        assert!(summary.tax.is_zero());
        assert_eq!(summary.rows()[3].1.display(), "\u{09f3}85000.00");
    }
}
