//! Product types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Stock as reported by the backend: either an availability flag or a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stock {
    /// In stock or not.
    Flag(bool),
    /// Units on hand.
    Count(i64),
}

impl Stock {
    /// Check if the product can be bought.
    pub fn is_available(&self) -> bool {
        match self {
            Stock::Flag(flag) => *flag,
            Stock::Count(count) => *count > 0,
        }
    }
}

impl Default for Stock {
    fn default() -> Self {
        Stock::Flag(false)
    }
}

/// A product in the catalog.
///
/// Field names follow the backend's product JSON. `description` and
/// `category` may be absent or null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Unit price, in the store currency.
    #[serde(with = "price_format")]
    pub price: Money,
    /// Stock level.
    #[serde(default)]
    pub stock: Stock,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Create a new product with no description or category.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: None,
            price,
            stock: Stock::default(),
            image: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Description, or "" when missing.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Category, or "" when missing.
    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.stock.is_available()
    }
}

/// Prices travel as decimal strings (`"1299.00"`) or bare JSON numbers.
mod price_format {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    pub fn serialize<S: Serializer>(price: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&price.display_amount())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let text = match RawPrice::deserialize(deserializer)? {
            RawPrice::Text(s) => s,
            RawPrice::Number(n) => n.to_string(),
        };
        Money::parse_decimal(&text, Currency::default()).map_err(serde::de::Error::custom)
    }
}
