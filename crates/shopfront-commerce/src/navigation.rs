//! Storefront routes and the navigation seam.
//!
//! ```text
//! /products                    -> Route::Products { search: None }
//! /products?search=red%20shoe  -> Route::Products { search: Some("red shoe") }
//! /product/42/                 -> Route::ProductDetail(42)
//! /product/42/checkout/        -> Route::Checkout(42)
//! ```

use crate::ids::ProductId;
use crate::search::SearchQuery;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A view the storefront can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Product listing, optionally filtered.
    Products {
        /// Decoded search text.
        search: Option<String>,
    },
    /// Product detail page.
    ProductDetail(ProductId),
    /// Single-product checkout.
    Checkout(ProductId),
}

impl Route {
    /// Listing route for a search term. Blank terms list everything.
    pub fn search(term: impl Into<String>) -> Self {
        Route::Products {
            search: SearchQuery::new(term).term,
        }
    }

    /// Render the route as a path with query string.
    pub fn path(&self) -> String {
        match self {
            Route::Products { search } => {
                let query = SearchQuery {
                    term: search.clone(),
                };
                match query.to_query_string() {
                    Some(qs) => format!("/products?{qs}"),
                    None => "/products".to_string(),
                }
            }
            Route::ProductDetail(id) => format!("/product/{id}/"),
            Route::Checkout(id) => format!("/product/{id}/checkout/"),
        }
    }

    /// Parse a path (with optional query string) back into a route.
    pub fn parse(url: &str) -> Result<Self, CommerceError> {
        let (path, qs) = url.split_once('?').unwrap_or((url, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["products"] => Ok(Route::Products {
                search: SearchQuery::from_query_string(qs).term,
            }),
            ["product", id] => Ok(Route::ProductDetail(id.parse()?)),
            ["product", id, "checkout"] => Ok(Route::Checkout(id.parse()?)),
            _ => Err(CommerceError::UnknownRoute(url.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Performs view transitions on behalf of the storefront controllers.
pub trait Navigator {
    /// Navigate to `route`.
    fn navigate(&mut self, route: Route);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, route: Route) {
        (**self).navigate(route);
    }
}

/// Records routes in order; handy for hosts that apply them later.
impl Navigator for Vec<Route> {
    fn navigate(&mut self, route: Route) {
        self.push(route);
    }
}
