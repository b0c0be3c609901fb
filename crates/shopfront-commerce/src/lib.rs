//! Storefront domain logic for shopfront.
//!
//! The pieces of the storefront UI that carry real state, expressed as
//! plain types the page layer drives:
//!
//! - **Catalog**: products as the backend serves them
//! - **Search**: live suggestions, the filtered listing, the `search` URL
//!   parameter, and the search bar controller
//! - **Checkout**: the address → payment → confirmation steps
//! - **Payment**: saved-card brand and masking
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//!
//! let catalog = Catalog::from_json(
//!     r#"[{"id": 1, "name": "Red Shoe", "price": "1200.00", "stock": 3},
//!         {"id": 2, "name": "Blue Shoe", "price": "1100.00", "stock": 0}]"#,
//! )?;
//!
//! let mut bar = SearchBar::default();
//! let mut history: Vec<Route> = Vec::new();
//! bar.on_input("red", catalog.products());
//! assert_eq!(bar.suggestions().len(), 1);
//!
//! bar.on_submit(&mut history);
//! assert_eq!(history[0].path(), "/products?search=red");
//!
//! let checkout = CheckoutController::new(ProductId::new(1))
//!     .with_address(Some(AddressId::new(7)));
//! assert_eq!(checkout.step(), CheckoutStep::PaymentEntry);
//! # Ok::<(), CommerceError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod navigation;

pub mod catalog;
pub mod checkout;
pub mod payment;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::SearchBarConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::navigation::{Navigator, Route};

    // Catalog
    pub use crate::catalog::{Catalog, Product, Stock};

    // Search
    pub use crate::search::{
        filter, suggest, HideTimer, ListingView, SearchBar, SearchQuery, Suggestion,
        SUGGESTION_LIMIT,
    };

    // Checkout
    pub use crate::checkout::{
        current_step, CheckoutController, CheckoutStep, OrderSummary, PaymentPanel,
        StepIndicator, StepStatus,
    };

    // Payment
    pub use crate::payment::{mask_card_number, CardBrand};
}
