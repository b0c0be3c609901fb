//! Card-on-file helpers.

mod card;

pub use card::{mask_card_number, CardBrand};
