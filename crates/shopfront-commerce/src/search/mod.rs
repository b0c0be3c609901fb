//! Search module.
//!
//! Substring search over an in-memory catalog: live suggestions for the
//! search bar and the filtered product listing.

mod bar;
mod filter;
mod listing;
mod query;
mod suggest;

pub use bar::{HideTimer, SearchBar};
pub use filter::{decode_query, filter, filter_decoded, matches_query};
pub use listing::{pluralize, ListingView};
pub use query::{SearchQuery, SEARCH_PARAM};
pub use suggest::{suggest, suggest_with_limit, Suggestion, SUGGESTION_LIMIT};
