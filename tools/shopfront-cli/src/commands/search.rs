//! Product listing for a search.

use anyhow::Result;
use serde::Serialize;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::search::{SearchQuery, SEARCH_PARAM};

use super::SearchArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct ListingReport<'a> {
    search: Option<&'a str>,
    header: Option<String>,
    empty_message: Option<String>,
    products: &'a [&'a Product],
}

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let query = match (args.query, args.raw) {
        (Some(raw), true) => SearchQuery::from_query_string(&format!("{SEARCH_PARAM}={raw}")),
        (Some(term), false) => SearchQuery::new(term),
        (None, _) => SearchQuery::default(),
    };
    tracing::debug!(search = ?query.term, "listing products");

    let listing = catalog.listing(query);

    if ctx.output.is_json() {
        ctx.output.json(&ListingReport {
            search: listing.query.term.as_deref(),
            header: listing.header(),
            empty_message: listing.empty_message(),
            products: &listing.products,
        })?;
        return Ok(());
    }

    if let Some(header) = listing.header() {
        ctx.output.header(&header);
    }
    if let Some(message) = listing.empty_message() {
        ctx.output.warn(&message);
        return Ok(());
    }

    for product in &listing.products {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.name,
                product.category_or_empty(),
                &product.price.display(),
                &stock_badge(product.is_available()),
            ],
            &[5, 28, 16, 12, 12],
        );
    }

    Ok(())
}
