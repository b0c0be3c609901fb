//! Resolve a storefront URL to the page it shows.

use anyhow::{Context as _, Result};
use serde_json::json;
use shopfront_commerce::checkout::{CheckoutController, OrderSummary};
use shopfront_commerce::navigation::Route;
use shopfront_commerce::search::SearchQuery;

use super::OpenArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the open command.
pub fn run(args: OpenArgs, ctx: &Context) -> Result<()> {
    let path = strip_origin(&args.url);
    let route = Route::parse(path).with_context(|| format!("Cannot open {}", args.url))?;
    let catalog = ctx.load_catalog()?;

    ctx.output.debug(&format!("Resolved {} to {:?}", args.url, route));

    match &route {
        Route::Products { search } => {
            let query = SearchQuery {
                term: search.clone(),
            };
            let listing = catalog.listing(query);

            if ctx.output.is_json() {
                ctx.output.json(&json!({
                    "route": route,
                    "path": route.path(),
                    "count": listing.len(),
                    "header": listing.header(),
                }))?;
                return Ok(());
            }

            ctx.output.header(&format!("Products ({})", route.path()));
            match listing.header().or_else(|| listing.empty_message()) {
                Some(line) => ctx.output.info(&line),
                None => ctx.output.info(&format!("{} products", listing.len())),
            }
        }
        Route::ProductDetail(id) => {
            let product = catalog.find(*id)?;

            if ctx.output.is_json() {
                ctx.output.json(&json!({ "route": route, "product": product }))?;
                return Ok(());
            }

            ctx.output.header(&product.name);
            ctx.output.kv("id", &product.id.to_string());
            ctx.output.kv("price", &product.price.display());
            ctx.output.kv("stock", &stock_badge(product.is_available()));
            if let Some(category) = &product.category {
                ctx.output.kv("category", category);
            }
            if let Some(description) = &product.description {
                ctx.output.kv("description", description);
            }
            ctx.output
                .list_item(&format!("Buy at {}", Route::Checkout(product.id)));
        }
        Route::Checkout(id) => {
            let product = catalog.find(*id)?;
            let controller = CheckoutController::new(product.id);
            let summary = OrderSummary::for_product(product);

            if ctx.output.is_json() {
                ctx.output.json(&json!({
                    "route": route,
                    "step": controller.step(),
                    "summary": summary,
                }))?;
                return Ok(());
            }

            ctx.output.header(&format!("Checkout: {}", product.name));
            ctx.output.kv("step", controller.step().display_name());
            for (label, amount) in summary.rows() {
                ctx.output.kv(label, &amount.display());
            }
        }
    }

    Ok(())
}

/// Drop a leading `scheme://host` so full URLs and bare paths both work.
fn strip_origin(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
        None => url,
    }
}
