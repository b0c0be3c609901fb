//! Search bar dropdown preview.

use anyhow::Result;
use serde::Serialize;
use shopfront_commerce::navigation::Route;
use shopfront_commerce::search::{SearchBar, Suggestion};

use super::SuggestArgs;
use crate::context::Context;

#[derive(Serialize)]
struct SuggestReport<'a> {
    query: &'a str,
    visible: bool,
    suggestions: &'a [Suggestion],
    navigated_to: Option<String>,
}

/// Run the suggest command.
pub fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let mut bar = SearchBar::new(ctx.config.search.clone());
    bar.on_input(args.query.as_str(), catalog.products());

    if ctx.output.is_json() {
        let mut history: Vec<Route> = Vec::new();
        let snapshot = bar.clone();
        if args.submit {
            bar.on_submit(&mut history);
        }
        ctx.output.json(&SuggestReport {
            query: snapshot.query(),
            visible: snapshot.is_visible(),
            suggestions: snapshot.suggestions(),
            navigated_to: history.last().map(Route::path),
        })?;
        return Ok(());
    }

    if bar.shows_suggestions() {
        ctx.output.header(&bar.dropdown_header());
        for s in bar.suggestions() {
            ctx.output.table_row(&[&s.name, &s.price.display()], &[32, 12]);
        }
        ctx.output.info(&bar.dropdown_footer());
    } else if bar.shows_no_results() {
        ctx.output.warn(&bar.no_results_message());
    } else {
        ctx.output.info("Type something to see suggestions");
    }

    if args.submit {
        let mut history: Vec<Route> = Vec::new();
        if bar.on_submit(&mut history) {
            if let Some(route) = history.last() {
                ctx.output.success(&format!("Navigate to {}", route));
            }
        } else {
            ctx.output.warn("Blank query, nothing submitted");
        }
    }

    Ok(())
}
