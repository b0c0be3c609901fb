//! Checkout state for a set of collaborator signals.

use anyhow::Result;
use serde_json::json;
use shopfront_commerce::checkout::{CheckoutController, OrderSummary, PaymentPanel};
use shopfront_commerce::ids::{AddressId, ProductId};

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::step_badge;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let product = catalog.find(ProductId::new(args.product))?;

    let controller = CheckoutController::new(product.id)
        .with_address(args.address.map(AddressId::new))
        .with_card_created(args.card_created)
        .with_charge_result(args.charged);
    let summary = OrderSummary::for_product(product);
    let indicator = controller.indicator();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product_id": controller.product_id(),
            "route": controller.route().path(),
            "step": controller.step(),
            "progress_percent": indicator.progress_percent(),
            "payment_panel": controller.payment_panel(),
            "can_pay": controller.can_pay(),
            "summary": summary,
        }))?;
        return Ok(());
    }

    ctx.output.header(&format!("Checkout: {}", product.name));
    for (step, status) in indicator.steps() {
        println!("  {} {}. {}", step_badge(status), step.number(), step.display_name());
    }
    ctx.output.kv("progress", &format!("{}%", indicator.progress_percent()));

    if let Some(address) = controller.selected_address() {
        ctx.output.kv("address", &address.to_string());
    }
    let panel = match controller.payment_panel() {
        PaymentPanel::CreateCard => "add a card",
        PaymentPanel::ChargeCard => "charge saved card",
    };
    ctx.output.kv("payment", panel);

    for (label, amount) in summary.rows() {
        ctx.output.kv(label, &amount.display());
    }

    if !controller.can_pay() {
        ctx.output.warn("Select an address to enable payment");
    }
    if args.charged && !controller.address_selected() {
        ctx.output
            .warn("Charge reported without an address; staying on address selection");
    }

    Ok(())
}
