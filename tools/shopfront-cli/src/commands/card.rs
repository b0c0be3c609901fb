//! Card brand detection and masking.

use anyhow::Result;
use serde_json::json;
use shopfront_commerce::payment::{mask_card_number, CardBrand};

use super::CardArgs;
use crate::context::Context;

/// Run the card command.
pub fn run(args: CardArgs, ctx: &Context) -> Result<()> {
    let brand = CardBrand::detect(&args.number);
    let masked = mask_card_number(&args.number);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "brand": brand,
            "masked": masked,
        }))?;
        return Ok(());
    }

    ctx.output.kv("brand", brand.display_name());
    ctx.output.kv("icon", brand.as_str());
    ctx.output.kv("number", &masked);

    Ok(())
}
