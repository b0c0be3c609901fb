//! Checkout page controller.

use crate::checkout::{current_step, CheckoutStep, StepIndicator};
use crate::ids::{AddressId, ProductId};
use crate::navigation::Route;
use serde::{Deserialize, Serialize};

/// Which payment widget the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentPanel {
    /// Enter or pick a card to put on file.
    CreateCard,
    /// Card is on file; confirm the charge.
    ChargeCard,
}

/// Signals reported by the address and payment collaborators.
///
/// Holds nothing beyond those signals; the step is recomputed from them on
/// every read. Transitions consume the controller and return the new state.
/// A freshly constructed controller is at
/// [`CheckoutStep::AddressSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutController {
    product_id: ProductId,
    selected_address: Option<AddressId>,
    card_created: bool,
    charge_succeeded: bool,
}

impl CheckoutController {
    /// Start checkout for a product.
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            selected_address: None,
            card_created: false,
            charge_succeeded: false,
        }
    }

    /// The address collaborator reported a selection (or cleared it).
    pub fn with_address(self, address: Option<AddressId>) -> Self {
        self.transition(Self {
            selected_address: address,
            ..self
        })
    }

    /// The payment collaborator reported the card-creation outcome.
    pub fn with_card_created(self, created: bool) -> Self {
        self.transition(Self {
            card_created: created,
            ..self
        })
    }

    /// The payment collaborator reported the charge outcome.
    pub fn with_charge_result(self, succeeded: bool) -> Self {
        self.transition(Self {
            charge_succeeded: succeeded,
            ..self
        })
    }

    /// The active step.
    pub fn step(&self) -> CheckoutStep {
        current_step(self.address_selected(), self.charge_succeeded)
    }

    /// Progress bar for the active step.
    pub fn indicator(&self) -> StepIndicator {
        StepIndicator::new(self.step())
    }

    /// Payment widget to show: card entry until a card exists, then charge.
    pub fn payment_panel(&self) -> PaymentPanel {
        if self.card_created {
            PaymentPanel::ChargeCard
        } else {
            PaymentPanel::CreateCard
        }
    }

    /// Payment controls are enabled only once an address is chosen.
    pub fn can_pay(&self) -> bool {
        self.address_selected()
    }

    pub fn address_selected(&self) -> bool {
        self.selected_address.is_some()
    }

    pub fn selected_address(&self) -> Option<AddressId> {
        self.selected_address
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// This checkout's URL.
    pub fn route(&self) -> Route {
        Route::Checkout(self.product_id)
    }

    fn transition(self, next: Self) -> Self {
        let (from, to) = (self.step(), next.step());
        if from != to {
            tracing::debug!(
                product_id = %self.product_id,
                from = from.as_str(),
                to = to.as_str(),
                "checkout step changed"
            );
        }
        next
    }
}
