//! Checkout steps and the progress indicator.

use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Choose a billing address.
    AddressSelection,
    /// Add or pick a card.
    PaymentEntry,
    /// Charge succeeded.
    Confirmation,
}

impl CheckoutStep {
    /// All steps in order.
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::AddressSelection,
        CheckoutStep::PaymentEntry,
        CheckoutStep::Confirmation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::AddressSelection => "address",
            CheckoutStep::PaymentEntry => "payment",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::AddressSelection => "Address",
            CheckoutStep::PaymentEntry => "Payment",
            CheckoutStep::Confirmation => "Confirm",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::AddressSelection => 1,
            CheckoutStep::PaymentEntry => 2,
            CheckoutStep::Confirmation => 3,
        }
    }
}

/// Derive the active step from the two completion signals.
///
/// The address gates everything: without one the charge flag is ignored.
pub fn current_step(address_selected: bool, charge_succeeded: bool) -> CheckoutStep {
    match (address_selected, charge_succeeded) {
        (false, _) => CheckoutStep::AddressSelection,
        (true, false) => CheckoutStep::PaymentEntry,
        (true, true) => CheckoutStep::Confirmation,
    }
}

/// How a step is drawn in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepStatus {
    /// Already passed.
    Complete,
    /// The step being worked on.
    Active,
    /// Not reached yet.
    Upcoming,
}

/// Progress bar for the three checkout steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepIndicator {
    /// The active step.
    pub current: CheckoutStep,
}

impl StepIndicator {
    pub fn new(current: CheckoutStep) -> Self {
        Self { current }
    }

    /// Status of one step relative to the active one.
    pub fn status(&self, step: CheckoutStep) -> StepStatus {
        match step.cmp(&self.current) {
            std::cmp::Ordering::Less => StepStatus::Complete,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Every step paired with its status, in order.
    pub fn steps(&self) -> impl Iterator<Item = (CheckoutStep, StepStatus)> + '_ {
        CheckoutStep::ALL.into_iter().map(move |step| (step, self.status(step)))
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        let total = CheckoutStep::ALL.len() as u32;
        (u32::from(self.current.number()) * 100 / total) as u8
    }
}
