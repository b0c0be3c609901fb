//! Checkout module.
//!
//! Three steps (address, payment, confirmation) derived from the signals
//! the address and payment widgets report.

mod controller;
mod step;
mod summary;

pub use controller::{CheckoutController, PaymentPanel};
pub use step::{current_step, CheckoutStep, StepIndicator, StepStatus};
pub use summary::OrderSummary;
