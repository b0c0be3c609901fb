//! Card brand detection and masking for saved cards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card network, inferred from the leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Other,
}

impl CardBrand {
    /// Detect the brand from a card number (spaces and dashes allowed).
    ///
    /// `4` is Visa, `5` Mastercard, `3` Amex; anything else, including an
    /// empty string, is [`CardBrand::Other`].
    pub fn detect(number: &str) -> Self {
        match number.trim_start().chars().next() {
            Some('4') => CardBrand::Visa,
            Some('5') => CardBrand::Mastercard,
            Some('3') => CardBrand::Amex,
            _ => CardBrand::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardBrand::Visa => "visa",
            CardBrand::Mastercard => "mastercard",
            CardBrand::Amex => "amex",
            CardBrand::Other => "default",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Amex => "American Express",
            CardBrand::Other => "Card",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Mask all but the last four digits: `•••• •••• •••• 4242`.
///
/// Non-digit characters are ignored. Numbers with four or fewer digits are
/// shown as-is after the mask groups.
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(char::is_ascii_digit).collect();
    let last4: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("\u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} {last4}")
}
