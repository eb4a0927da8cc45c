//! Listing price represented with decimal arithmetic.
//!
//! Prices are always in Brazilian reais. Amounts are kept as [`Decimal`] so
//! comparisons in the filter never suffer from float rounding.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A non-negative listing price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Number of decimal places kept for currency amounts.
    pub const SCALE: u32 = 2;

    /// Currency symbol used when displaying prices.
    pub const SYMBOL: &'static str = "R$";

    /// Create a price, returning `None` for negative amounts.
    ///
    /// The amount is rounded to [`Self::SCALE`] decimal places.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return None;
        }
        Some(Self(amount.round_dp_with_strategy(
            Self::SCALE,
            RoundingStrategy::MidpointAwayFromZero,
        )))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display in pt-BR style (e.g. `R$ 450.000,00`).
    #[must_use]
    pub fn display(&self) -> String {
        let mut amount = self.0;
        amount.rescale(Self::SCALE);
        let text = amount.to_string();
        let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        format!("{} {grouped},{cents}", Self::SYMBOL)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}
