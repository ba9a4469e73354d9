// ============================================================================
// Mask Configuration
// Per-field options for currency masking
// ============================================================================

use crate::numeric::{
    self, Amount, RoundingPolicy, GROUPING_SEPARATOR, MAX_FRACTION_DIGITS,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default currency prefix
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Default decimal mark
pub const DEFAULT_DECIMAL_MARK: char = '.';

/// Configuration for one masked field.
///
/// Fixed for the lifetime of a [`MaskEngine`](crate::engine::MaskEngine).
/// Grouping separator and fraction digits are not configurable; they are
/// exposed as accessors for hosts that render hints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaskConfig {
    /// Prefix shown before the amount (e.g., "$", "₹")
    pub currency_symbol: String,

    /// Separator between integer and fraction digits
    pub decimal_mark: char,

    /// How formatted amounts are reduced to two fraction digits
    pub rounding: RoundingPolicy,
}

impl MaskConfig {
    /// Create a configuration with the given currency symbol
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            ..Self::default()
        }
    }

    /// US dollars: "$ 1,234.50"
    pub fn usd() -> Self {
        Self::new("$")
    }

    /// Indian rupees, truncating instead of rounding: "₹ 1,234.50"
    pub fn inr() -> Self {
        Self::new("₹").with_rounding(RoundingPolicy::Truncate)
    }

    /// Builder method: Set currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Builder method: Set decimal mark
    pub fn with_decimal_mark(mut self, mark: char) -> Self {
        self.decimal_mark = mark;
        self
    }

    /// Builder method: Set rounding policy
    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    #[inline]
    pub fn grouping_separator(&self) -> char {
        GROUPING_SEPARATOR
    }

    #[inline]
    pub fn max_fraction_digits(&self) -> u32 {
        MAX_FRACTION_DIGITS
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let mark = self.decimal_mark;

        if mark.is_ascii_digit() || mark == '-' {
            return Err(format!("Decimal mark '{}' collides with numeric input", mark));
        }

        if mark == GROUPING_SEPARATOR {
            return Err("Decimal mark cannot equal the grouping separator".to_string());
        }

        if mark.is_control() || mark.is_whitespace() {
            return Err("Decimal mark must be a visible character".to_string());
        }

        if self
            .currency_symbol
            .chars()
            .any(|c| c.is_ascii_digit() || c == '-' || c == mark)
        {
            return Err(format!(
                "Currency symbol '{}' contains numeric characters",
                self.currency_symbol
            ));
        }

        Ok(())
    }

    // ========================================================================
    // Value model entry points
    // ========================================================================

    /// Parse display or raw text into an amount, `None` if not a number.
    #[inline]
    pub fn parse(&self, text: &str) -> Option<Amount> {
        Amount::parse(text, self.decimal_mark)
    }

    /// Render an amount the way a masked field shows it.
    #[inline]
    pub fn format(&self, amount: &Amount) -> String {
        numeric::format_amount(
            amount,
            &self.currency_symbol,
            self.decimal_mark,
            self.rounding,
        )
    }

    /// Strip symbol and grouping, keeping digits, sign and decimal mark.
    #[inline]
    pub fn unmask(&self, text: &str) -> String {
        numeric::unmask(text, self.decimal_mark)
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimal_mark: DEFAULT_DECIMAL_MARK,
            rounding: RoundingPolicy::default(),
        }
    }
}
