// ============================================================================
// Exact Currency Amount
// Decimal value bound to a masked input, never binary floating point
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fraction digits a displayed amount carries.
pub const MAX_FRACTION_DIGITS: u32 = 2;

/// Largest scale `rust_decimal` can represent.
const MAX_DECIMAL_SCALE: u32 = 28;

/// How an amount is reduced to [`MAX_FRACTION_DIGITS`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingPolicy {
    /// Round half away from zero (1.005 -> 1.01, -1.005 -> -1.01)
    #[default]
    HalfAwayFromZero,
    /// Drop extra digits (1.009 -> 1.00)
    Truncate,
}

impl RoundingPolicy {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingPolicy::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingPolicy::Truncate => RoundingStrategy::ToZero,
        }
    }
}

/// Exact decimal amount.
///
/// Wraps a [`Decimal`] so equality is exact and numeric: `1.5` and `1.50`
/// are the same amount, `0` and "absent" (`None`) never are.
///
/// # Example
/// ```
/// use currency_mask::numeric::Amount;
///
/// let a = Amount::parse("$ 1,234.5", '.').unwrap();
/// assert_eq!(a, Amount::from_cents(123_450));
/// assert!(Amount::parse(".", '.').is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wrap an existing decimal.
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create from a whole number of cents.
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, MAX_FRACTION_DIGITS))
    }

    /// Create from an integer amount.
    #[inline]
    pub fn from_integer(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    #[inline]
    pub const fn as_decimal(&self) -> &Decimal {
        &self.0
    }

    #[inline]
    pub const fn into_decimal(self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Number of fraction digits carried, trailing zeros included.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    /// Lenient parse used by the mask.
    ///
    /// Drops every character except ASCII digits, `-` and `decimal_mark`,
    /// then requires what is left to be a plain decimal: an optional `-` at
    /// position 0, at most one decimal mark, at least one digit. Anything
    /// else is absent. Never panics.
    pub fn parse(raw: &str, decimal_mark: char) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|&c| c.is_ascii_digit() || c == '-' || c == decimal_mark)
            .collect();

        match Self::parse_strict(&cleaned, decimal_mark) {
            Ok(amount) => Some(amount),
            Err(NumericError::InvalidInput) => None,
            Err(err) => {
                tracing::warn!(input = %cleaned, %err, "numeric text not representable");
                None
            },
        }
    }

    /// Strict parse: `s` must be exactly `-?digits[mark digits]`.
    pub fn parse_strict(s: &str, decimal_mark: char) -> NumericResult<Self> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match body.split_once(decimal_mark) {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (body, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(int_str) || !all_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let scale = frac_str.len() as u32;
        if scale > MAX_DECIMAL_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        let mut mantissa: i128 = 0;
        for digit in int_str.bytes().chain(frac_str.bytes()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit - b'0')))
                .ok_or(NumericError::Overflow)?;
        }
        if negative {
            mantissa = -mantissa;
        }

        Decimal::try_from_i128_with_scale(mantissa, scale)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Reduce to [`MAX_FRACTION_DIGITS`] under `policy`.
    #[inline]
    pub fn rounded(self, policy: RoundingPolicy) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(MAX_FRACTION_DIGITS, policy.strategy()),
        )
    }

    /// Amount in whole cents after rounding under `policy`.
    pub fn to_cents(self, policy: RoundingPolicy) -> i128 {
        let rounded = self.rounded(policy).0;
        let scale = rounded.scale();
        assert!(
            scale <= MAX_FRACTION_DIGITS,
            "rounded amount still carries {scale} fraction digits"
        );
        rounded.mantissa() * 10_i128.pow(MAX_FRACTION_DIGITS - scale)
    }

    /// Exact equality over possibly-absent amounts.
    ///
    /// Two absent values compare equal (nothing changed); absent never equals
    /// a number, zero included.
    #[inline]
    pub fn equals(a: Option<&Amount>, b: Option<&Amount>) -> bool {
        a == b
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl std::str::FromStr for Amount {
    type Err = NumericError;

    /// Parse a plain decimal string using `.` as the decimal mark.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "1234.50" -> 1234.50
    /// - "-0.001" -> -0.001
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s.trim(), '.')
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
