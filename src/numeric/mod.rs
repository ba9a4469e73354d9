// ============================================================================
// Numeric Module
// Exact decimal value model for masked currency input
// ============================================================================
//
// This module provides:
// - Amount: exact decimal bound value, parsed leniently from display text
// - RoundingPolicy: how amounts are reduced to two fraction digits
// - Formatting helpers: grouping, unmasking, fraction chopping
// - NumericError: error types for strict parsing
//
// Design principles:
// - No floating-point operations
// - "Not a number" is `None`, not an error
// - Exact equality gates value-change notifications

mod amount;
mod errors;
mod format;

pub use amount::{Amount, RoundingPolicy, MAX_FRACTION_DIGITS};
pub use errors::{NumericError, NumericResult};
pub use format::{
    chop_fraction, format_amount, group_digits, mark_position, unmask, GROUPING_SEPARATOR,
};
