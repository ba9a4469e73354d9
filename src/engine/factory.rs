// ============================================================================
// Mask Engine Factory
// Creates mask engines with validated configuration
// ============================================================================

use crate::domain::MaskConfig;
use crate::engine::MaskEngine;
use crate::interfaces::{NoOpValueAccessor, TextField, ValueAccessor};
use crate::numeric::{Amount, RoundingPolicy};
use std::rc::Rc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a mask engine from configuration
///
/// # Arguments
/// * `config` - Mask configuration
/// * `field` - Host text field the engine will own
/// * `accessor` - Receiver for bound-value notifications
///
/// # Returns
/// * `Result<MaskEngine<F>, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use currency_mask::prelude::*;
/// use std::rc::Rc;
///
/// let engine = create_from_config(
///     MaskConfig::inr(),
///     BufferField::new(),
///     Rc::new(NoOpValueAccessor),
/// )
/// .unwrap();
/// assert_eq!(engine.config().currency_symbol, "₹");
/// ```
pub fn create_from_config<F: TextField>(
    config: MaskConfig,
    field: F,
    accessor: Rc<dyn ValueAccessor>,
) -> Result<MaskEngine<F>, String> {
    config.validate()?;
    Ok(MaskEngine::new(config, field, accessor))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating mask engines with fluent API
///
/// # Example
/// ```
/// use currency_mask::prelude::*;
/// use currency_mask::numeric::Amount;
/// use std::rc::Rc;
///
/// let engine = MaskEngineBuilder::new()
///     .currency_symbol("€")
///     .initial_value(Some(Amount::from_cents(123_450)))
///     .build(BufferField::new())
///     .unwrap();
/// assert_eq!(engine.field().text(), "€ 1,234.50");
/// ```
pub struct MaskEngineBuilder {
    config: MaskConfig,
    accessor: Rc<dyn ValueAccessor>,
    initial_value: Option<Amount>,
    disabled: bool,
}

impl MaskEngineBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::from_config(MaskConfig::default())
    }

    /// Start from an existing configuration
    pub fn from_config(config: MaskConfig) -> Self {
        Self {
            config,
            accessor: Rc::new(NoOpValueAccessor),
            initial_value: None,
            disabled: false,
        }
    }

    /// Set the currency prefix
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.currency_symbol = symbol.into();
        self
    }

    /// Set the decimal mark
    pub fn decimal_mark(mut self, mark: char) -> Self {
        self.config.decimal_mark = mark;
        self
    }

    /// Round half away from zero when formatting (default)
    pub fn half_away_from_zero(mut self) -> Self {
        self.config.rounding = RoundingPolicy::HalfAwayFromZero;
        self
    }

    /// Truncate to cents when formatting
    pub fn truncating(mut self) -> Self {
        self.config.rounding = RoundingPolicy::Truncate;
        self
    }

    /// Set the bound-value notification target
    pub fn value_accessor(mut self, accessor: Rc<dyn ValueAccessor>) -> Self {
        self.accessor = accessor;
        self
    }

    /// Value written to the field right after construction
    pub fn initial_value(mut self, value: Option<Amount>) -> Self {
        self.initial_value = value;
        self
    }

    /// Start disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Build the engine around `field`
    pub fn build<F: TextField>(self, field: F) -> Result<MaskEngine<F>, String> {
        let mut engine = create_from_config(self.config, field, self.accessor)?;
        if self.initial_value.is_some() {
            engine.write_value(self.initial_value);
        }
        if self.disabled {
            engine.set_disabled(true);
        }
        Ok(engine)
    }
}

impl Default for MaskEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
