// ============================================================================
// Currency Mask Library
// Currency input masking with exact decimal bound values
// ============================================================================

//! # Currency Mask
//!
//! A framework-agnostic currency input mask for text fields.
//!
//! ## Features
//!
//! - **Exact decimal values** backed by `rust_decimal`, never floating point
//! - **Keystroke filtering**: only digits and one decimal mark get through
//! - **Live fraction chopping** to two digits while the user types
//! - **Masked display** on blur (`"$ 1,234.50"`), raw digits while editing
//! - **Host-agnostic**: any widget implementing [`TextField`] can be masked
//!
//! ## Example
//!
//! ```rust
//! use currency_mask::prelude::*;
//! use currency_mask::numeric::Amount;
//! use std::rc::Rc;
//!
//! let form = Rc::new(RecordingValueAccessor::new());
//! let mut engine = MaskEngineBuilder::new()
//!     .value_accessor(form.clone())
//!     .build(BufferField::new())
//!     .unwrap();
//!
//! engine.write_value(Some(Amount::from_cents(123_450)));
//! assert_eq!(engine.field().text(), "$ 1,234.50");
//!
//! // Host forwards raw widget notifications
//! engine.handle_event(FieldEvent::Focus);
//! assert_eq!(engine.field().text(), "1234.50");
//!
//! engine.handle_event(FieldEvent::Blur);
//! assert_eq!(engine.field().text(), "$ 1,234.50");
//! assert_eq!(form.touched_count(), 1);
//! ```
//!
//! [`TextField`]: interfaces::TextField

pub mod domain;
pub mod engine;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FieldId, MaskConfig, MaskState, MaskTransition, Selection};
    pub use crate::engine::{create_from_config, Deferred, MaskEngine, MaskEngineBuilder};
    pub use crate::interfaces::{
        BufferField, FieldEvent, LoggingValueAccessor, NoOpValueAccessor, Propagation,
        RecordingValueAccessor, TextField, ValueAccessor,
    };
    pub use crate::numeric::{Amount, RoundingPolicy};
}
