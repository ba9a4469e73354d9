// ============================================================================
// Domain Models Module
// Configuration, identity, selection and state of a masked field
// ============================================================================

pub mod config;
pub mod field_id;
pub mod selection;
pub mod state;

pub use config::{MaskConfig, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMAL_MARK};
pub use field_id::FieldId;
pub use selection::Selection;
pub use state::{MaskState, MaskTransition};
