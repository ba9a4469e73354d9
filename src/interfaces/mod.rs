// ============================================================================
// Interfaces Module
// Contains the host-facing traits and their stock implementations
// ============================================================================

mod text_field;
mod value_accessor;

pub use text_field::{BufferField, FieldEvent, Propagation, TextField};
pub use value_accessor::{
    LoggingValueAccessor, NoOpValueAccessor, RecordingValueAccessor, ValueAccessor,
};
