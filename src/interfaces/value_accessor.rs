// ============================================================================
// Value Accessor Interface
// Defines the contract between a masked field and the host form model
// ============================================================================

use crate::numeric::Amount;
use std::cell::{Cell, RefCell};

/// Receives bound-value notifications from a masked field.
///
/// Hosts implement this to push committed amounts into their form model.
/// `None` means the field holds no number.
pub trait ValueAccessor {
    /// A new value was committed by user editing
    fn on_change(&self, value: Option<Amount>);

    /// The field lost focus
    fn on_touched(&self) {}
}

/// No-op accessor for testing
pub struct NoOpValueAccessor;

impl ValueAccessor for NoOpValueAccessor {
    fn on_change(&self, _value: Option<Amount>) {
        // Do nothing
    }
}

/// Logging accessor
pub struct LoggingValueAccessor;

impl ValueAccessor for LoggingValueAccessor {
    fn on_change(&self, value: Option<Amount>) {
        tracing::debug!("Masked field value changed: {:?}", value);
    }

    fn on_touched(&self) {
        tracing::debug!("Masked field touched");
    }
}

/// Accessor that keeps every notification, for assertions and demos.
#[derive(Debug, Default)]
pub struct RecordingValueAccessor {
    changes: RefCell<Vec<Option<Amount>>>,
    touched: Cell<usize>,
}

impl RecordingValueAccessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// All committed values, oldest first
    pub fn changes(&self) -> Vec<Option<Amount>> {
        self.changes.borrow().clone()
    }

    /// Most recent committed value, `None` if nothing was ever committed
    pub fn last_change(&self) -> Option<Option<Amount>> {
        self.changes.borrow().last().copied()
    }

    pub fn touched_count(&self) -> usize {
        self.touched.get()
    }

    pub fn clear(&self) {
        self.changes.borrow_mut().clear();
        self.touched.set(0);
    }
}

impl ValueAccessor for RecordingValueAccessor {
    fn on_change(&self, value: Option<Amount>) {
        self.changes.borrow_mut().push(value);
    }

    fn on_touched(&self) {
        self.touched.set(self.touched.get() + 1);
    }
}
