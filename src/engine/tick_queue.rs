// ============================================================================
// Deferred Tick Queue
// Work that must run after the host field finished its own update cycle
// ============================================================================

use smallvec::SmallVec;

/// Work postponed by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Put the caret back where it was before a constrained rewrite
    RestoreCaret(usize),
    /// Re-read the field after paste/cut has been applied
    Rederive,
}

/// Single-threaded queue of [`Deferred`] actions.
///
/// Actions scheduled while a tick is being drained land in the next tick.
#[derive(Debug, Default)]
pub struct TickQueue {
    pending: SmallVec<[Deferred; 4]>,
}

impl TickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn schedule(&mut self, action: Deferred) {
        tracing::trace!("Scheduling deferred action: {:?}", action);
        self.pending.push(action);
    }

    /// Take everything scheduled so far, in scheduling order.
    #[inline]
    pub fn take_tick(&mut self) -> SmallVec<[Deferred; 4]> {
        std::mem::take(&mut self.pending)
    }

    /// Drop all pending work, returning how much was dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
