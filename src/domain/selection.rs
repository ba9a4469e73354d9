// ============================================================================
// Cursor Selection
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Character offsets into the field text. `start == end` is a bare caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Selection between two offsets, normalized so `start <= end`.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Collapsed caret at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Whether the character at `idx` falls in the selected range.
    ///
    /// A bare caret contains nothing.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        !self.is_caret() && idx >= self.start && idx < self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }
}
