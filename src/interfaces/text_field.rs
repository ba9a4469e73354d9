// ============================================================================
// Text Field Interface
// Defines what the mask engine needs from the host's input widget
// ============================================================================

use crate::domain::Selection;

/// Host text widget driven by a [`MaskEngine`](crate::engine::MaskEngine).
///
/// Offsets are character offsets, not byte offsets. Implementations are
/// expected to behave like a browser `<input>`: `set_text` leaves the caret
/// at the end of the new text, and out-of-range caret positions clamp.
pub trait TextField {
    /// Current text shown in the field
    fn text(&self) -> String;

    /// Replace the whole text
    fn set_text(&mut self, text: &str);

    /// Current selection (collapsed when there is only a caret)
    fn selection(&self) -> Selection;

    /// Move the caret, collapsing any selection
    fn set_caret(&mut self, position: usize);

    /// Mark the widget non-interactive
    fn set_disabled(&mut self, disabled: bool);
}

/// Inbound notifications from the host widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Field gained focus
    Focus,
    /// Field lost focus
    Blur,
    /// A character key is about to be inserted; `code` is its code point
    KeyPress { code: u32 },
    /// Field text changed (already applied)
    Input,
    /// Clipboard paste fired; the text is not updated yet
    Paste,
    /// Clipboard cut fired; the removal is not applied yet
    Cut,
}

impl FieldEvent {
    pub fn key(c: char) -> Self {
        FieldEvent::KeyPress { code: c as u32 }
    }
}

/// Whether the host should perform its default action for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Let the field apply the event as usual
    Allow,
    /// Veto the default action (e.g., do not insert the key)
    Suppress,
}

impl Propagation {
    #[inline]
    pub fn is_allowed(self) -> bool {
        matches!(self, Propagation::Allow)
    }
}

// ============================================================================
// In-memory field
// ============================================================================

/// Plain in-memory [`TextField`] for tests, benches and headless hosts.
///
/// Besides the trait it offers the edits a user performs (insert, backspace,
/// select, cut) so a host loop can replay a typing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferField {
    text: String,
    selection: Selection,
    disabled: bool,
}

impl BufferField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field pre-filled with `text`, caret at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            text,
            selection: Selection::caret(end),
            disabled: false,
        }
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Caret offset (start of the selection)
    #[inline]
    pub fn caret(&self) -> usize {
        self.selection.start
    }

    /// Select the range between `a` and `b`, clamped to the text
    pub fn select(&mut self, a: usize, b: usize) {
        let len = self.len();
        self.selection = Selection::new(a.min(len), b.min(len));
    }

    /// Replace the selection with `s`, leaving the caret after it
    pub fn insert_str(&mut self, s: &str) {
        if self.disabled {
            return;
        }
        let Selection { start, end } = self.selection;
        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        self.text.replace_range(from..to, s);
        self.selection = Selection::caret(start + s.chars().count());
    }

    /// Delete the selection, or the character before the caret
    pub fn delete_backward(&mut self) {
        if self.disabled {
            return;
        }
        let Selection { start, end } = self.selection;
        let start = if start == end { start.saturating_sub(1) } else { start };
        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        self.text.replace_range(from..to, "");
        self.selection = Selection::caret(start);
    }

    /// Remove the selected text and return it
    pub fn cut(&mut self) -> String {
        if self.disabled || self.selection.is_caret() {
            return String::new();
        }
        let Selection { start, end } = self.selection;
        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        let removed: String = self.text.drain(from..to).collect();
        self.selection = Selection::caret(start);
        removed
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextField for BufferField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = Selection::caret(self.len());
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_caret(&mut self, position: usize) {
        self.selection = Selection::caret(position.min(self.len()));
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
