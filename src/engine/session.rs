// ============================================================================
// Typing Session
// Replays user edits against an in-memory field the way a browser would
// ============================================================================
//
// A browser delivers a keystroke as: keypress (vetoable) -> text mutation ->
// input event -> repaint. Paste and cut fire *before* the mutation. The
// helpers below follow the same order and drain deferred ticks at the point
// where the host would repaint.

use crate::engine::MaskEngine;
use crate::interfaces::{BufferField, FieldEvent, Propagation};

/// Backspace key code
const BACKSPACE: u32 = 8;

impl MaskEngine<BufferField> {
    /// Press one character key.
    ///
    /// A disabled widget takes no keystrokes, so nothing is dispatched.
    pub fn type_char(&mut self, c: char) -> Propagation {
        if self.is_disabled() {
            return Propagation::Suppress;
        }
        let verdict = self.handle_event(FieldEvent::key(c));
        if verdict.is_allowed() {
            let mut buf = [0u8; 4];
            self.field_mut().insert_str(c.encode_utf8(&mut buf));
            self.handle_event(FieldEvent::Input);
        }
        self.flush();
        verdict
    }

    /// Press each character of `s` in turn; returns how many were accepted.
    pub fn type_str(&mut self, s: &str) -> usize {
        s.chars()
            .filter(|&c| self.type_char(c).is_allowed())
            .count()
    }

    /// Press backspace.
    pub fn backspace(&mut self) {
        if self.is_disabled() {
            return;
        }
        if self
            .handle_event(FieldEvent::KeyPress { code: BACKSPACE })
            .is_allowed()
        {
            self.field_mut().delete_backward();
            self.handle_event(FieldEvent::Input);
        }
        self.flush();
    }

    /// Paste `s` over the current selection.
    pub fn paste_str(&mut self, s: &str) {
        if self.is_disabled() {
            return;
        }
        self.handle_event(FieldEvent::Paste);
        self.field_mut().insert_str(s);
        self.handle_event(FieldEvent::Input);
        self.flush();
    }

    /// Cut the current selection, returning the removed text.
    pub fn cut_selection(&mut self) -> String {
        if self.is_disabled() {
            return String::new();
        }
        self.handle_event(FieldEvent::Cut);
        let removed = self.field_mut().cut();
        self.flush();
        removed
    }

    /// Give the field focus; a disabled widget cannot be focused.
    pub fn focus(&mut self) {
        if !self.is_disabled() {
            self.handle_event(FieldEvent::Focus);
        }
    }

    /// Take focus away. Delivered even when disabled, since disabling a
    /// focused widget is what drops its focus.
    pub fn blur(&mut self) {
        self.handle_event(FieldEvent::Blur);
    }
}
