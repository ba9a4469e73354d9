// ============================================================================
// Mask Engine
// Event-driven state machine keeping display text and bound value in sync
// ============================================================================

use crate::domain::{FieldId, MaskConfig, MaskState, MaskTransition};
use crate::engine::tick_queue::{Deferred, TickQueue};
use crate::interfaces::{FieldEvent, Propagation, TextField, ValueAccessor};
use crate::numeric::{self, Amount};
use std::rc::Rc;

/// Highest code point treated as a control key (backspace, enter, ...)
const MAX_CONTROL_CODE: u32 = 31;

/// Currency mask bound to one text field.
///
/// The host forwards raw widget notifications through [`handle_event`] and
/// calls [`run_pending`] once its own update cycle is done, which is how
/// paste/cut re-derivation and caret restoration get their one-tick delay.
///
/// [`handle_event`]: MaskEngine::handle_event
/// [`run_pending`]: MaskEngine::run_pending
pub struct MaskEngine<F: TextField> {
    /// Identity used in log lines
    id: FieldId,

    /// Symbol, decimal mark and rounding for this field
    config: MaskConfig,

    /// Host widget, exclusively owned
    field: F,

    /// Bound-value notification target
    accessor: Rc<dyn ValueAccessor>,

    /// Masked or editing
    state: MaskState,

    /// Last value handed to (or received from) the host form
    last_committed: Option<Amount>,

    /// Work deferred to the next tick
    ticks: TickQueue,

    disabled: bool,
    attached: bool,
}

impl<F: TextField> MaskEngine<F> {
    /// Create a mask engine.
    ///
    /// The field text is left untouched until the first
    /// [`write_value`](Self::write_value) or event. Use
    /// [`MaskEngineBuilder`](crate::engine::MaskEngineBuilder) to get the
    /// config validated.
    pub fn new(config: MaskConfig, field: F, accessor: Rc<dyn ValueAccessor>) -> Self {
        let id = FieldId::new();
        tracing::debug!(field = %id, symbol = %config.currency_symbol, "Mask engine created");
        Self {
            id,
            config,
            field,
            accessor,
            state: MaskState::Masked,
            last_committed: None,
            ticks: TickQueue::new(),
            disabled: false,
            attached: true,
        }
    }

    /// Dispatch an inbound notification from the host widget.
    ///
    /// Only [`FieldEvent::KeyPress`] can come back as
    /// [`Propagation::Suppress`]. Events reaching a detached engine are
    /// ignored; disabling the field does not change masking.
    pub fn handle_event(&mut self, event: FieldEvent) -> Propagation {
        if !self.attached {
            tracing::trace!(field = %self.id, "Ignoring {:?} on detached field", event);
            return Propagation::Allow;
        }

        match event {
            FieldEvent::Focus => self.on_focus(),
            FieldEvent::Blur => self.on_blur(),
            FieldEvent::KeyPress { code } => return self.on_key_press(code),
            FieldEvent::Input => self.rederive(),
            FieldEvent::Paste | FieldEvent::Cut => self.ticks.schedule(Deferred::Rederive),
        }

        Propagation::Allow
    }

    /// Host form supplies an authoritative value.
    ///
    /// The value becomes the last committed one, so echoing it back through
    /// editing does not trigger a change notification.
    pub fn write_value(&mut self, value: Option<Amount>) {
        if !self.attached {
            return;
        }
        tracing::debug!(field = %self.id, "External write: {:?}", value);
        self.last_committed = value;
        self.mask(value);
        self.transition(MaskTransition::ExternalWrite);
    }

    /// Pass the disabled flag through to the widget.
    ///
    /// Masking keeps running: a field disabled mid-edit is still re-masked
    /// and touched when the blur arrives.
    pub fn set_disabled(&mut self, disabled: bool) {
        tracing::debug!(field = %self.id, disabled, "Disabled flag set");
        self.disabled = disabled;
        self.field.set_disabled(disabled);
    }

    /// Run the actions deferred during the previous tick.
    ///
    /// Actions scheduled while running are left for the next call. Returns
    /// how many actions ran.
    pub fn run_pending(&mut self) -> usize {
        let tick = self.ticks.take_tick();
        if !self.attached {
            if !tick.is_empty() {
                tracing::warn!(
                    field = %self.id,
                    "Dropping {} deferred action(s) on detached field",
                    tick.len()
                );
            }
            return 0;
        }

        let count = tick.len();
        for action in tick {
            tracing::trace!(field = %self.id, "Running deferred {:?}", action);
            match action {
                Deferred::RestoreCaret(position) => self.field.set_caret(position),
                Deferred::Rederive => self.rederive(),
            }
        }
        count
    }

    /// Run ticks until nothing is pending.
    pub fn flush(&mut self) -> usize {
        let mut total = 0;
        while !self.ticks.is_empty() {
            total += self.run_pending();
        }
        total
    }

    /// Stop acting on the field; pending work is dropped.
    pub fn detach(&mut self) {
        let dropped = self.ticks.clear();
        if dropped > 0 {
            tracing::warn!(
                field = %self.id,
                "Detached with {} deferred action(s) pending",
                dropped
            );
        }
        self.attached = false;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn id(&self) -> FieldId {
        self.id
    }

    #[inline]
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> MaskState {
        self.state
    }

    #[inline]
    pub fn last_committed(&self) -> Option<Amount> {
        self.last_committed
    }

    #[inline]
    pub fn pending_ticks(&self) -> usize {
        self.ticks.len()
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[inline]
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Mutable access for hosts that apply edits to the widget themselves
    #[inline]
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    /// Tear down, handing the widget back
    pub fn into_field(mut self) -> F {
        self.detach();
        self.field
    }

    // ========================================================================
    // Event handlers
    // ========================================================================

    fn on_focus(&mut self) {
        let text = self.field.text();
        let unmasked = self.config.unmask(&text);
        self.field.set_text(&unmasked);
        self.transition(MaskTransition::Focus);
    }

    fn on_blur(&mut self) {
        let text = self.field.text();
        let value = self.config.parse(&text);
        self.mask(value);
        self.transition(MaskTransition::Blur);
        self.accessor.on_touched();
    }

    fn on_key_press(&mut self, code: u32) -> Propagation {
        if code <= MAX_CONTROL_CODE {
            return Propagation::Allow;
        }

        let mark = self.config.decimal_mark;
        let Some(c) = char::from_u32(code).filter(|c| c.is_ascii_digit() || *c == mark) else {
            tracing::trace!(field = %self.id, code, "Rejected keystroke");
            return Propagation::Suppress;
        };

        if c != mark {
            return Propagation::Allow;
        }

        // A second mark is only allowed to replace a selection holding the first
        let text = self.field.text();
        match numeric::mark_position(&text, mark) {
            Some(idx) if !self.field.selection().contains(idx) => {
                tracing::trace!(field = %self.id, "Decimal mark exists, jumping past it");
                self.field.set_caret(idx + 1);
                Propagation::Suppress
            },
            _ => Propagation::Allow,
        }
    }

    // ========================================================================
    // Private helpers
    // ========================================================================

    /// Re-read the field after a text change and commit the value if new.
    fn rederive(&mut self) {
        self.restrict_fraction();

        let text = self.field.text();
        let raw = self.config.unmask(&text);
        let value = self.config.parse(&raw);
        self.transition(MaskTransition::TextChanged);

        if !Amount::equals(value.as_ref(), self.last_committed.as_ref()) {
            tracing::debug!(field = %self.id, "Committing {:?}", value);
            self.last_committed = value;
            self.accessor.on_change(value);
        }
    }

    /// Chop fraction digits beyond two, keeping the caret where it was.
    fn restrict_fraction(&mut self) {
        let text = self.field.text();
        if let Some(chopped) = numeric::chop_fraction(&text, self.config.decimal_mark) {
            let caret = self.field.selection().start;
            self.field.set_text(&chopped);
            self.ticks.schedule(Deferred::RestoreCaret(caret));
        }
    }

    /// Show `value` fully formatted, or clear the field when absent.
    fn mask(&mut self, value: Option<Amount>) {
        let masked = match value {
            Some(amount) => self.config.format(&amount),
            None => String::new(),
        };
        self.field.set_text(&masked);
    }

    fn transition(&mut self, transition: MaskTransition) {
        let next = self.state.transition(transition);
        if next != self.state {
            tracing::debug!(field = %self.id, "{:?} -> {:?} on {:?}", self.state, next, transition);
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Selection;
    use crate::interfaces::{BufferField, RecordingValueAccessor};
    use crate::numeric::RoundingPolicy;

    fn engine() -> (MaskEngine<BufferField>, Rc<RecordingValueAccessor>) {
        let recorder = Rc::new(RecordingValueAccessor::new());
        let engine = MaskEngine::new(MaskConfig::default(), BufferField::new(), recorder.clone());
        (engine, recorder)
    }

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_write_value_masks() {
        let (mut engine, recorder) = engine();
        engine.write_value(Some(amount("1234.5")));

        assert_eq!(engine.field().text(), "$ 1,234.50");
        assert_eq!(engine.state(), MaskState::Masked);
        assert_eq!(engine.last_committed(), Some(amount("1234.5")));
        // Writes from the host are not echoed back
        assert!(recorder.changes().is_empty());
    }

    #[test]
    fn test_write_absent_clears() {
        let (mut engine, _) = engine();
        engine.write_value(Some(amount("5")));
        engine.write_value(None);
        assert_eq!(engine.field().text(), "");
    }

    #[test]
    fn test_focus_unmasks() {
        let (mut engine, _) = engine();
        engine.write_value(Some(amount("1234567")));
        engine.handle_event(FieldEvent::Focus);

        assert_eq!(engine.field().text(), "1234567.00");
        assert_eq!(engine.state(), MaskState::Editing);
    }

    #[test]
    fn test_control_keys_pass() {
        let (mut engine, _) = engine();
        assert_eq!(engine.handle_event(FieldEvent::KeyPress { code: 8 }), Propagation::Allow);
        assert_eq!(engine.handle_event(FieldEvent::KeyPress { code: 13 }), Propagation::Allow);
    }

    #[test]
    fn test_disallowed_keys_suppressed() {
        let (mut engine, _) = engine();
        for c in ['a', '-', ',', ' ', '$', '+', '٣'] {
            assert_eq!(
                engine.handle_event(FieldEvent::key(c)),
                Propagation::Suppress,
                "{c:?} should be rejected"
            );
        }
        assert_eq!(
            engine.handle_event(FieldEvent::KeyPress { code: 0xD800 }),
            Propagation::Suppress
        );
        assert_eq!(engine.handle_event(FieldEvent::key('7')), Propagation::Allow);
    }

    #[test]
    fn test_decimal_mark_jumps_past_existing_mark() {
        let (mut engine, _) = engine();
        engine.field_mut().set_text("12.34");
        for caret in [0, 1, 2, 4, 5] {
            engine.field_mut().set_caret(caret);
            assert_eq!(engine.handle_event(FieldEvent::key('.')), Propagation::Suppress);
            assert_eq!(engine.field().selection(), Selection::caret(3));
        }
        assert_eq!(engine.field().text(), "12.34");
    }

    #[test]
    fn test_decimal_mark_replaces_selected_mark() {
        let (mut engine, _) = engine();
        engine.field_mut().set_text("12.34");
        engine.field_mut().select(1, 4);
        assert_eq!(engine.handle_event(FieldEvent::key('.')), Propagation::Allow);

        // Selection not covering the mark still jumps
        engine.field_mut().select(3, 5);
        assert_eq!(engine.handle_event(FieldEvent::key('.')), Propagation::Suppress);
        assert_eq!(engine.field().selection(), Selection::caret(3));
    }

    #[test]
    fn test_decimal_mark_accepted_without_existing_mark() {
        let (mut engine, _) = engine();
        engine.field_mut().set_text("12");
        assert_eq!(engine.handle_event(FieldEvent::key('.')), Propagation::Allow);
    }

    #[test]
    fn test_input_commits_only_on_change() {
        let (mut engine, recorder) = engine();
        engine.handle_event(FieldEvent::Focus);

        engine.field_mut().insert_str("1");
        engine.handle_event(FieldEvent::Input);
        engine.field_mut().insert_str(".");
        engine.handle_event(FieldEvent::Input);
        engine.field_mut().insert_str("0");
        engine.handle_event(FieldEvent::Input);
        engine.field_mut().insert_str("5");
        engine.handle_event(FieldEvent::Input);

        assert_eq!(
            recorder.changes(),
            vec![Some(amount("1")), Some(amount("1.05"))]
        );
        assert_eq!(engine.last_committed(), Some(amount("1.05")));
    }

    #[test]
    fn test_clearing_commits_absent_once() {
        let (mut engine, recorder) = engine();
        engine.write_value(Some(amount("7")));
        engine.handle_event(FieldEvent::Focus);

        engine.field_mut().set_text("");
        engine.handle_event(FieldEvent::Input);
        engine.handle_event(FieldEvent::Input);

        assert_eq!(recorder.changes(), vec![None]);
    }

    #[test]
    fn test_lone_mark_is_absent_not_zero() {
        let (mut engine, recorder) = engine();
        engine.write_value(Some(Amount::ZERO));
        engine.handle_event(FieldEvent::Focus);

        engine.field_mut().set_text(".");
        engine.handle_event(FieldEvent::Input);
        assert_eq!(recorder.changes(), vec![None]);

        engine.handle_event(FieldEvent::Blur);
        assert_eq!(engine.field().text(), "");
    }

    #[test]
    fn test_fraction_chopped_immediately_with_caret_restored() {
        let (mut engine, recorder) = engine();
        engine.handle_event(FieldEvent::Focus);
        engine.field_mut().set_text("12.34");
        engine.field_mut().set_caret(3);

        // "12.934" with caret after the 9
        engine.field_mut().insert_str("9");
        engine.handle_event(FieldEvent::Input);

        assert_eq!(engine.field().text(), "12.93");
        // set_text parked the caret at the end until the deferred restore runs
        assert_eq!(engine.field().selection(), Selection::caret(5));
        assert_eq!(engine.pending_ticks(), 1);

        assert_eq!(engine.run_pending(), 1);
        assert_eq!(engine.field().selection(), Selection::caret(4));
        assert_eq!(recorder.last_change(), Some(Some(amount("12.93"))));
    }

    #[test]
    fn test_paste_rederives_one_tick_later() {
        let (mut engine, recorder) = engine();
        engine.handle_event(FieldEvent::Focus);

        engine.handle_event(FieldEvent::Paste);
        engine.field_mut().insert_str("$ 1,999.999");
        assert!(recorder.changes().is_empty());

        engine.run_pending();
        assert_eq!(engine.field().text(), "$ 1,999.99");
        assert_eq!(recorder.changes(), vec![Some(amount("1999.99"))]);

        // Caret restore was scheduled for the following tick
        assert_eq!(engine.run_pending(), 1);
        assert_eq!(engine.pending_ticks(), 0);
    }

    #[test]
    fn test_cut_rederives_one_tick_later() {
        let (mut engine, recorder) = engine();
        engine.write_value(Some(amount("1234")));
        engine.handle_event(FieldEvent::Focus);

        engine.field_mut().select(0, 2);
        engine.handle_event(FieldEvent::Cut);
        engine.field_mut().cut();
        assert!(recorder.changes().is_empty());

        engine.flush();
        assert_eq!(engine.field().text(), "34.00");
        assert_eq!(recorder.changes(), vec![Some(amount("34"))]);
    }

    #[test]
    fn test_blur_masks_and_touches() {
        let (mut engine, recorder) = engine();
        engine.handle_event(FieldEvent::Focus);
        engine.field_mut().set_text("0012.5");
        engine.handle_event(FieldEvent::Input);
        // Leading zeros survive while editing
        assert_eq!(engine.field().text(), "0012.5");

        engine.handle_event(FieldEvent::Blur);
        assert_eq!(engine.field().text(), "$ 12.50");
        assert_eq!(engine.state(), MaskState::Masked);
        assert_eq!(recorder.touched_count(), 1);
    }

    #[test]
    fn test_blur_clears_unparseable_text() {
        let (mut engine, recorder) = engine();
        engine.handle_event(FieldEvent::Focus);
        engine.field_mut().set_text("1-2");
        engine.handle_event(FieldEvent::Blur);
        assert_eq!(engine.field().text(), "");
        assert_eq!(recorder.touched_count(), 1);
    }

    #[test]
    fn test_truncating_config() {
        let recorder = Rc::new(RecordingValueAccessor::new());
        let config = MaskConfig::new("₹").with_rounding(RoundingPolicy::Truncate);
        let mut engine = MaskEngine::new(config, BufferField::new(), recorder);

        engine.write_value(Some(amount("99.999")));
        assert_eq!(engine.field().text(), "₹ 99.99");
        engine.handle_event(FieldEvent::Focus);
        assert_eq!(engine.field().text(), "99.99");
    }

    #[test]
    fn test_set_disabled_passes_through() {
        let (mut engine, recorder) = engine();
        engine.write_value(Some(amount("1")));
        engine.set_disabled(true);
        assert!(engine.is_disabled());
        assert!(engine.field().is_disabled());

        // Masking logic is unchanged while disabled
        engine.handle_event(FieldEvent::Focus);
        assert_eq!(engine.field().text(), "1.00");
        assert_eq!(engine.handle_event(FieldEvent::key('x')), Propagation::Suppress);

        engine.set_disabled(false);
        assert!(!engine.field().is_disabled());
        engine.handle_event(FieldEvent::Blur);
        assert_eq!(engine.field().text(), "$ 1.00");
        assert_eq!(recorder.touched_count(), 1);
    }

    #[test]
    fn test_disabled_mid_edit_still_masks_on_blur() {
        let (mut engine, recorder) = engine();
        engine.handle_event(FieldEvent::Focus);
        engine.field_mut().insert_str("12.5");
        engine.handle_event(FieldEvent::Input);

        engine.set_disabled(true);
        engine.handle_event(FieldEvent::Blur);

        assert_eq!(engine.field().text(), "$ 12.50");
        assert_eq!(engine.state(), MaskState::Masked);
        assert_eq!(recorder.touched_count(), 1);
        assert_eq!(recorder.changes(), vec![Some(amount("12.5"))]);
    }

    #[test]
    fn test_detach_drops_pending_work() {
        let (mut engine, recorder) = engine();
        engine.handle_event(FieldEvent::Focus);
        engine.handle_event(FieldEvent::Paste);
        engine.field_mut().insert_str("42");
        assert_eq!(engine.pending_ticks(), 1);

        engine.detach();
        assert_eq!(engine.pending_ticks(), 0);
        assert_eq!(engine.run_pending(), 0);
        engine.handle_event(FieldEvent::Input);
        engine.write_value(Some(amount("1")));

        assert!(!engine.is_attached());
        assert!(recorder.changes().is_empty());
        assert_eq!(engine.into_field().text(), "42");
    }
}
