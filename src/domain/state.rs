// ============================================================================
// Mask State Machine
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display mode of a masked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaskState {
    /// Unfocused or freshly initialized: text is the formatted currency string
    #[default]
    Masked,
    /// Focused: text is the raw numeric string the user is editing
    Editing,
}

/// Events that move a field between [`MaskState`]s.
///
/// Keystrokes are absent on purpose: accepting or vetoing a key never
/// changes the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskTransition {
    Focus,
    Blur,
    TextChanged,
    ExternalWrite,
}

impl MaskState {
    /// Every transition is legal from every state.
    pub fn transition(&self, transition: MaskTransition) -> MaskState {
        match transition {
            MaskTransition::Focus | MaskTransition::TextChanged => MaskState::Editing,
            MaskTransition::Blur | MaskTransition::ExternalWrite => MaskState::Masked,
        }
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        matches!(self, MaskState::Editing)
    }

    #[inline]
    pub fn is_masked(&self) -> bool {
        matches!(self, MaskState::Masked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(MaskState::default(), MaskState::Masked);
    }

    #[test]
    fn test_transitions() {
        let s = MaskState::Masked;
        let s = s.transition(MaskTransition::Focus);
        assert!(s.is_editing());
        let s = s.transition(MaskTransition::TextChanged);
        assert!(s.is_editing());
        let s = s.transition(MaskTransition::Blur);
        assert!(s.is_masked());

        // An external write while focused re-masks the field
        let s = MaskState::Editing.transition(MaskTransition::ExternalWrite);
        assert!(s.is_masked());
    }
}
