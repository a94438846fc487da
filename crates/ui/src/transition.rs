//! Transition rules: what moves the graph from one screen to another.

use platform::{FullRefreshDirection, SwipeDirection};

use crate::tags::ScreenTag;

/// Kind of input that fires a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionTrigger {
    /// Physical side button.
    Button,
    /// Directional swipe.
    Swipe,
    /// Single tap.
    Tap,
    /// Long press.
    LongTap,
    /// Double tap.
    DoubleTap,
    /// Idle timeout.
    Inactivity,
}

/// Visual effect requested for a screen switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionEffect {
    /// Plain swap.
    None,
    /// New screen slides in from the right.
    MoveLeft,
    /// New screen slides in from the left.
    MoveRight,
    /// New screen slides in from the bottom.
    MoveTop,
    /// New screen slides in from the top.
    MoveBottom,
}

impl TransitionEffect {
    /// Effect implied by a swipe gesture: the new screen follows the finger.
    #[must_use]
    pub fn from_swipe(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => TransitionEffect::MoveLeft,
            SwipeDirection::Right => TransitionEffect::MoveRight,
            SwipeDirection::Up => TransitionEffect::MoveTop,
            SwipeDirection::Down => TransitionEffect::MoveBottom,
            SwipeDirection::None => TransitionEffect::None,
        }
    }

    /// Full-refresh hint for this effect. The outgoing frame slides
    /// opposite to the motion of the incoming content.
    #[must_use]
    pub fn refresh_hint(self) -> FullRefreshDirection {
        match self {
            TransitionEffect::MoveLeft => FullRefreshDirection::Right,
            TransitionEffect::MoveRight => FullRefreshDirection::Left,
            TransitionEffect::MoveTop => FullRefreshDirection::Up,
            TransitionEffect::MoveBottom => FullRefreshDirection::Down,
            TransitionEffect::None => FullRefreshDirection::None,
        }
    }
}

/// One registered transition rule.
///
/// Immutable once registered; the graph stores rules in registration order
/// and the first match wins, so ordering is part of the observable
/// contract.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Transition {
    pub trigger: TransitionTrigger,
    pub swipe_direction: SwipeDirection,
    pub from: ScreenTag,
    pub to: ScreenTag,
    pub to_page: u8,
    pub effect: TransitionEffect,
}

impl Transition {
    /// Whether this rule fires for the given event at the given screen.
    pub(crate) fn matches(
        &self,
        trigger: TransitionTrigger,
        direction: SwipeDirection,
        from: ScreenTag,
    ) -> bool {
        if self.trigger != trigger || self.from != from {
            return false;
        }
        // Only swipes discriminate on direction.
        trigger != TransitionTrigger::Swipe || self.swipe_direction == direction
    }
}
