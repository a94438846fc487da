//! Daily steps goal adjustment.

use crate::page::PageState;
use crate::screen::{Screen, ScreenContext};

/// Smallest settable goal.
pub const MIN_STEPS_GOAL: u32 = 500;

/// Largest settable goal.
pub const MAX_STEPS_GOAL: u32 = 50_000;

/// The activity goal screen: four buttons adjust the goal by ±100/±1000.
pub struct StepsGoalScreen {
    pages: PageState,
    label_dirty: bool,
}

impl StepsGoalScreen {
    /// Fresh screen with the goal label pending a first draw.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: PageState::new(),
            label_dirty: true,
        }
    }

    /// Adjust the persisted goal by `delta` steps, clamped to
    /// `[MIN_STEPS_GOAL, MAX_STEPS_GOAL]`.
    pub fn adjust(&mut self, delta: i32, ctx: &mut ScreenContext<'_, '_>) {
        let current = ctx.components.settings.steps_goal();
        let adjusted = i64::from(current).saturating_add(i64::from(delta));
        let clamped = adjusted.clamp(i64::from(MIN_STEPS_GOAL), i64::from(MAX_STEPS_GOAL));
        // The clamp bounds fit u32 by construction.
        let goal = u32::try_from(clamped).unwrap_or(MIN_STEPS_GOAL);
        if goal != current {
            ctx.components.settings.set_steps_goal(goal);
            self.label_dirty = true;
        }
    }

    /// Whether the goal label needs a redraw; clears the flag.
    pub fn take_label_dirty(&mut self) -> bool {
        core::mem::take(&mut self.label_dirty)
    }
}

impl Default for StepsGoalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for StepsGoalScreen {
    fn page_state(&self) -> &PageState {
        &self.pages
    }

    fn page_state_mut(&mut self) -> &mut PageState {
        &mut self.pages
    }
}
