//! Wake-up gesture selection: independent toggles per gesture.

use platform::WakeUpMode;

use crate::page::PageState;
use crate::screen::{Screen, ScreenContext};

/// The wake-up mode screen.
pub struct WakeUpModeScreen {
    pages: PageState,
    checkboxes_dirty: bool,
}

impl WakeUpModeScreen {
    /// Fresh screen with the checkboxes pending a first draw.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: PageState::new(),
            checkboxes_dirty: true,
        }
    }

    /// Gesture toggled by the `row`-th option (0-based).
    #[must_use]
    pub fn mode_of_row(row: u8) -> WakeUpMode {
        match row {
            1 => WakeUpMode::DoubleTap,
            2 => WakeUpMode::RaiseWrist,
            _ => WakeUpMode::SingleTap,
        }
    }

    /// Whether the `row`-th option is currently enabled.
    #[must_use]
    pub fn is_row_checked(&self, row: u8, ctx: &ScreenContext<'_, '_>) -> bool {
        ctx.components
            .settings
            .is_wake_up_mode_on(Self::mode_of_row(row))
    }

    /// Flip the `row`-th option.
    pub fn toggle_row(&mut self, row: u8, ctx: &mut ScreenContext<'_, '_>) {
        let mode = Self::mode_of_row(row);
        let enabled = ctx.components.settings.is_wake_up_mode_on(mode);
        ctx.components.settings.set_wake_up_mode(mode, !enabled);
        self.checkboxes_dirty = true;
    }

    /// Whether the checkbox column needs a redraw; clears the flag.
    pub fn take_checkboxes_dirty(&mut self) -> bool {
        core::mem::take(&mut self.checkboxes_dirty)
    }
}

impl Default for WakeUpModeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for WakeUpModeScreen {
    fn page_state(&self) -> &PageState {
        &self.pages
    }

    fn page_state_mut(&mut self) -> &mut PageState {
        &mut self.pages
    }
}
