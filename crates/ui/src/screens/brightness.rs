//! Brightness selection: three exclusive options.

use platform::BrightnessLevel;

use crate::page::PageState;
use crate::screen::{Screen, ScreenContext};

/// The brightness selection screen.
///
/// Option rows map to [`BrightnessLevel`] in display order: Dark, Medium,
/// Bright.
pub struct BrightnessScreen {
    pages: PageState,
    checkboxes_dirty: bool,
}

impl BrightnessScreen {
    /// Fresh screen with the checkboxes pending a first draw.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: PageState::new(),
            checkboxes_dirty: true,
        }
    }

    /// Level shown by the `row`-th option (0-based).
    #[must_use]
    pub fn level_of_row(row: u8) -> BrightnessLevel {
        match row {
            1 => BrightnessLevel::Medium,
            2 => BrightnessLevel::High,
            _ => BrightnessLevel::Low,
        }
    }

    /// Whether the `row`-th option is the persisted choice.
    #[must_use]
    pub fn is_row_checked(&self, row: u8, ctx: &ScreenContext<'_, '_>) -> bool {
        ctx.components.settings.brightness() == Self::level_of_row(row)
    }

    /// Select the `row`-th option: persist it and drive the backlight.
    pub fn select_row(&mut self, row: u8, ctx: &mut ScreenContext<'_, '_>) {
        let level = Self::level_of_row(row);
        ctx.components.settings.set_brightness(level);
        ctx.components.brightness.set(level);
        self.checkboxes_dirty = true;
    }

    /// Whether the checkbox column needs a redraw; clears the flag.
    pub fn take_checkboxes_dirty(&mut self) -> bool {
        core::mem::take(&mut self.checkboxes_dirty)
    }
}

impl Default for BrightnessScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for BrightnessScreen {
    fn page_state(&self) -> &PageState {
        &self.pages
    }

    fn page_state_mut(&mut self) -> &mut PageState {
        &mut self.pages
    }
}
