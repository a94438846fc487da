//! Validate-or-rollback prompt shown after booting a trial firmware image.

use platform::ValidateError;

use crate::page::PageState;
use crate::screen::{Screen, ScreenContext};

/// The firmware validation screen.
pub struct FirmwareValidationScreen {
    pages: PageState,
    validated: bool,
    error: Option<ValidateError>,
    banner_dirty: bool,
}

impl FirmwareValidationScreen {
    /// Build the screen, reading the current validation state.
    #[must_use]
    pub fn new(components: &platform::Components<'_>) -> Self {
        Self {
            pages: PageState::new(),
            validated: components.validator.is_validated(),
            error: None,
            banner_dirty: true,
        }
    }

    /// Whether the running image is marked valid.
    #[must_use]
    pub fn validated(&self) -> bool {
        self.validated
    }

    /// Error from the last validation attempt, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<ValidateError> {
        self.error
    }

    /// Mark the running image valid. Failure is absorbed and surfaced
    /// through [`FirmwareValidationScreen::error`].
    pub fn validate(&mut self, ctx: &mut ScreenContext<'_, '_>) {
        match ctx.components.validator.validate() {
            Ok(()) => {
                self.validated = true;
                self.error = None;
            }
            Err(error) => {
                self.error = Some(error);
            }
        }
        self.banner_dirty = true;
    }

    /// Clear the validation flag (next boot falls back to the previous
    /// image).
    pub fn reset(&mut self, ctx: &mut ScreenContext<'_, '_>) {
        ctx.components.validator.reset();
        self.validated = false;
        self.error = None;
        self.banner_dirty = true;
    }

    /// Whether the banner needs a redraw; clears the flag.
    pub fn take_banner_dirty(&mut self) -> bool {
        core::mem::take(&mut self.banner_dirty)
    }
}

impl Screen for FirmwareValidationScreen {
    fn page_state(&self) -> &PageState {
        &self.pages
    }

    fn page_state_mut(&mut self) -> &mut PageState {
        &mut self.pages
    }
}
