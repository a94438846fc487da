//! Over-the-air firmware update progress.

use platform::{FirmwareUpdateState, SwipeDirection};

use crate::page::PageState;
use crate::screen::{Screen, ScreenContext};

/// The DFU progress screen.
///
/// Mirrors the BLE controller's transfer state on every tick; while a
/// transfer is running all gestures are consumed so the user cannot
/// navigate away mid-flash.
pub struct FirmwareUpdateScreen {
    pages: PageState,
    state: FirmwareUpdateState,
    progress_percent: u8,
    progress_dirty: bool,
    state_dirty: bool,
}

impl FirmwareUpdateScreen {
    /// Fresh screen; state is synced on the first refresh.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: PageState::new(),
            state: FirmwareUpdateState::Idle,
            progress_percent: 0,
            progress_dirty: true,
            state_dirty: true,
        }
    }

    /// Last observed transfer state.
    #[must_use]
    pub fn state(&self) -> FirmwareUpdateState {
        self.state
    }

    /// Last observed progress percentage.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    /// Whether the progress bar needs a redraw; clears the flag.
    pub fn take_progress_dirty(&mut self) -> bool {
        core::mem::take(&mut self.progress_dirty)
    }

    /// Whether the state banner needs a redraw; clears the flag.
    pub fn take_state_dirty(&mut self) -> bool {
        core::mem::take(&mut self.state_dirty)
    }

    fn transfer_running(&self) -> bool {
        self.state == FirmwareUpdateState::Running
    }
}

impl Default for FirmwareUpdateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for FirmwareUpdateScreen {
    fn page_state(&self) -> &PageState {
        &self.pages
    }

    fn page_state_mut(&mut self) -> &mut PageState {
        &mut self.pages
    }

    fn refresh(&mut self, ctx: &mut ScreenContext<'_, '_>) {
        let state = ctx.components.ble.firmware_update_state();
        if state != self.state {
            self.state = state;
            self.state_dirty = true;
        }
        let progress = ctx.components.ble.firmware_update_progress();
        if progress != self.progress_percent {
            self.progress_percent = progress;
            self.progress_dirty = true;
        }
    }

    fn handle_tap(&mut self, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        self.transfer_running()
    }

    fn handle_long_tap(&mut self, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        self.transfer_running()
    }

    fn handle_double_tap(&mut self, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        self.transfer_running()
    }

    fn handle_swipe(&mut self, _direction: SwipeDirection, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        self.transfer_running()
    }

    fn handle_button_press(&mut self, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        self.transfer_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::WatchFaceDirectory;
    use crate::tags::ScreenTag;
    use platform::mocks::{
        MockBle, MockBrightness, MockClock, MockPower, MockSettings, MockTicks, MockValidator,
    };
    use platform::Components;

    struct NoFaces;
    impl WatchFaceDirectory for NoFaces {
        fn watch_face_by_index(&self, _index: u8) -> ScreenTag {
            ScreenTag::None
        }
    }

    #[test]
    fn test_running_transfer_absorbs_gestures() {
        let mut settings = MockSettings::new();
        let clock = MockClock::new();
        let power = MockPower::new(80);
        let ble = MockBle::new();
        let mut brightness = MockBrightness::new();
        let mut validator = MockValidator::new();
        let ticks = MockTicks::new(0);

        let mut components = Components {
            settings: &mut settings,
            clock: &clock,
            power: &power,
            ble: &ble,
            brightness: &mut brightness,
            validator: &mut validator,
        };

        let mut screen = FirmwareUpdateScreen::new();

        // Idle: gestures fall through.
        {
            let mut pending = None;
            let mut ctx = ScreenContext::new(&mut components, &ticks, &NoFaces, &mut pending);
            screen.refresh(&mut ctx);
            assert!(!screen.handle_tap(&mut ctx));
            assert!(!screen.handle_swipe(SwipeDirection::Right, &mut ctx));
        }

        // Drive the mock DFU forward; the screen picks it up on the next
        // tick and starts absorbing gestures.
        ble.set_update_state(FirmwareUpdateState::Running);
        ble.set_update_progress(40);
        {
            let mut pending = None;
            let mut ctx = ScreenContext::new(&mut components, &ticks, &NoFaces, &mut pending);
            screen.refresh(&mut ctx);
            assert_eq!(screen.state(), FirmwareUpdateState::Running);
            assert_eq!(screen.progress_percent(), 40);
            assert!(screen.take_state_dirty());
            assert!(screen.take_progress_dirty());
            assert!(screen.handle_tap(&mut ctx));
            assert!(screen.handle_swipe(SwipeDirection::Right, &mut ctx));
            assert!(screen.handle_button_press(&mut ctx));
        }
    }
}
