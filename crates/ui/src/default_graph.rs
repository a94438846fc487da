//! The shipped navigation layout: screens, factory, transition table.

use platform::{Components, FullRefreshProvider, SwipeDirection, TickSource};

use crate::graph::ScreenGraph;
use crate::page::PageState;
use crate::screen::{Screen, ScreenContext, ScreenFactory, WatchFaceDirectory};
use crate::screens::{
    BinaryFace, BrightnessScreen, FirmwareUpdateScreen, FirmwareValidationScreen, InfographFace,
    SettingsMenuScreen, StepsGoalScreen, SystemInfoScreen, UtilityFace, WakeUpModeScreen,
};
use crate::tags::ScreenTag;
use crate::transition::TransitionEffect;
use crate::watch_face::WatchFace;

/// All concrete screens the default factory can build.
#[allow(missing_docs)]
pub enum AppScreen {
    Utility(WatchFace<UtilityFace>),
    Infograph(WatchFace<InfographFace>),
    Binary(WatchFace<BinaryFace>),
    FirmwareUpdate(FirmwareUpdateScreen),
    FirmwareValidation(FirmwareValidationScreen),
    SystemInfo(SystemInfoScreen),
    SettingsMenu(SettingsMenuScreen),
    Brightness(BrightnessScreen),
    WakeUpMode(WakeUpModeScreen),
    StepsGoal(StepsGoalScreen),
}

macro_rules! with_screen {
    ($self:ident, $screen:ident => $body:expr) => {
        match $self {
            AppScreen::Utility($screen) => $body,
            AppScreen::Infograph($screen) => $body,
            AppScreen::Binary($screen) => $body,
            AppScreen::FirmwareUpdate($screen) => $body,
            AppScreen::FirmwareValidation($screen) => $body,
            AppScreen::SystemInfo($screen) => $body,
            AppScreen::SettingsMenu($screen) => $body,
            AppScreen::Brightness($screen) => $body,
            AppScreen::WakeUpMode($screen) => $body,
            AppScreen::StepsGoal($screen) => $body,
        }
    };
}

impl Screen for AppScreen {
    fn page_state(&self) -> &PageState {
        with_screen!(self, screen => screen.page_state())
    }

    fn page_state_mut(&mut self) -> &mut PageState {
        with_screen!(self, screen => screen.page_state_mut())
    }

    fn is_multi_page(&self) -> bool {
        with_screen!(self, screen => screen.is_multi_page())
    }

    fn page_count(&self) -> u8 {
        with_screen!(self, screen => screen.page_count())
    }

    fn page_changed(&mut self) {
        with_screen!(self, screen => screen.page_changed())
    }

    fn background_color(&self) -> embedded_graphics::pixelcolor::Rgb565 {
        with_screen!(self, screen => screen.background_color())
    }

    fn foreground_color(&self) -> embedded_graphics::pixelcolor::Rgb565 {
        with_screen!(self, screen => screen.foreground_color())
    }

    fn refresh(&mut self, ctx: &mut ScreenContext<'_, '_>) {
        with_screen!(self, screen => screen.refresh(ctx))
    }

    fn handle_button_press(&mut self, ctx: &mut ScreenContext<'_, '_>) -> bool {
        with_screen!(self, screen => screen.handle_button_press(ctx))
    }

    fn handle_tap(&mut self, ctx: &mut ScreenContext<'_, '_>) -> bool {
        with_screen!(self, screen => screen.handle_tap(ctx))
    }

    fn handle_long_tap(&mut self, ctx: &mut ScreenContext<'_, '_>) -> bool {
        with_screen!(self, screen => screen.handle_long_tap(ctx))
    }

    fn handle_double_tap(&mut self, ctx: &mut ScreenContext<'_, '_>) -> bool {
        with_screen!(self, screen => screen.handle_double_tap(ctx))
    }

    fn handle_swipe(&mut self, direction: SwipeDirection, ctx: &mut ScreenContext<'_, '_>) -> bool {
        with_screen!(self, screen => screen.handle_swipe(direction, ctx))
    }
}

/// Factory for the shipped screen set.
///
/// Watch-face indices: 1 is the infograph face, 2 the binary face, and any
/// other stored value falls back to the utility face, so default-face
/// resolution never fails with this factory.
pub struct DefaultScreenFactory;

impl WatchFaceDirectory for DefaultScreenFactory {
    fn watch_face_by_index(&self, index: u8) -> ScreenTag {
        match index {
            1 => ScreenTag::InfographWatchFace,
            2 => ScreenTag::BinaryWatchFace,
            _ => ScreenTag::UtilityWatchFace,
        }
    }
}

impl ScreenFactory for DefaultScreenFactory {
    type Screen = AppScreen;

    fn create_screen(
        &mut self,
        tag: ScreenTag,
        components: &mut Components<'_>,
    ) -> Option<AppScreen> {
        match tag {
            ScreenTag::UtilityWatchFace => Some(AppScreen::Utility(WatchFace::new(
                components,
                UtilityFace::new(),
            ))),
            ScreenTag::InfographWatchFace => Some(AppScreen::Infograph(WatchFace::new(
                components,
                InfographFace::new(),
            ))),
            ScreenTag::BinaryWatchFace => Some(AppScreen::Binary(WatchFace::new(
                components,
                BinaryFace::new(),
            ))),
            ScreenTag::FirmwareUpdate => {
                Some(AppScreen::FirmwareUpdate(FirmwareUpdateScreen::new()))
            }
            ScreenTag::FirmwareValidation => Some(AppScreen::FirmwareValidation(
                FirmwareValidationScreen::new(components),
            )),
            ScreenTag::SystemInfo => Some(AppScreen::SystemInfo(SystemInfoScreen::new())),
            ScreenTag::Settings => Some(AppScreen::SettingsMenu(SettingsMenuScreen::new())),
            ScreenTag::Brightness => Some(AppScreen::Brightness(BrightnessScreen::new())),
            ScreenTag::WakeUpMode => Some(AppScreen::WakeUpMode(WakeUpModeScreen::new())),
            ScreenTag::StepsGoal => Some(AppScreen::StepsGoal(StepsGoalScreen::new())),
            ScreenTag::None | ScreenTag::Previous | ScreenTag::DefaultWatchFace => None,
        }
    }
}

/// Build the shipped navigation graph.
///
/// Starts on the user's default watch face and registers the standard
/// transition table: swiping up from any face opens the settings menu,
/// swiping left cycles the face carousel, the button returns from leaf
/// screens to the face, and swiping right on a leaf screen goes back.
pub fn default_screen_graph<'a>(
    components: Components<'a>,
    refresh_provider: &'a mut dyn FullRefreshProvider,
    ticks: &'a dyn TickSource,
) -> ScreenGraph<'a, DefaultScreenFactory> {
    let mut graph = ScreenGraph::new(
        DefaultScreenFactory,
        components,
        refresh_provider,
        ticks,
        ScreenTag::DefaultWatchFace,
    );

    // Transitions from the utility face.
    graph.add_swipe_transition(
        ScreenTag::UtilityWatchFace,
        ScreenTag::Settings,
        SwipeDirection::Up,
    );
    graph.add_swipe_transition(
        ScreenTag::UtilityWatchFace,
        ScreenTag::InfographWatchFace,
        SwipeDirection::Left,
    );

    // Transitions from the infograph face.
    graph.add_swipe_transition(
        ScreenTag::InfographWatchFace,
        ScreenTag::Settings,
        SwipeDirection::Up,
    );
    graph.add_swipe_transition(
        ScreenTag::InfographWatchFace,
        ScreenTag::BinaryWatchFace,
        SwipeDirection::Left,
    );

    // Transitions from the binary face.
    graph.add_swipe_transition(
        ScreenTag::BinaryWatchFace,
        ScreenTag::Settings,
        SwipeDirection::Up,
    );
    graph.add_swipe_transition(
        ScreenTag::BinaryWatchFace,
        ScreenTag::UtilityWatchFace,
        SwipeDirection::Left,
    );

    // Transitions from the firmware validation screen.
    graph.add_button_transition(
        ScreenTag::FirmwareValidation,
        ScreenTag::DefaultWatchFace,
        TransitionEffect::None,
    );
    graph.add_swipe_transition(
        ScreenTag::FirmwareValidation,
        ScreenTag::Previous,
        SwipeDirection::Right,
    );

    // Transitions from the system info screen.
    graph.add_button_transition(
        ScreenTag::SystemInfo,
        ScreenTag::DefaultWatchFace,
        TransitionEffect::None,
    );
    graph.add_swipe_transition(
        ScreenTag::SystemInfo,
        ScreenTag::Previous,
        SwipeDirection::Right,
    );

    // Transitions from the settings menu.
    graph.add_button_transition(
        ScreenTag::Settings,
        ScreenTag::DefaultWatchFace,
        TransitionEffect::None,
    );
    graph.add_swipe_transition(
        ScreenTag::Settings,
        ScreenTag::DefaultWatchFace,
        SwipeDirection::Down,
    );

    // Transitions from the brightness screen.
    graph.add_button_transition(
        ScreenTag::Brightness,
        ScreenTag::DefaultWatchFace,
        TransitionEffect::None,
    );
    graph.add_swipe_transition(
        ScreenTag::Brightness,
        ScreenTag::Previous,
        SwipeDirection::Right,
    );

    // Transitions from the wake-up mode screen.
    graph.add_button_transition(
        ScreenTag::WakeUpMode,
        ScreenTag::DefaultWatchFace,
        TransitionEffect::None,
    );
    graph.add_swipe_transition(
        ScreenTag::WakeUpMode,
        ScreenTag::Previous,
        SwipeDirection::Right,
    );

    // Transitions from the steps goal screen.
    graph.add_button_transition(
        ScreenTag::StepsGoal,
        ScreenTag::DefaultWatchFace,
        TransitionEffect::None,
    );
    graph.add_swipe_transition(
        ScreenTag::StepsGoal,
        ScreenTag::Previous,
        SwipeDirection::Right,
    );

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::{
        MockBle, MockBrightness, MockClock, MockPower, MockRefresh, MockSettings, MockTicks,
        MockValidator,
    };

    struct Mocks {
        settings: MockSettings,
        clock: MockClock,
        power: MockPower,
        ble: MockBle,
        brightness: MockBrightness,
        validator: MockValidator,
        refresh: MockRefresh,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                settings: MockSettings::new(),
                clock: MockClock::new(),
                power: MockPower::new(75),
                ble: MockBle::new(),
                brightness: MockBrightness::new(),
                validator: MockValidator::new(),
                refresh: MockRefresh::new(),
            }
        }
    }

    fn graph<'a>(
        mocks: &'a mut Mocks,
        ticks: &'a MockTicks,
    ) -> ScreenGraph<'a, DefaultScreenFactory> {
        let components = Components {
            settings: &mut mocks.settings,
            clock: &mocks.clock,
            power: &mocks.power,
            ble: &mocks.ble,
            brightness: &mut mocks.brightness,
            validator: &mut mocks.validator,
        };
        default_screen_graph(components, &mut mocks.refresh, ticks)
    }

    #[test]
    fn test_boots_to_default_watch_face() {
        let ticks = MockTicks::new(10_000);
        let mut mocks = Mocks::new();
        let mut graph = graph(&mut mocks, &ticks);
        graph.handle_refresh();
        assert_eq!(graph.current_tag(), ScreenTag::UtilityWatchFace);
    }

    #[test]
    fn test_face_carousel_cycles_left() {
        let ticks = MockTicks::new(10_000);
        let mut mocks = Mocks::new();
        let mut graph = graph(&mut mocks, &ticks);
        graph.handle_refresh();

        assert!(graph.handle_swipe(SwipeDirection::Left));
        assert_eq!(graph.current_tag(), ScreenTag::InfographWatchFace);
        assert!(graph.handle_swipe(SwipeDirection::Left));
        assert_eq!(graph.current_tag(), ScreenTag::BinaryWatchFace);
        assert!(graph.handle_swipe(SwipeDirection::Left));
        assert_eq!(graph.current_tag(), ScreenTag::UtilityWatchFace);
    }

    #[test]
    fn test_swipe_up_opens_settings_menu() {
        let ticks = MockTicks::new(10_000);
        let mut mocks = Mocks::new();
        let mut graph = graph(&mut mocks, &ticks);
        graph.handle_refresh();

        assert!(graph.handle_swipe(SwipeDirection::Up));
        assert_eq!(graph.current_tag(), ScreenTag::Settings);
    }

    #[test]
    fn test_settings_menu_pages_then_exits_down() {
        let ticks = MockTicks::new(10_000);
        let mut mocks = Mocks::new();
        let mut graph = graph(&mut mocks, &ticks);
        graph.handle_refresh();
        assert!(graph.handle_swipe(SwipeDirection::Up));
        assert_eq!(graph.current_tag(), ScreenTag::Settings);

        // Page 1 -> 2 is handled inside the menu.
        assert!(graph.handle_swipe(SwipeDirection::Up));
        assert_eq!(graph.current_tag(), ScreenTag::Settings);
        let page = graph.current_screen().map(Screen::current_page);
        assert_eq!(page, Some(2));

        // Down pages back; on page 1 the next Down leaves to the face.
        assert!(graph.handle_swipe(SwipeDirection::Down));
        assert!(graph.handle_swipe(SwipeDirection::Down));
        assert_eq!(graph.current_tag(), ScreenTag::UtilityWatchFace);
    }

    #[test]
    fn test_locked_face_blocks_navigation() {
        let ticks = MockTicks::new(10_000);
        let mut mocks = Mocks::new();
        let mut graph = graph(&mut mocks, &ticks);
        graph.handle_refresh();

        // Lock the face with the button.
        assert!(graph.handle_button_press());
        // Swipes are absorbed: still on the face, no switch.
        assert!(graph.handle_swipe(SwipeDirection::Left));
        assert_eq!(graph.current_tag(), ScreenTag::UtilityWatchFace);
        assert!(graph.handle_swipe(SwipeDirection::Up));
        assert_eq!(graph.current_tag(), ScreenTag::UtilityWatchFace);
    }
}
