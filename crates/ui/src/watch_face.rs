//! Watch-face layer: per-tick diffing and gesture locking.
//!
//! Redrawing every widget on every tick is wasteful on a battery-powered
//! device, so watch faces track the last observed clock/battery/BLE state
//! and notify their hooks only about the fields that actually changed.
//!
//! Faces are composed, not subclassed: a concrete face supplies a
//! [`WatchFaceHooks`] value and [`WatchFace`] wraps it together with the
//! shared [`WatchFaceCore`] state, implementing the full [`Screen`]
//! contract on the pair.

use platform::{Components, DateTimeSnapshot, Month, SwipeDirection, Weekday};

use crate::page::PageState;
use crate::screen::{Screen, ScreenContext};
use crate::tags::ScreenTag;

/// Shared watch-face state: the last observed snapshot plus the lock flag.
pub struct WatchFaceCore {
    pages: PageState,
    date_time: DateTimeSnapshot,
    battery_percent: u8,
    power_present: bool,
    ble_connected: bool,
    locked: bool,
    first_refresh: bool,
}

impl WatchFaceCore {
    /// Snapshot the collaborators' current state.
    #[must_use]
    pub fn new(components: &Components<'_>) -> Self {
        Self {
            pages: PageState::new(),
            date_time: components.clock.date_time(),
            battery_percent: components.power.battery_percent(),
            power_present: components.power.is_power_present(),
            ble_connected: components.ble.is_connected(),
            locked: false,
            first_refresh: true,
        }
    }

    /// Year of the last observed snapshot.
    #[must_use]
    pub fn year(&self) -> u16 {
        self.date_time.year
    }

    /// Month of the last observed snapshot.
    #[must_use]
    pub fn month(&self) -> Month {
        self.date_time.month
    }

    /// Weekday of the last observed snapshot.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date_time.weekday
    }

    /// Day of month of the last observed snapshot.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.date_time.day
    }

    /// Hour of the last observed snapshot.
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.date_time.hour
    }

    /// Minute of the last observed snapshot.
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.date_time.minute
    }

    /// Second of the last observed snapshot.
    #[must_use]
    pub fn second(&self) -> u8 {
        self.date_time.second
    }

    /// Battery charge of the last observed snapshot.
    #[must_use]
    pub fn battery_percent(&self) -> u8 {
        self.battery_percent
    }

    /// Charger presence of the last observed snapshot.
    #[must_use]
    pub fn power_present(&self) -> bool {
        self.power_present
    }

    /// BLE link state of the last observed snapshot.
    #[must_use]
    pub fn ble_connected(&self) -> bool {
        self.ble_connected
    }

    /// Whether gestures are currently absorbed.
    #[must_use]
    pub fn locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn page_state(&self) -> &PageState {
        &self.pages
    }

    pub(crate) fn page_state_mut(&mut self) -> &mut PageState {
        &mut self.pages
    }
}

/// Change hooks a concrete watch face implements.
///
/// Every hook receives the core with the *new* values already applied.
/// Defaults are empty so faces only override what they display.
pub trait WatchFaceHooks {
    /// Tag under which this face registers itself as the default.
    fn tag(&self) -> ScreenTag;

    /// Day, month or year changed.
    fn day_changed(&mut self, core: &WatchFaceCore, year_changed: bool, month_changed: bool) {
        let _ = (core, year_changed, month_changed);
    }

    /// Hour, minute or second changed.
    fn time_changed(&mut self, core: &WatchFaceCore, hour_changed: bool, minute_changed: bool) {
        let _ = (core, hour_changed, minute_changed);
    }

    /// The lock flag flipped.
    fn locked_changed(&mut self, core: &WatchFaceCore) {
        let _ = core;
    }

    /// Battery percentage changed.
    fn battery_percent_changed(&mut self, core: &WatchFaceCore) {
        let _ = core;
    }

    /// Charger was attached or detached.
    fn power_present_changed(&mut self, core: &WatchFaceCore) {
        let _ = core;
    }

    /// BLE link came up or went down.
    fn ble_connected_changed(&mut self, core: &WatchFaceCore) {
        let _ = core;
    }
}

/// A watch face: shared diffing state plus face-specific hooks.
pub struct WatchFace<H: WatchFaceHooks> {
    core: WatchFaceCore,
    hooks: H,
}

impl<H: WatchFaceHooks> WatchFace<H> {
    /// Build a face, snapshotting the collaborators' current state.
    pub fn new(components: &Components<'_>, hooks: H) -> Self {
        Self {
            core: WatchFaceCore::new(components),
            hooks,
        }
    }

    /// Shared face state.
    #[must_use]
    pub fn core(&self) -> &WatchFaceCore {
        &self.core
    }

    /// Face-specific hook state.
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the face-specific hook state.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }
}

impl<H: WatchFaceHooks> Screen for WatchFace<H> {
    fn page_state(&self) -> &PageState {
        self.core.page_state()
    }

    fn page_state_mut(&mut self) -> &mut PageState {
        self.core.page_state_mut()
    }

    fn refresh(&mut self, ctx: &mut ScreenContext<'_, '_>) {
        let Self { core, hooks } = self;

        // Store this face as the user's default on the first tick, exactly
        // once per instance.
        if core.first_refresh {
            ctx.set_default_watch_face(hooks.tag());
            core.first_refresh = false;
        }

        let date_time = ctx.components.clock.date_time();
        let battery_percent = ctx.components.power.battery_percent();
        let power_present = ctx.components.power.is_power_present();
        let ble_connected = ctx.components.ble.is_connected();

        let year_changed = date_time.year != core.date_time.year;
        let month_changed = date_time.month != core.date_time.month;
        let day_changed = date_time.day != core.date_time.day || month_changed || year_changed;
        let hour_changed = date_time.hour != core.date_time.hour;
        let minute_changed = date_time.minute != core.date_time.minute;
        let time_changed =
            hour_changed || minute_changed || date_time.second != core.date_time.second;
        let battery_changed = battery_percent != core.battery_percent;
        let power_changed = power_present != core.power_present;
        let ble_changed = ble_connected != core.ble_connected;

        // Hooks observe the updated values through the core.
        core.date_time = date_time;
        core.battery_percent = battery_percent;
        core.power_present = power_present;
        core.ble_connected = ble_connected;

        if day_changed {
            hooks.day_changed(core, year_changed, month_changed);
        }
        if time_changed {
            hooks.time_changed(core, hour_changed, minute_changed);
        }
        if battery_changed {
            hooks.battery_percent_changed(core);
        }
        if power_changed {
            hooks.power_present_changed(core);
        }
        if ble_changed {
            hooks.ble_connected_changed(core);
        }
    }

    fn handle_button_press(&mut self, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        // The side button toggles the gesture lock; the press itself is
        // always consumed.
        let Self { core, hooks } = self;
        core.locked = !core.locked;
        hooks.locked_changed(core);
        true
    }

    fn handle_tap(&mut self, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        self.core.locked
    }

    fn handle_long_tap(&mut self, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        self.core.locked
    }

    fn handle_double_tap(&mut self, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        self.core.locked
    }

    fn handle_swipe(&mut self, _direction: SwipeDirection, _ctx: &mut ScreenContext<'_, '_>) -> bool {
        self.core.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::WatchFaceDirectory;
    use platform::mocks::{
        MockBle, MockBrightness, MockClock, MockPower, MockSettings, MockTicks, MockValidator,
    };
    use platform::Settings;

    /// Hook probe counting every notification it receives.
    #[derive(Default)]
    struct CountingHooks {
        day: usize,
        time: usize,
        battery: usize,
        power: usize,
        ble: usize,
        locked: usize,
        last_hour_changed: bool,
        last_minute_changed: bool,
    }

    impl WatchFaceHooks for CountingHooks {
        fn tag(&self) -> ScreenTag {
            ScreenTag::UtilityWatchFace
        }

        fn day_changed(&mut self, _core: &WatchFaceCore, _year: bool, _month: bool) {
            self.day += 1;
        }

        fn time_changed(&mut self, _core: &WatchFaceCore, hour: bool, minute: bool) {
            self.time += 1;
            self.last_hour_changed = hour;
            self.last_minute_changed = minute;
        }

        fn locked_changed(&mut self, _core: &WatchFaceCore) {
            self.locked += 1;
        }

        fn battery_percent_changed(&mut self, _core: &WatchFaceCore) {
            self.battery += 1;
        }

        fn power_present_changed(&mut self, _core: &WatchFaceCore) {
            self.power += 1;
        }

        fn ble_connected_changed(&mut self, _core: &WatchFaceCore) {
            self.ble += 1;
        }
    }

    struct Directory;

    impl WatchFaceDirectory for Directory {
        fn watch_face_by_index(&self, index: u8) -> ScreenTag {
            match index {
                0 => ScreenTag::UtilityWatchFace,
                1 => ScreenTag::InfographWatchFace,
                _ => ScreenTag::None,
            }
        }
    }

    struct Mocks {
        settings: MockSettings,
        clock: MockClock,
        power: MockPower,
        ble: MockBle,
        brightness: MockBrightness,
        validator: MockValidator,
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
            }
        }

        fn components(&mut self) -> Components<'_> {
            Components {
                settings: &mut self.settings,
                clock: &self.clock,
                power: &self.power,
                ble: &self.ble,
                brightness: &mut self.brightness,
                validator: &mut self.validator,
            }
        }
    }

    fn drive_refresh(face: &mut WatchFace<CountingHooks>, mocks: &mut Mocks, ticks: &MockTicks) {
        let mut components = mocks.components();
        let mut pending = None;
        let mut ctx = ScreenContext::new(&mut components, ticks, &Directory, &mut pending);
        face.refresh(&mut ctx);
    }

    fn drive_button(face: &mut WatchFace<CountingHooks>, mocks: &mut Mocks, ticks: &MockTicks) -> bool {
        let mut components = mocks.components();
        let mut pending = None;
        let mut ctx = ScreenContext::new(&mut components, ticks, &Directory, &mut pending);
        face.handle_button_press(&mut ctx)
    }

    fn drive_gestures(
        face: &mut WatchFace<CountingHooks>,
        mocks: &mut Mocks,
        ticks: &MockTicks,
    ) -> [bool; 4] {
        let mut components = mocks.components();
        let mut pending = None;
        let mut ctx = ScreenContext::new(&mut components, ticks, &Directory, &mut pending);
        [
            face.handle_tap(&mut ctx),
            face.handle_long_tap(&mut ctx),
            face.handle_double_tap(&mut ctx),
            face.handle_swipe(SwipeDirection::Left, &mut ctx),
        ]
    }

    #[test]
    fn test_first_refresh_registers_default_face_once() {
        let ticks = MockTicks::new(0);
        let mut mocks = Mocks::new();
        mocks.settings.set_clock_face(1);
        let mut face = WatchFace::new(&mocks.components(), CountingHooks::default());

        drive_refresh(&mut face, &mut mocks, &ticks);
        assert_eq!(mocks.settings.clock_face(), 0, "utility face is index 0");

        // Changing the setting externally must stick: registration happens
        // only on the first refresh of an instance.
        mocks.settings.set_clock_face(1);
        drive_refresh(&mut face, &mut mocks, &ticks);
        assert_eq!(mocks.settings.clock_face(), 1);
    }

    #[test]
    fn test_quiet_tick_fires_no_hooks() {
        let ticks = MockTicks::new(0);
        let mut mocks = Mocks::new();
        let mut face = WatchFace::new(&mocks.components(), CountingHooks::default());

        drive_refresh(&mut face, &mut mocks, &ticks);
        let hooks = face.hooks();
        assert_eq!(hooks.day, 0);
        assert_eq!(hooks.time, 0);
        assert_eq!(hooks.battery, 0);
        assert_eq!(hooks.power, 0);
        assert_eq!(hooks.ble, 0);
    }

    #[test]
    fn test_second_tick_fires_time_hook_only() {
        let ticks = MockTicks::new(0);
        let mut mocks = Mocks::new();
        let mut face = WatchFace::new(&mocks.components(), CountingHooks::default());

        let mut now = mocks.clock.get();
        now.second = now.second.wrapping_add(1);
        mocks.clock.set(now);

        drive_refresh(&mut face, &mut mocks, &ticks);
        let hooks = face.hooks();
        assert_eq!(hooks.time, 1);
        assert!(!hooks.last_hour_changed);
        assert!(!hooks.last_minute_changed);
        assert_eq!(hooks.day, 0);
    }

    #[test]
    fn test_midnight_rollover_fires_day_and_time() {
        let ticks = MockTicks::new(0);
        let mut mocks = Mocks::new();
        let mut face = WatchFace::new(&mocks.components(), CountingHooks::default());

        let mut now = mocks.clock.get();
        now.day += 1;
        now.hour = 0;
        now.minute = 0;
        now.second = 0;
        mocks.clock.set(now);

        drive_refresh(&mut face, &mut mocks, &ticks);
        let hooks = face.hooks();
        assert_eq!(hooks.day, 1);
        assert_eq!(hooks.time, 1);
        assert!(hooks.last_hour_changed);
        assert!(hooks.last_minute_changed);
    }

    #[test]
    fn test_battery_and_link_hooks_fire_independently() {
        let ticks = MockTicks::new(0);
        let mut mocks = Mocks::new();
        let mut face = WatchFace::new(&mocks.components(), CountingHooks::default());

        mocks.power.set_percent(74);
        drive_refresh(&mut face, &mut mocks, &ticks);
        assert_eq!(face.hooks().battery, 1);
        assert_eq!(face.hooks().power, 0);

        mocks.power.set_power_present(true);
        mocks.ble.set_connected(true);
        drive_refresh(&mut face, &mut mocks, &ticks);
        assert_eq!(face.hooks().battery, 1);
        assert_eq!(face.hooks().power, 1);
        assert_eq!(face.hooks().ble, 1);
    }

    #[test]
    fn test_button_toggles_lock_and_absorbs_gestures() {
        let ticks = MockTicks::new(0);
        let mut mocks = Mocks::new();
        let mut face = WatchFace::new(&mocks.components(), CountingHooks::default());

        // Unlocked: gestures fall through to the transition table.
        assert_eq!(
            drive_gestures(&mut face, &mut mocks, &ticks),
            [false; 4]
        );

        // Lock: the press is consumed and the hook fires.
        assert!(drive_button(&mut face, &mut mocks, &ticks));
        assert!(face.core().locked());
        assert_eq!(face.hooks().locked, 1);

        // Locked: everything is reported consumed without acting.
        assert_eq!(drive_gestures(&mut face, &mut mocks, &ticks), [true; 4]);

        // Diffing still runs while locked.
        mocks.power.set_percent(50);
        drive_refresh(&mut face, &mut mocks, &ticks);
        assert_eq!(face.hooks().battery, 1);

        // Unlock again.
        assert!(drive_button(&mut face, &mut mocks, &ticks));
        assert!(!face.core().locked());
        assert_eq!(face.hooks().locked, 2);
        assert_eq!(
            drive_gestures(&mut face, &mut mocks, &ticks),
            [false; 4]
        );
    }
}
