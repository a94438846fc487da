//! Mock implementations for testing
//!
//! In-memory implementations of every platform trait, for use in unit and
//! integration tests. Read-only collaborators use interior mutability so a
//! test can keep a shared handle and move time, battery, or link state
//! while the navigation core holds its own reference.

#![cfg(any(test, feature = "std"))]

use core::cell::Cell;

use crate::ble::{BleMonitor, FirmwareUpdateState};
use crate::brightness::BrightnessController;
use crate::clock::{Clock, DateTimeSnapshot, Month, Weekday};
use crate::power::PowerMonitor;
use crate::refresh::{FullRefreshDirection, FullRefreshProvider};
use crate::settings::{BrightnessLevel, Settings, WakeUpMode};
use crate::ticks::TickSource;
use crate::validator::{FirmwareValidator, ValidateError};

/// Mock tick counter advanced manually by tests.
pub struct MockTicks {
    now: Cell<u32>,
}

impl MockTicks {
    /// Create a counter starting at `start`.
    pub fn new(start: u32) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Advance the counter by `ticks`, wrapping at `u32::MAX`.
    pub fn advance(&self, ticks: u32) {
        self.now.set(self.now.get().wrapping_add(ticks));
    }

    /// Jump the counter to an absolute value.
    pub fn set(&self, ticks: u32) {
        self.now.set(ticks);
    }
}

impl TickSource for MockTicks {
    fn ticks(&self) -> u32 {
        self.now.get()
    }
}

/// Mock wall clock set directly by tests.
pub struct MockClock {
    now: Cell<DateTimeSnapshot>,
}

impl MockClock {
    /// Create a clock frozen at a fixed, arbitrary point in time.
    pub fn new() -> Self {
        Self {
            now: Cell::new(DateTimeSnapshot {
                year: 2025,
                month: Month::March,
                weekday: Weekday::Friday,
                day: 14,
                hour: 9,
                minute: 26,
                second: 53,
            }),
        }
    }

    /// Replace the current date and time.
    pub fn set(&self, snapshot: DateTimeSnapshot) {
        self.now.set(snapshot);
    }

    /// Current snapshot, for incremental edits in tests.
    pub fn get(&self) -> DateTimeSnapshot {
        self.now.get()
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn date_time(&self) -> DateTimeSnapshot {
        self.now.get()
    }
}

/// Mock battery monitor.
pub struct MockPower {
    percent: Cell<u8>,
    power_present: Cell<bool>,
}

impl MockPower {
    /// Create a monitor reporting the given charge, no charger attached.
    pub fn new(percent: u8) -> Self {
        Self {
            percent: Cell::new(percent),
            power_present: Cell::new(false),
        }
    }

    /// Change the reported charge percentage.
    pub fn set_percent(&self, percent: u8) {
        self.percent.set(percent);
    }

    /// Attach or detach the charger.
    pub fn set_power_present(&self, present: bool) {
        self.power_present.set(present);
    }
}

impl PowerMonitor for MockPower {
    fn battery_percent(&self) -> u8 {
        self.percent.get()
    }

    fn is_power_present(&self) -> bool {
        self.power_present.get()
    }
}

/// Mock BLE controller.
pub struct MockBle {
    connected: Cell<bool>,
    update_state: Cell<FirmwareUpdateState>,
    update_progress: Cell<u8>,
}

impl MockBle {
    /// Create a disconnected controller with no transfer in progress.
    pub fn new() -> Self {
        Self {
            connected: Cell::new(false),
            update_state: Cell::new(FirmwareUpdateState::Idle),
            update_progress: Cell::new(0),
        }
    }

    /// Connect or disconnect the mock central.
    pub fn set_connected(&self, connected: bool) {
        self.connected.set(connected);
    }

    /// Drive the mock DFU state machine.
    pub fn set_update_state(&self, state: FirmwareUpdateState) {
        self.update_state.set(state);
    }

    /// Set the mock transfer progress percentage.
    pub fn set_update_progress(&self, percent: u8) {
        self.update_progress.set(percent);
    }
}

impl Default for MockBle {
    fn default() -> Self {
        Self::new()
    }
}

impl BleMonitor for MockBle {
    fn is_connected(&self) -> bool {
        self.connected.get()
    }

    fn firmware_update_state(&self) -> FirmwareUpdateState {
        self.update_state.get()
    }

    fn firmware_update_progress(&self) -> u8 {
        self.update_progress.get()
    }
}

/// Mock settings store backed by plain fields.
pub struct MockSettings {
    clock_face: u8,
    brightness: BrightnessLevel,
    steps_goal: u32,
    wake_single_tap: bool,
    wake_double_tap: bool,
    wake_raise_wrist: bool,
}

impl MockSettings {
    /// Create a store with factory defaults.
    pub fn new() -> Self {
        Self {
            clock_face: 0,
            brightness: BrightnessLevel::Medium,
            steps_goal: 10_000,
            wake_single_tap: true,
            wake_double_tap: false,
            wake_raise_wrist: false,
        }
    }
}

impl Default for MockSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings for MockSettings {
    fn clock_face(&self) -> u8 {
        self.clock_face
    }

    fn set_clock_face(&mut self, index: u8) {
        self.clock_face = index;
    }

    fn brightness(&self) -> BrightnessLevel {
        self.brightness
    }

    fn set_brightness(&mut self, level: BrightnessLevel) {
        self.brightness = level;
    }

    fn steps_goal(&self) -> u32 {
        self.steps_goal
    }

    fn set_steps_goal(&mut self, goal: u32) {
        self.steps_goal = goal;
    }

    fn is_wake_up_mode_on(&self, mode: WakeUpMode) -> bool {
        match mode {
            WakeUpMode::SingleTap => self.wake_single_tap,
            WakeUpMode::DoubleTap => self.wake_double_tap,
            WakeUpMode::RaiseWrist => self.wake_raise_wrist,
        }
    }

    fn set_wake_up_mode(&mut self, mode: WakeUpMode, enabled: bool) {
        match mode {
            WakeUpMode::SingleTap => self.wake_single_tap = enabled,
            WakeUpMode::DoubleTap => self.wake_double_tap = enabled,
            WakeUpMode::RaiseWrist => self.wake_raise_wrist = enabled,
        }
    }
}

/// Mock backlight controller.
pub struct MockBrightness {
    level: BrightnessLevel,
}

impl MockBrightness {
    /// Create a controller driven at the default level.
    pub fn new() -> Self {
        Self {
            level: BrightnessLevel::Medium,
        }
    }
}

impl Default for MockBrightness {
    fn default() -> Self {
        Self::new()
    }
}

impl BrightnessController for MockBrightness {
    fn set(&mut self, level: BrightnessLevel) {
        self.level = level;
    }

    fn level(&self) -> BrightnessLevel {
        self.level
    }
}

/// Mock firmware validator.
pub struct MockValidator {
    validated: bool,
    fail_with: Option<ValidateError>,
    reset_count: usize,
}

impl MockValidator {
    /// Create a validator for a not-yet-validated image.
    pub fn new() -> Self {
        Self {
            validated: false,
            fail_with: None,
            reset_count: 0,
        }
    }

    /// Make subsequent `validate` calls fail with `error`.
    pub fn fail_with(&mut self, error: ValidateError) {
        self.fail_with = Some(error);
    }

    /// Number of times `reset` was called.
    pub fn reset_count(&self) -> usize {
        self.reset_count
    }
}

impl Default for MockValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FirmwareValidator for MockValidator {
    fn is_validated(&self) -> bool {
        self.validated
    }

    fn validate(&mut self) -> Result<(), ValidateError> {
        match self.fail_with {
            Some(error) => Err(error),
            None => {
                self.validated = true;
                Ok(())
            }
        }
    }

    fn reset(&mut self) {
        self.validated = false;
        self.reset_count = self.reset_count.saturating_add(1);
    }
}

/// Mock refresh-hint sink recording every hint it receives.
pub struct MockRefresh {
    hints: heapless::Vec<FullRefreshDirection, 32>,
}

impl MockRefresh {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            hints: heapless::Vec::new(),
        }
    }

    /// All hints received so far, oldest first.
    pub fn hints(&self) -> &[FullRefreshDirection] {
        &self.hints
    }

    /// Most recent hint, if any.
    pub fn last_hint(&self) -> Option<FullRefreshDirection> {
        self.hints.last().copied()
    }
}

impl Default for MockRefresh {
    fn default() -> Self {
        Self::new()
    }
}

impl FullRefreshProvider for MockRefresh {
    fn set_full_refresh(&mut self, direction: FullRefreshDirection) {
        // Recording is best effort; a full buffer drops the hint, which is
        // exactly what a saturated display queue would do.
        let _ = self.hints.push(direction);
    }
}
