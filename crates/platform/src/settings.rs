//! Persisted user settings.
//!
//! The store keeps a RAM copy of every value; writes are expected to return
//! quickly and be flushed to flash by the storage task, so none of these
//! accessors are fallible or blocking.

/// Backlight brightness levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrightnessLevel {
    /// Dimmest usable level.
    Low,
    /// Default level.
    Medium,
    /// Brightest level.
    High,
}

/// Gestures that may wake the device from display-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeUpMode {
    /// Wake on a single tap.
    SingleTap,
    /// Wake on a double tap.
    DoubleTap,
    /// Wake when the wrist is raised.
    RaiseWrist,
}

/// Persisted per-user preferences.
pub trait Settings {
    /// Index of the watch face shown by default, see
    /// the navigation core's watch-face directory for the mapping.
    fn clock_face(&self) -> u8;

    /// Persist the default watch face index.
    fn set_clock_face(&mut self, index: u8);

    /// Current backlight brightness preference.
    fn brightness(&self) -> BrightnessLevel;

    /// Persist the backlight brightness preference.
    fn set_brightness(&mut self, level: BrightnessLevel);

    /// Daily activity goal in steps.
    fn steps_goal(&self) -> u32;

    /// Persist the daily activity goal.
    fn set_steps_goal(&mut self, goal: u32);

    /// Whether the given wake-up gesture is enabled.
    fn is_wake_up_mode_on(&self, mode: WakeUpMode) -> bool;

    /// Enable or disable a wake-up gesture.
    fn set_wake_up_mode(&mut self, mode: WakeUpMode, enabled: bool);
}
