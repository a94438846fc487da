//! Component container handed to the navigation core.
//!
//! Bundles mutable access to every collaborator a screen may touch, so the
//! navigation core can lend them out during input dispatch and refresh
//! without each screen naming its own borrow list.

use crate::ble::BleMonitor;
use crate::brightness::BrightnessController;
use crate::clock::Clock;
use crate::power::PowerMonitor;
use crate::settings::Settings;
use crate::validator::FirmwareValidator;

/// Borrowed handles to the system components the display layer consumes.
///
/// Read-only collaborators are shared references so tests can keep a handle
/// to the underlying mock and mutate it through interior mutability while
/// the container is alive; collaborators the screens write through are
/// exclusive.
pub struct Components<'a> {
    /// Persisted user settings.
    pub settings: &'a mut dyn Settings,
    /// Wall clock.
    pub clock: &'a dyn Clock,
    /// Battery state.
    pub power: &'a dyn PowerMonitor,
    /// BLE link and DFU state.
    pub ble: &'a dyn BleMonitor,
    /// Backlight control.
    pub brightness: &'a mut dyn BrightnessController,
    /// Firmware slot validation.
    pub validator: &'a mut dyn FirmwareValidator,
}
