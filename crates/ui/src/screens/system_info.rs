//! System information: four read-only pages.

use embedded_graphics::pixelcolor::Rgb565;

use crate::graph::REFRESH_THROTTLE_TICKS;
use crate::page::PageState;
use crate::screen::{Screen, ScreenContext};

/// Firmware version string baked in at build time.
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

const PAGES: u8 = 4;

/// What a system-info page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InfoPage {
    /// Firmware version and build info.
    Version,
    /// Live device status (battery, charger, BLE, uptime).
    Status,
    /// Date and time as currently kept by the device.
    DateTime,
    /// License notice.
    License,
}

/// The system information screen.
///
/// The status page holds live values, re-read at most once per
/// [`REFRESH_THROTTLE_TICKS`] to bound the I/O cost of the tick handler.
pub struct SystemInfoScreen {
    pages: PageState,
    last_update_ticks: u32,
    battery_percent: u8,
    power_present: bool,
    ble_connected: bool,
    status_dirty: bool,
}

impl SystemInfoScreen {
    /// Fresh screen; live values are populated on the first refresh.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: PageState::new(),
            last_update_ticks: 0,
            battery_percent: 0,
            power_present: false,
            ble_connected: false,
            status_dirty: true,
        }
    }

    /// Topic of the `page`-th page (1-based).
    #[must_use]
    pub fn page_topic(page: u8) -> Option<InfoPage> {
        match page {
            1 => Some(InfoPage::Version),
            2 => Some(InfoPage::Status),
            3 => Some(InfoPage::DateTime),
            4 => Some(InfoPage::License),
            _ => None,
        }
    }

    /// Last sampled battery percentage.
    #[must_use]
    pub fn battery_percent(&self) -> u8 {
        self.battery_percent
    }

    /// Last sampled charger presence.
    #[must_use]
    pub fn power_present(&self) -> bool {
        self.power_present
    }

    /// Last sampled BLE link state.
    #[must_use]
    pub fn ble_connected(&self) -> bool {
        self.ble_connected
    }

    /// Whether the status page needs a redraw; clears the flag.
    pub fn take_status_dirty(&mut self) -> bool {
        core::mem::take(&mut self.status_dirty)
    }
}

impl Default for SystemInfoScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SystemInfoScreen {
    fn page_state(&self) -> &PageState {
        &self.pages
    }

    fn page_state_mut(&mut self) -> &mut PageState {
        &mut self.pages
    }

    fn is_multi_page(&self) -> bool {
        true
    }

    fn page_count(&self) -> u8 {
        PAGES
    }

    fn foreground_color(&self) -> Rgb565 {
        // Label column is dimmed; values are drawn in the default white.
        Rgb565::new(16, 32, 16)
    }

    fn refresh(&mut self, ctx: &mut ScreenContext<'_, '_>) {
        // Don't re-sample too often.
        let now = ctx.ticks();
        if now.wrapping_sub(self.last_update_ticks) <= REFRESH_THROTTLE_TICKS {
            return;
        }
        self.last_update_ticks = now;

        // Only the status page shows live values.
        if Self::page_topic(self.current_page()) != Some(InfoPage::Status) {
            return;
        }

        let battery_percent = ctx.components.power.battery_percent();
        let power_present = ctx.components.power.is_power_present();
        let ble_connected = ctx.components.ble.is_connected();
        if battery_percent != self.battery_percent
            || power_present != self.power_present
            || ble_connected != self.ble_connected
        {
            self.battery_percent = battery_percent;
            self.power_present = power_present;
            self.ble_connected = ble_connected;
            self.status_dirty = true;
        }
    }
}
