//! Infographic face: large digital time plus data rings.
//!
//! Unlike the analog face this one shows no seconds, so its time region
//! only redraws when the hour or minute changes.

use crate::tags::ScreenTag;
use crate::watch_face::{WatchFaceCore, WatchFaceHooks};

/// Render state for the infographic face.
pub struct InfographFace {
    time_dirty: bool,
    date_dirty: bool,
    battery_ring_dirty: bool,
    status_dirty: bool,
}

impl InfographFace {
    /// Fresh face with everything pending a first draw.
    #[must_use]
    pub fn new() -> Self {
        Self {
            time_dirty: true,
            date_dirty: true,
            battery_ring_dirty: true,
            status_dirty: true,
        }
    }

    /// Whether the digital time needs a redraw; clears the flag.
    pub fn take_time_dirty(&mut self) -> bool {
        core::mem::take(&mut self.time_dirty)
    }

    /// Whether the date line needs a redraw; clears the flag.
    pub fn take_date_dirty(&mut self) -> bool {
        core::mem::take(&mut self.date_dirty)
    }

    /// Whether the battery ring needs a redraw; clears the flag.
    pub fn take_battery_ring_dirty(&mut self) -> bool {
        core::mem::take(&mut self.battery_ring_dirty)
    }

    /// Whether the status row needs a redraw; clears the flag.
    pub fn take_status_dirty(&mut self) -> bool {
        core::mem::take(&mut self.status_dirty)
    }
}

impl Default for InfographFace {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchFaceHooks for InfographFace {
    fn tag(&self) -> ScreenTag {
        ScreenTag::InfographWatchFace
    }

    fn day_changed(&mut self, _core: &WatchFaceCore, _year_changed: bool, _month_changed: bool) {
        self.date_dirty = true;
    }

    fn time_changed(&mut self, _core: &WatchFaceCore, hour_changed: bool, minute_changed: bool) {
        if hour_changed || minute_changed {
            self.time_dirty = true;
        }
    }

    fn locked_changed(&mut self, _core: &WatchFaceCore) {
        self.status_dirty = true;
    }

    fn battery_percent_changed(&mut self, _core: &WatchFaceCore) {
        self.battery_ring_dirty = true;
    }

    fn power_present_changed(&mut self, _core: &WatchFaceCore) {
        self.status_dirty = true;
    }

    fn ble_connected_changed(&mut self, _core: &WatchFaceCore) {
        self.status_dirty = true;
    }
}
