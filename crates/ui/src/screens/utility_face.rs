//! Analog utility face: hands, date window, battery arc, status symbols.

use crate::tags::ScreenTag;
use crate::watch_face::{WatchFaceCore, WatchFaceHooks};

/// Render state for the analog utility face.
///
/// The renderer consumes the dirty flags with the `take_*` methods and
/// redraws only the affected regions.
pub struct UtilityFace {
    hands_dirty: bool,
    date_dirty: bool,
    battery_dirty: bool,
    symbols_dirty: bool,
    lock_dirty: bool,
}

impl UtilityFace {
    /// Fresh face with everything pending a first draw.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hands_dirty: true,
            date_dirty: true,
            battery_dirty: true,
            symbols_dirty: true,
            lock_dirty: true,
        }
    }

    /// Whether the hands need a redraw; clears the flag.
    pub fn take_hands_dirty(&mut self) -> bool {
        core::mem::take(&mut self.hands_dirty)
    }

    /// Whether the date window needs a redraw; clears the flag.
    pub fn take_date_dirty(&mut self) -> bool {
        core::mem::take(&mut self.date_dirty)
    }

    /// Whether the battery arc needs a redraw; clears the flag.
    pub fn take_battery_dirty(&mut self) -> bool {
        core::mem::take(&mut self.battery_dirty)
    }

    /// Whether the power/BLE symbols need a redraw; clears the flag.
    pub fn take_symbols_dirty(&mut self) -> bool {
        core::mem::take(&mut self.symbols_dirty)
    }

    /// Whether the lock symbol needs a redraw; clears the flag.
    pub fn take_lock_dirty(&mut self) -> bool {
        core::mem::take(&mut self.lock_dirty)
    }
}

impl Default for UtilityFace {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchFaceHooks for UtilityFace {
    fn tag(&self) -> ScreenTag {
        ScreenTag::UtilityWatchFace
    }

    fn day_changed(&mut self, _core: &WatchFaceCore, _year_changed: bool, _month_changed: bool) {
        self.date_dirty = true;
    }

    fn time_changed(&mut self, _core: &WatchFaceCore, _hour_changed: bool, _minute_changed: bool) {
        // The second hand moves every tick, so any time change redraws the
        // hands.
        self.hands_dirty = true;
    }

    fn locked_changed(&mut self, _core: &WatchFaceCore) {
        self.lock_dirty = true;
    }

    fn battery_percent_changed(&mut self, _core: &WatchFaceCore) {
        self.battery_dirty = true;
    }

    fn power_present_changed(&mut self, _core: &WatchFaceCore) {
        self.symbols_dirty = true;
    }

    fn ble_connected_changed(&mut self, _core: &WatchFaceCore) {
        self.symbols_dirty = true;
    }
}
