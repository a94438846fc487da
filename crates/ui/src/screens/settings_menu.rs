//! Settings menu: a paged list of rows, each leading to a child screen.

use heapless::Vec;

use crate::page::PageState;
use crate::screen::{Screen, ScreenContext};
use crate::tags::ScreenTag;
use crate::transition::TransitionEffect;

/// Rows shown per menu page.
pub const MENU_ROWS_PER_PAGE: u8 = 3;

const MAX_ROWS: usize = 12;

/// Icon shown next to a menu row. The renderer maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuIcon {
    /// Brightness.
    Sun,
    /// Wake-up behaviour.
    Bed,
    /// Activity goal.
    Walking,
    /// System information.
    Info,
    /// Firmware validation.
    FloppyDisk,
}

/// One row of the settings menu.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuRow {
    /// Icon glyph.
    pub icon: MenuIcon,
    /// Row label.
    pub label: &'static str,
    /// Screen activated when the row is selected.
    pub destination: ScreenTag,
}

/// The settings menu screen.
pub struct SettingsMenuScreen {
    pages: PageState,
    rows: Vec<MenuRow, MAX_ROWS>,
}

impl SettingsMenuScreen {
    /// Menu with the standard row set.
    #[must_use]
    pub fn new() -> Self {
        let mut menu = Self {
            pages: PageState::new(),
            rows: Vec::new(),
        };
        menu.add_row(MenuIcon::Sun, "Brightness", ScreenTag::Brightness);
        menu.add_row(MenuIcon::Bed, "Wake up", ScreenTag::WakeUpMode);
        menu.add_row(MenuIcon::Walking, "Activity goal", ScreenTag::StepsGoal);
        menu.add_row(MenuIcon::Info, "System info", ScreenTag::SystemInfo);
        menu.add_row(
            MenuIcon::FloppyDisk,
            "Validate firmware",
            ScreenTag::FirmwareValidation,
        );
        menu
    }

    /// Append a row; silently dropped when the menu is full.
    pub fn add_row(&mut self, icon: MenuIcon, label: &'static str, destination: ScreenTag) {
        let _ = self.rows.push(MenuRow {
            icon,
            label,
            destination,
        });
    }

    /// Rows belonging to the current page, top to bottom.
    pub fn rows_on_current_page(&self) -> impl Iterator<Item = &MenuRow> {
        let page = self.current_page();
        self.rows
            .iter()
            .enumerate()
            .filter(move |(i, _)| Self::page_of_row(*i) == page)
            .map(|(_, row)| row)
    }

    /// Activate the destination of the `row`-th visible row (0-based) on
    /// the current page. Out-of-range rows do nothing.
    pub fn select_row(&mut self, row: u8, ctx: &mut ScreenContext<'_, '_>) {
        if row >= MENU_ROWS_PER_PAGE {
            return;
        }
        let page = self.current_page();
        let index = usize::from(page.saturating_sub(1))
            .saturating_mul(usize::from(MENU_ROWS_PER_PAGE))
            .saturating_add(usize::from(row));
        if let Some(target) = self.rows.get(index) {
            ctx.activate_screen(target.destination, TransitionEffect::MoveLeft);
        }
    }

    /// 1-based page a row index lives on.
    fn page_of_row(index: usize) -> u8 {
        let page = index / usize::from(MENU_ROWS_PER_PAGE);
        u8::try_from(page).unwrap_or(u8::MAX).saturating_add(1)
    }
}

impl Default for SettingsMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SettingsMenuScreen {
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
        match self.rows.len() {
            0 => 1,
            n => Self::page_of_row(n.saturating_sub(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::WatchFaceDirectory;
    use platform::mocks::{
        MockBle, MockBrightness, MockClock, MockPower, MockSettings, MockTicks, MockValidator,
    };
    use platform::Components;

    #[test]
    fn test_five_rows_make_two_pages() {
        let menu = SettingsMenuScreen::new();
        assert!(menu.is_multi_page());
        assert_eq!(menu.page_count(), 2);
    }

    #[test]
    fn test_rows_split_across_pages() {
        let mut menu = SettingsMenuScreen::new();
        assert!(menu.set_current_page(1));
        let first: heapless::Vec<&str, 4> =
            menu.rows_on_current_page().map(|row| row.label).collect();
        assert_eq!(first.as_slice(), &["Brightness", "Wake up", "Activity goal"]);

        assert!(menu.set_current_page(2));
        let second: heapless::Vec<&str, 4> =
            menu.rows_on_current_page().map(|row| row.label).collect();
        assert_eq!(second.as_slice(), &["System info", "Validate firmware"]);
    }

    #[test]
    fn test_select_row_requests_activation() {
        struct NoFaces;
        impl WatchFaceDirectory for NoFaces {
            fn watch_face_by_index(&self, _index: u8) -> crate::tags::ScreenTag {
                crate::tags::ScreenTag::None
            }
        }

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

        let mut menu = SettingsMenuScreen::new();
        menu.set_current_page(2);

        let mut pending = None;
        {
            let mut ctx = ScreenContext::new(&mut components, &ticks, &NoFaces, &mut pending);
            // Second row of page 2 is "Validate firmware".
            menu.select_row(1, &mut ctx);
        }
        assert_eq!(
            pending.map(|p| p.tag),
            Some(crate::tags::ScreenTag::FirmwareValidation)
        );

        // A row past the end of the page does nothing.
        let mut pending = None;
        {
            let mut ctx = ScreenContext::new(&mut components, &ticks, &NoFaces, &mut pending);
            menu.select_row(2, &mut ctx);
        }
        assert!(pending.is_none());
    }
}
