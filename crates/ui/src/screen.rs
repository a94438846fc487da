//! The screen lifecycle contract and the context handed to screens.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use platform::{Components, SwipeDirection, TickSource};

use crate::graph::PendingSwitch;
use crate::page::PageState;
use crate::tags::ScreenTag;
use crate::transition::TransitionEffect;

/// Mapping from persisted watch-face indices to screen tags.
///
/// Implemented by the screen factory; the graph and the watch faces use it
/// to resolve and persist the "default watch face" setting.
pub trait WatchFaceDirectory {
    /// Tag of the watch face stored at `index`, or [`ScreenTag::None`] when
    /// the index maps to nothing.
    fn watch_face_by_index(&self, index: u8) -> ScreenTag;
}

/// Reverse lookup: first index whose forward mapping equals `tag`.
pub(crate) fn find_watch_face_index(
    directory: &dyn WatchFaceDirectory,
    tag: ScreenTag,
) -> Option<u8> {
    (0..=u8::MAX).find(|&index| directory.watch_face_by_index(index) == tag)
}

/// Constructs screens for the graph.
///
/// The factory is the one place that knows how to turn a concrete
/// [`ScreenTag`] into a live screen value; returning `None` leaves the
/// graph in its (tolerated) screenless state.
pub trait ScreenFactory: WatchFaceDirectory {
    /// The screen type this factory produces, typically an enum over all
    /// concrete screens.
    type Screen: Screen;

    /// Build the screen for `tag`. `None` for tags this factory does not
    /// know, including the pseudo-tags.
    fn create_screen(
        &mut self,
        tag: ScreenTag,
        components: &mut Components<'_>,
    ) -> Option<Self::Screen>;
}

/// Capabilities lent to a screen while one of its methods runs.
///
/// Carries the system components plus a narrow slice of the graph: the
/// pending-switch slot and the watch-face directory. This is how a screen
/// requests navigation without holding a reference back to the graph that
/// owns it.
pub struct ScreenContext<'r, 'c> {
    /// System collaborators (settings, clock, battery, BLE, ...).
    pub components: &'r mut Components<'c>,
    ticks: &'r dyn TickSource,
    directory: &'r dyn WatchFaceDirectory,
    pending: &'r mut Option<PendingSwitch>,
}

impl<'r, 'c> ScreenContext<'r, 'c> {
    pub(crate) fn new(
        components: &'r mut Components<'c>,
        ticks: &'r dyn TickSource,
        directory: &'r dyn WatchFaceDirectory,
        pending: &'r mut Option<PendingSwitch>,
    ) -> Self {
        Self {
            components,
            ticks,
            directory,
            pending,
        }
    }

    /// Current system tick count (milliseconds, wrapping).
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks.ticks()
    }

    /// Request a switch to `tag` on the next refresh tick, starting at
    /// page 1.
    pub fn activate_screen(&mut self, tag: ScreenTag, effect: TransitionEffect) {
        self.activate_screen_at(tag, 1, effect);
    }

    /// Request a switch to `tag` on the next refresh tick, starting at the
    /// given page. Requesting [`ScreenTag::None`] cancels a pending switch.
    pub fn activate_screen_at(&mut self, tag: ScreenTag, page: u8, effect: TransitionEffect) {
        *self.pending = if tag == ScreenTag::None {
            None
        } else {
            Some(PendingSwitch { tag, page, effect })
        };
    }

    /// Persist `tag` as the user's default watch face.
    ///
    /// A tag the directory does not map leaves the setting unchanged.
    pub fn set_default_watch_face(&mut self, tag: ScreenTag) {
        if let Some(index) = find_watch_face_index(self.directory, tag) {
            self.components.settings.set_clock_face(index);
        }
    }
}

/// A unit of UI with a lifecycle and an input-handling contract.
///
/// Construction happens in the [`ScreenFactory`]; destruction is the drop
/// of the screen value. Every input handler returns `true` when the screen
/// fully consumed the event, in which case the graph will not consult its
/// transition table.
pub trait Screen {
    /// Page position storage. Screens embed a [`PageState`] and hand it
    /// out here so the trait can provide the page protocol uniformly.
    fn page_state(&self) -> &PageState;

    /// Mutable access to the page position storage.
    fn page_state_mut(&mut self) -> &mut PageState;

    /// Whether the screen's content is split into sequential pages.
    fn is_multi_page(&self) -> bool {
        false
    }

    /// Number of pages; 1 for single-page screens.
    fn page_count(&self) -> u8 {
        1
    }

    /// Current page, 1-based. 0 until a page has been applied.
    fn current_page(&self) -> u8 {
        self.page_state().current()
    }

    /// Switch to page `page`.
    ///
    /// Fails (returns `false`, state unchanged) when the screen is not
    /// multi-page or `page` lies outside `1..=page_count()`. On success the
    /// page is recorded and [`Screen::page_changed`] runs so the screen can
    /// rebuild its per-page content.
    fn set_current_page(&mut self, page: u8) -> bool {
        if !self.is_multi_page() || page < 1 || page > self.page_count() {
            return false;
        }
        self.page_state_mut().set(page);
        self.page_changed();
        true
    }

    /// Hook invoked after the current page changed.
    fn page_changed(&mut self) {}

    /// Background color a renderer should clear to.
    fn background_color(&self) -> Rgb565 {
        Rgb565::BLACK
    }

    /// Default foreground color for the screen's content.
    fn foreground_color(&self) -> Rgb565 {
        Rgb565::WHITE
    }

    /// Periodic tick. Default no-op; screens doing non-trivial work here
    /// should throttle themselves (see [`crate::graph::REFRESH_THROTTLE_TICKS`]).
    fn refresh(&mut self, ctx: &mut ScreenContext<'_, '_>) {
        let _ = ctx;
    }

    /// Physical button press. `true` = consumed.
    fn handle_button_press(&mut self, ctx: &mut ScreenContext<'_, '_>) -> bool {
        let _ = ctx;
        false
    }

    /// Single tap. `true` = consumed.
    fn handle_tap(&mut self, ctx: &mut ScreenContext<'_, '_>) -> bool {
        let _ = ctx;
        false
    }

    /// Long press. `true` = consumed.
    fn handle_long_tap(&mut self, ctx: &mut ScreenContext<'_, '_>) -> bool {
        let _ = ctx;
        false
    }

    /// Double tap. `true` = consumed.
    fn handle_double_tap(&mut self, ctx: &mut ScreenContext<'_, '_>) -> bool {
        let _ = ctx;
        false
    }

    /// Directional swipe. `true` = consumed.
    ///
    /// Multi-page screens page automatically: Up advances to the next page
    /// and Down returns to the previous one, consuming the event whenever
    /// a page actually changed; everything else falls through to the
    /// transition table.
    fn handle_swipe(&mut self, direction: SwipeDirection, ctx: &mut ScreenContext<'_, '_>) -> bool {
        let _ = ctx;
        if !self.is_multi_page() {
            return false;
        }
        match direction {
            SwipeDirection::Up if self.current_page() < self.page_count() => {
                self.set_current_page(self.current_page().saturating_add(1))
            }
            SwipeDirection::Down if self.current_page() > 1 => {
                self.set_current_page(self.current_page().saturating_sub(1))
            }
            _ => false,
        }
    }
}
