//! The navigation state machine.
//!
//! [`ScreenGraph`] owns the single active screen and mediates between three
//! inputs: user gestures, the registered transition table, and the periodic
//! refresh tick. All dispatch is synchronous and runs on the display task;
//! the only deferred work is a pending screen switch, consumed on the next
//! tick so input handling never pays for screen teardown.

use heapless::Vec;
use platform::{Components, FullRefreshProvider, InputEvent, SwipeDirection, TickSource};

use crate::screen::{find_watch_face_index, Screen, ScreenContext, ScreenFactory};
use crate::tags::ScreenTag;
use crate::transition::{Transition, TransitionEffect, TransitionTrigger};

/// Minimum interval between two accepted button presses, in ticks
/// (milliseconds). Presses arriving faster are treated as switch bounce
/// and swallowed.
pub const BUTTON_DEBOUNCE_TICKS: u32 = 500;

/// Maximum depth of the "go back" history.
pub const MAX_PREVIOUS_SCREENS: usize = 4;

/// Suggested minimum interval between two expensive screen refreshes, in
/// ticks (milliseconds). The graph does not enforce this; screens doing
/// real work in [`Screen::refresh`] throttle themselves against it.
pub const REFRESH_THROTTLE_TICKS: u32 = 500;

/// Capacity of the transition table. Registrations beyond this are
/// silently dropped (bounded-buffer contract).
const MAX_TRANSITIONS: usize = 32;

/// Back-stack entry: where the user navigated away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenInfo {
    /// Tag of the screen left behind.
    pub tag: ScreenTag,
    /// Page it was showing at the time.
    pub page: u8,
}

/// A deferred screen switch, performed on the next refresh tick.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct PendingSwitch {
    pub tag: ScreenTag,
    pub page: u8,
    pub effect: TransitionEffect,
}

/// Navigation state machine owning the active screen.
///
/// Generic over the [`ScreenFactory`] that builds screens and maps
/// watch-face indices; the transition table is filled in by the
/// `add_*_transition` calls once at startup and is immutable afterwards.
pub struct ScreenGraph<'a, F: ScreenFactory> {
    factory: F,
    components: Components<'a>,
    refresh_provider: &'a mut dyn FullRefreshProvider,
    ticks: &'a dyn TickSource,
    current_tag: ScreenTag,
    current_screen: Option<F::Screen>,
    transitions: Vec<Transition, MAX_TRANSITIONS>,
    previous_screens: Vec<ScreenInfo, MAX_PREVIOUS_SCREENS>,
    pending: Option<PendingSwitch>,
    last_button_press_ticks: u32,
}

impl<'a, F: ScreenFactory> ScreenGraph<'a, F> {
    /// Create a graph with `startup` recorded as the pending switch; the
    /// first [`ScreenGraph::handle_refresh`] call builds that screen.
    pub fn new(
        factory: F,
        components: Components<'a>,
        refresh_provider: &'a mut dyn FullRefreshProvider,
        ticks: &'a dyn TickSource,
        startup: ScreenTag,
    ) -> Self {
        Self {
            factory,
            components,
            refresh_provider,
            ticks,
            current_tag: ScreenTag::None,
            current_screen: None,
            transitions: Vec::new(),
            previous_screens: Vec::new(),
            pending: Some(PendingSwitch {
                tag: startup,
                page: 1,
                effect: TransitionEffect::None,
            }),
            last_button_press_ticks: 0,
        }
    }

    /// Tag of the active screen; [`ScreenTag::None`] while no screen is
    /// alive.
    #[must_use]
    pub fn current_tag(&self) -> ScreenTag {
        self.current_tag
    }

    /// The active screen, if one is alive.
    #[must_use]
    pub fn current_screen(&self) -> Option<&F::Screen> {
        self.current_screen.as_ref()
    }

    /// Mutable access to the active screen.
    pub fn current_screen_mut(&mut self) -> Option<&mut F::Screen> {
        self.current_screen.as_mut()
    }

    /// Depth of the "go back" history.
    #[must_use]
    pub fn back_stack_len(&self) -> usize {
        self.previous_screens.len()
    }

    // ── Registration ────────────────────────────────────────────────────

    /// Register a button-press transition landing on page 1.
    pub fn add_button_transition(
        &mut self,
        from: ScreenTag,
        to: ScreenTag,
        effect: TransitionEffect,
    ) {
        self.add_button_transition_to_page(from, to, 1, effect);
    }

    /// Register a button-press transition landing on the given page.
    pub fn add_button_transition_to_page(
        &mut self,
        from: ScreenTag,
        to: ScreenTag,
        to_page: u8,
        effect: TransitionEffect,
    ) {
        self.add_transition(
            TransitionTrigger::Button,
            SwipeDirection::None,
            from,
            to,
            to_page,
            effect,
        );
    }

    /// Register a swipe transition landing on page 1. The visual effect is
    /// derived from the swipe direction.
    pub fn add_swipe_transition(
        &mut self,
        from: ScreenTag,
        to: ScreenTag,
        direction: SwipeDirection,
    ) {
        self.add_swipe_transition_to_page(from, to, 1, direction);
    }

    /// Register a swipe transition landing on the given page.
    pub fn add_swipe_transition_to_page(
        &mut self,
        from: ScreenTag,
        to: ScreenTag,
        to_page: u8,
        direction: SwipeDirection,
    ) {
        if direction == SwipeDirection::None {
            #[cfg(feature = "defmt")]
            defmt::warn!("swipe transition without direction rejected");
            return;
        }
        self.add_transition(
            TransitionTrigger::Swipe,
            direction,
            from,
            to,
            to_page,
            TransitionEffect::from_swipe(direction),
        );
    }

    /// Register an inactivity-timeout transition landing on page 1.
    pub fn add_inactivity_transition(
        &mut self,
        from: ScreenTag,
        to: ScreenTag,
        effect: TransitionEffect,
    ) {
        self.add_inactivity_transition_to_page(from, to, 1, effect);
    }

    /// Register an inactivity-timeout transition landing on the given page.
    pub fn add_inactivity_transition_to_page(
        &mut self,
        from: ScreenTag,
        to: ScreenTag,
        to_page: u8,
        effect: TransitionEffect,
    ) {
        self.add_transition(
            TransitionTrigger::Inactivity,
            SwipeDirection::None,
            from,
            to,
            to_page,
            effect,
        );
    }

    fn add_transition(
        &mut self,
        trigger: TransitionTrigger,
        swipe_direction: SwipeDirection,
        from: ScreenTag,
        to: ScreenTag,
        to_page: u8,
        effect: TransitionEffect,
    ) {
        // Malformed endpoints are dropped at registration time, never
        // raised at runtime.
        if from == ScreenTag::None || from == ScreenTag::Previous || to == ScreenTag::None {
            #[cfg(feature = "defmt")]
            defmt::warn!("transition with invalid endpoints rejected");
            return;
        }
        let _ = self.transitions.push(Transition {
            trigger,
            swipe_direction,
            from,
            to,
            to_page,
            effect,
        });
    }

    // ── Deferred switching ──────────────────────────────────────────────

    /// Request a switch to `tag` on the next refresh tick, starting at
    /// page 1.
    pub fn activate_screen(&mut self, tag: ScreenTag, effect: TransitionEffect) {
        self.activate_screen_at(tag, 1, effect);
    }

    /// Request a switch to `tag` on the next refresh tick, starting at the
    /// given page. Requesting [`ScreenTag::None`] cancels a pending switch.
    pub fn activate_screen_at(&mut self, tag: ScreenTag, page: u8, effect: TransitionEffect) {
        self.pending = if tag == ScreenTag::None {
            None
        } else {
            Some(PendingSwitch { tag, page, effect })
        };
    }

    /// Persist `tag` as the user's default watch face.
    ///
    /// Performs the reverse lookup across the factory's index range; a tag
    /// no index maps to leaves the persisted setting unchanged.
    pub fn set_default_watch_face(&mut self, tag: ScreenTag) {
        if let Some(index) = find_watch_face_index(&self.factory, tag) {
            self.components.settings.set_clock_face(index);
        }
    }

    // ── Dispatch ────────────────────────────────────────────────────────

    /// Periodic tick: perform a pending switch if one is recorded, else
    /// forward the tick to the active screen.
    pub fn handle_refresh(&mut self) {
        match self.pending {
            Some(pending) => self.switch_screen(pending.tag, pending.page, pending.effect),
            None => {
                let Self {
                    factory,
                    components,
                    ticks,
                    current_screen,
                    pending,
                    ..
                } = self;
                if let Some(screen) = current_screen.as_mut() {
                    let mut ctx = ScreenContext::new(components, *ticks, &*factory, pending);
                    screen.refresh(&mut ctx);
                }
            }
        }
    }

    /// Physical button press. Debounced; returns `true` unless neither the
    /// screen nor the table wanted the event.
    pub fn handle_button_press(&mut self) -> bool {
        // Additional de-bouncing on top of the driver's: rapid presses are
        // swallowed before the screen or the table see them. Wrapping
        // arithmetic keeps the comparison valid across tick overflow.
        let now = self.ticks.ticks();
        if now.wrapping_sub(self.last_button_press_ticks) < BUTTON_DEBOUNCE_TICKS {
            return true;
        }
        self.last_button_press_ticks = now;

        if self.offer_to_screen(|screen, ctx| screen.handle_button_press(ctx)) {
            return true;
        }
        self.dispatch_transition(TransitionTrigger::Button, SwipeDirection::None)
    }

    /// Single tap.
    pub fn handle_tap(&mut self) -> bool {
        if self.offer_to_screen(|screen, ctx| screen.handle_tap(ctx)) {
            return true;
        }
        self.dispatch_transition(TransitionTrigger::Tap, SwipeDirection::None)
    }

    /// Long press.
    pub fn handle_long_tap(&mut self) -> bool {
        if self.offer_to_screen(|screen, ctx| screen.handle_long_tap(ctx)) {
            return true;
        }
        self.dispatch_transition(TransitionTrigger::LongTap, SwipeDirection::None)
    }

    /// Double tap.
    pub fn handle_double_tap(&mut self) -> bool {
        if self.offer_to_screen(|screen, ctx| screen.handle_double_tap(ctx)) {
            return true;
        }
        self.dispatch_transition(TransitionTrigger::DoubleTap, SwipeDirection::None)
    }

    /// Directional swipe.
    pub fn handle_swipe(&mut self, direction: SwipeDirection) -> bool {
        if self.offer_to_screen(|screen, ctx| screen.handle_swipe(direction, ctx)) {
            return true;
        }
        self.dispatch_transition(TransitionTrigger::Swipe, direction)
    }

    /// Idle timeout. Goes straight to the transition table; screens do not
    /// observe inactivity.
    pub fn handle_inactivity(&mut self) -> bool {
        self.dispatch_transition(TransitionTrigger::Inactivity, SwipeDirection::None)
    }

    /// Demultiplex a raw input event to the matching handler.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::ButtonPress => self.handle_button_press(),
            InputEvent::Tap => self.handle_tap(),
            InputEvent::DoubleTap => self.handle_double_tap(),
            InputEvent::LongTap => self.handle_long_tap(),
            InputEvent::Swipe(direction) => self.handle_swipe(direction),
            InputEvent::Inactivity => self.handle_inactivity(),
        }
    }

    /// Offer an event to the active screen; `false` when no screen is
    /// alive (degenerate state) or the screen declined it.
    fn offer_to_screen(
        &mut self,
        offer: impl FnOnce(&mut F::Screen, &mut ScreenContext<'_, '_>) -> bool,
    ) -> bool {
        let Self {
            factory,
            components,
            ticks,
            current_screen,
            pending,
            ..
        } = self;
        match current_screen.as_mut() {
            Some(screen) => {
                let mut ctx = ScreenContext::new(components, *ticks, &*factory, pending);
                offer(screen, &mut ctx)
            }
            None => false,
        }
    }

    /// Scan the table in registration order and fire the first match.
    fn dispatch_transition(
        &mut self,
        trigger: TransitionTrigger,
        direction: SwipeDirection,
    ) -> bool {
        let hit = self
            .transitions
            .iter()
            .find(|t| t.matches(trigger, direction, self.current_tag))
            .copied();
        match hit {
            Some(transition) => {
                self.switch_screen(transition.to, transition.to_page, transition.effect);
                true
            }
            None => false,
        }
    }

    // ── Switching ───────────────────────────────────────────────────────

    /// Resolve `tag` and swap the active screen.
    ///
    /// This is the only place screens are created or destroyed; at most one
    /// swap happens per dispatch and the swap is atomic with respect to
    /// input.
    fn switch_screen(&mut self, tag: ScreenTag, page: u8, effect: TransitionEffect) {
        // Whatever triggered this switch supersedes a deferred one.
        self.pending = None;

        if tag == ScreenTag::None {
            return;
        }

        let mut destination = ScreenInfo { tag, page };
        let mut pushed = false;

        if tag == ScreenTag::Previous {
            // Going back consumes a history entry instead of adding one.
            match self.previous_screens.pop() {
                Some(previous) => destination = previous,
                None => return,
            }
        } else if self.current_tag != ScreenTag::None {
            // Remember the outgoing screen, evicting the oldest entry when
            // the history is at capacity. The startup switch has no
            // outgoing screen and leaves the history untouched.
            while self.previous_screens.len() >= MAX_PREVIOUS_SCREENS {
                let _ = self.previous_screens.remove(0);
            }
            let outgoing = ScreenInfo {
                tag: self.current_tag,
                page: self
                    .current_screen
                    .as_ref()
                    .map_or(1, |screen| screen.current_page()),
            };
            let _ = self.previous_screens.push(outgoing);
            pushed = true;
        }

        if destination.tag == ScreenTag::DefaultWatchFace {
            let index = self.components.settings.clock_face();
            destination.tag = self.factory.watch_face_by_index(index);
            if destination.tag == ScreenTag::None {
                // Unresolvable default: abort and undo the push so the
                // current screen stays where it was.
                if pushed {
                    let _ = self.previous_screens.pop();
                }
                #[cfg(feature = "defmt")]
                defmt::warn!("default watch face index {=u8} resolves to nothing", index);
                return;
            }
        }

        if effect != TransitionEffect::None {
            self.refresh_provider
                .set_full_refresh(effect.refresh_hint());
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "switching screen: {} page {=u8}",
            destination.tag,
            destination.page
        );

        // The outgoing screen is torn down before its replacement exists;
        // there are never two screens alive at once.
        self.current_screen = None;

        let Self {
            factory,
            components,
            current_screen,
            current_tag,
            ..
        } = self;
        *current_screen = factory.create_screen(destination.tag, components);
        match current_screen.as_mut() {
            Some(screen) => {
                *current_tag = destination.tag;
                // A no-op for single-page screens.
                let _ = screen.set_current_page(destination.page);
            }
            None => {
                // Degenerate but tolerated: dispatch treats a missing
                // screen as "event not handled by the screen".
                *current_tag = ScreenTag::None;
            }
        }
    }
}
