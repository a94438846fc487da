//! Display navigation core for the wrist-device firmware.
//!
//! The heart of this crate is [`ScreenGraph`]: a deterministic state machine
//! that owns the single active screen, matches input gestures against a
//! declared transition table, keeps a bounded "go back" history, and defers
//! screen construction to the periodic refresh tick so input dispatch never
//! pays for widget teardown.
//!
//! Screens are *state* objects behind the [`Screen`] trait; rendering them
//! belongs to the display task and is out of scope here. Watch faces get an
//! extra diffing layer ([`WatchFace`]) that converts the per-tick clock and
//! battery readings into fine-grained change notifications.
//!
//! This crate is `no_std`; every collection is a bounded `heapless` buffer.

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod default_graph;
pub mod graph;
pub mod page;
pub mod screen;
pub mod screens;
pub mod tags;
pub mod transition;
pub mod watch_face;

pub use default_graph::{default_screen_graph, AppScreen, DefaultScreenFactory};
pub use graph::{
    ScreenGraph, ScreenInfo, BUTTON_DEBOUNCE_TICKS, MAX_PREVIOUS_SCREENS, REFRESH_THROTTLE_TICKS,
};
pub use page::PageState;
pub use screen::{Screen, ScreenContext, ScreenFactory, WatchFaceDirectory};
pub use tags::ScreenTag;
pub use transition::{TransitionEffect, TransitionTrigger};
pub use watch_face::{WatchFace, WatchFaceCore, WatchFaceHooks};
