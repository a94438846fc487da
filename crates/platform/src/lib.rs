//! Platform abstraction layer for the wrist-device firmware.
//!
//! This crate defines the narrow contracts the display navigation core
//! consumes from the rest of the system: persisted settings, wall clock,
//! battery and BLE status, display refresh hints, and the monotonic tick
//! counter. Everything is trait-based so the navigation core can be
//! developed and tested without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Navigation core (ui crate)
//!         ↓
//! Platform contracts (this crate - trait abstractions)
//!         ↓
//! Hardware layer (HAL drivers, persisted settings storage)
//! ```
//!
//! # Features
//!
//! - `std`: enable standard library support and the [`mocks`] module
//! - `defmt`: enable defmt logging derives (hardware builds)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod ble;
pub mod brightness;
pub mod clock;
pub mod components;
pub mod input;
pub mod mocks;
pub mod power;
pub mod refresh;
pub mod settings;
pub mod ticks;
pub mod validator;

pub use ble::{BleMonitor, FirmwareUpdateState};
pub use brightness::BrightnessController;
pub use clock::{Clock, DateTimeSnapshot, Month, Weekday};
pub use components::Components;
pub use input::{InputEvent, SwipeDirection};
pub use power::PowerMonitor;
pub use refresh::{FullRefreshDirection, FullRefreshProvider};
pub use settings::{BrightnessLevel, Settings, WakeUpMode};
pub use ticks::{TickSource, TICK_HZ};
pub use validator::{FirmwareValidator, ValidateError};
