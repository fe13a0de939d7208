//! neoos - menu navigator for a six-button handheld with a 128×64 OLED.
//!
//! Everything except the hardware adapters is plain `no_std` logic that
//! builds and tests on the host:
//!
//! - [`menu`]: static catalog, navigation state machine, navigator
//! - [`actions`]: leaf action dispatch (send modes, GPIO screens)
//! - [`ui`]: canvas abstraction, screen renderers, debounced input
//!
//! Usage: `cargo test --lib` on the host. The firmware binary is built
//! with `--features embedded` for the nRF52840.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod actions;
pub mod config;
pub mod error;
pub mod menu;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod board;

pub use error::Error;
