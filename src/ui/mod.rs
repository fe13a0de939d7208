//! User interface subsystem - OLED display + physical buttons.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, drawn through [`canvas::Canvas`]
//! - **Buttons**: 6 tactile switches (SELECT, BACK, LEFT, RIGHT, UP, DOWN)
//!   debounced by [`input::ButtonPad`]
//! - **Screens**: one renderer per menu screen

pub mod canvas;
pub mod input;
pub mod input_logic;
pub mod screens;

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;

pub use canvas::{Canvas, Font, GraphicsCanvas};
pub use input::{Button, ButtonInput, ButtonPad, ButtonSet};
