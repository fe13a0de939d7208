//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters, and screen layout numbers
//! live here so they can be tuned in one place.

// Input

/// Minimum time between two accepted presses of the same button (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 75;

/// UI tick period (ms). One tick = poll input, update state, render.
pub const UI_TICK_MS: u64 = 50;

// GPIO pin assignments
//
// The original board wired the buttons as:
//
//   Button A (SELECT) → 10     Button LEFT  → 1
//   Button B (BACK)   → 6      Button RIGHT → 8
//   Button UP         → 2      Button DOWN  → 3
//
// On the nRF52840-DK build the buttons are remapped (see `main.rs`):
//
//   SELECT → P0.11   BACK  → P0.12   LEFT → P0.24
//   RIGHT  → P0.25   UP    → P0.03   DOWN → P0.04
//   I²C SDA → P0.26  I²C SCL → P0.27
//
// GPIO menu header: P1.10 .. P1.14, one per entry of `GPIO_MONITOR_PINS`.
//
// All buttons are active-low with internal pull-up.

/// Logical pin numbers exposed through the GPIO menu, in display order.
pub const GPIO_MONITOR_PINS: [u8; 5] = [6, 1, 9, 7, 8];

// Display

/// Logical canvas size. Layout code assumes exactly this resolution.
pub const DISPLAY_WIDTH: i32 = 128;
pub const DISPLAY_HEIGHT: i32 = 64;

/// Height of the title bar frame on menu screens.
pub const TITLE_BAR_HEIGHT: i32 = 12;

/// Corner radius of the outer frame and menu title bar.
pub const FRAME_RADIUS: i32 = 4;

/// Baseline of the first list row and spacing between rows.
pub const LIST_START_Y: i32 = 24;
pub const LIST_ROW_HEIGHT: i32 = 10;

/// Text shown in the main menu title bar.
pub const FIRMWARE_TITLE: &str = "NEOos V.1.0";

/// Title of the infrared transmission submenu.
pub const TRANSMISSION_TITLE: &str = ":// INFRARED TRANSMISSION";

/// Close marker drawn in the top-right of every titled screen.
pub const CLOSE_MARKER: &str = "- X";

// Actions

/// Adaptive send level wraps at this value.
pub const ADAPTIVE_LEVEL_STEPS: u32 = 10;
