//! Unified error type for neoos.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! The menu core itself never fails; these errors come from the
//! hardware adapters (display, pins) and surface through the render
//! pass and the action handlers.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// Drawing into the frame buffer or flushing it to the panel failed.
    Display,

    // GPIO
    /// A pin exposed through the GPIO menu could not be read or driven.
    Gpio(u8),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Display => f.write_str("display error"),
            Error::Gpio(pin) => write!(f, "gpio error on pin {}", pin),
        }
    }
}
