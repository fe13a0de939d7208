//! Infrared send-mode status screens.
//!
//! Each mode shows a live status screen until Back is pressed. No IR
//! hardware is driven here; the counters show the mode is alive.

use heapless::String;

use crate::config::{ADAPTIVE_LEVEL_STEPS, DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_RADIUS};
use crate::menu::catalog::Action;
use crate::ui::canvas::{Canvas, Font};
use crate::ui::input::{Button, ButtonSet};
use crate::ui::screens::format_line;

use super::Step;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendMode {
    Direct,
    Repeat,
    Burst,
    Adaptive,
}

impl SendMode {
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::DirectSend => Some(SendMode::Direct),
            Action::RepeatSend => Some(SendMode::Repeat),
            Action::BurstSend => Some(SendMode::Burst),
            Action::AdaptiveSend => Some(SendMode::Adaptive),
            _ => None,
        }
    }

    fn title(self) -> &'static str {
        match self {
            SendMode::Direct => "DIRECT SEND MODE",
            SendMode::Repeat => "REPEAT SEND MODE",
            SendMode::Burst => "BURST SEND MODE",
            SendMode::Adaptive => "ADAPTIVE SEND MODE",
        }
    }
}

/// A running send mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SendSession {
    mode: SendMode,
    /// Repeat/burst count, or adaptive level.
    counter: u32,
}

impl SendSession {
    /// `None` if `action` is not a send mode.
    pub fn start(action: Action) -> Option<Self> {
        SendMode::from_action(action).map(|mode| Self { mode, counter: 0 })
    }

    pub fn mode(&self) -> SendMode {
        self.mode
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn step(&mut self, pressed: ButtonSet) -> Step {
        if pressed.contains(Button::Back) {
            return Step::Done;
        }

        self.counter = match self.mode {
            SendMode::Direct => 0,
            SendMode::Repeat | SendMode::Burst => self.counter.wrapping_add(1),
            SendMode::Adaptive => (self.counter + 1) % ADAPTIVE_LEVEL_STEPS,
        };
        Step::Continue
    }

    fn status(&self) -> String<24> {
        match self.mode {
            SendMode::Direct => format_line(format_args!("Transmitting...")),
            SendMode::Repeat => format_line(format_args!("Repeats: {}", self.counter)),
            SendMode::Burst => format_line(format_args!("Burst Count: {}", self.counter)),
            SendMode::Adaptive => format_line(format_args!("Adaptive Level: {}", self.counter)),
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.clear()?;
        canvas.draw_frame(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT, FRAME_RADIUS)?;
        canvas.set_font(Font::List);
        canvas.draw_text(10, 15, self.mode.title())?;
        canvas.draw_text(10, 30, &self.status())?;
        canvas.draw_text(10, 50, "Press B to exit")?;
        canvas.present()
    }
}
