//! GPIO menu screens: read, write, toggle, monitor.
//!
//! Pins are addressed by slot (0..5); [`GPIO_MONITOR_PINS`] maps a slot
//! to the pin number printed on the board. Every screen stays up until
//! Back is pressed.

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_RADIUS, GPIO_MONITOR_PINS};
use crate::error::Error;
use crate::menu::catalog::Action;
use crate::ui::canvas::{Canvas, Font};
use crate::ui::input::{Button, ButtonSet};
use crate::ui::input_logic::{wrap_next, wrap_prev};
use crate::ui::screens::format_line;

use super::Step;

/// Number of pins exposed through the GPIO menu.
pub const PIN_SLOTS: usize = GPIO_MONITOR_PINS.len();

const FIRST_ROW_Y: i32 = 24;
const ROW_HEIGHT: i32 = 8;
const FOOTER_Y: i32 = 62;

/// The pins the GPIO menu can read and drive.
pub trait PinBank {
    /// Level of pin `slot`; `true` is high.
    fn read(&mut self, slot: usize) -> Result<bool, Error>;

    fn write(&mut self, slot: usize, high: bool) -> Result<(), Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioMode {
    Read,
    Write,
    Toggle,
    Monitor,
}

impl GpioMode {
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::GpioRead => Some(GpioMode::Read),
            Action::GpioWrite => Some(GpioMode::Write),
            Action::GpioToggle => Some(GpioMode::Toggle),
            Action::GpioMonitor => Some(GpioMode::Monitor),
            _ => None,
        }
    }
}

/// A running GPIO screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GpioSession {
    mode: GpioMode,
    /// Current (or, for toggle, new) level of each pin.
    levels: [bool; PIN_SLOTS],
    /// Level before the toggle; only meaningful in toggle mode.
    previous: [bool; PIN_SLOTS],
    /// Pin under the cursor in write mode.
    selected: usize,
}

fn level_name(high: bool) -> &'static str {
    if high {
        "HIGH"
    } else {
        "LOW"
    }
}

fn read_all<P: PinBank>(pins: &mut P) -> Result<[bool; PIN_SLOTS], Error> {
    let mut levels = [false; PIN_SLOTS];
    for (slot, level) in levels.iter_mut().enumerate() {
        *level = pins.read(slot)?;
    }
    Ok(levels)
}

/// Drive slots `0..levels.len()` back to `levels`, best effort.
fn restore<P: PinBank>(pins: &mut P, levels: &[bool]) {
    for (slot, level) in levels.iter().enumerate() {
        if pins.write(slot, *level).is_err() {
            warn!("gpio: could not restore pin {}", GPIO_MONITOR_PINS[slot]);
        }
    }
}

impl GpioSession {
    /// `None` if `action` is not a GPIO action.
    ///
    /// Toggle mode inverts every pin here, once. All levels are read
    /// before the first write; if a write fails, the pins already
    /// inverted are put back and the error is returned.
    pub fn start<P: PinBank>(action: Action, pins: &mut P) -> Option<Result<Self, Error>> {
        let mode = GpioMode::from_action(action)?;
        Some(Self::open(mode, pins))
    }

    fn open<P: PinBank>(mode: GpioMode, pins: &mut P) -> Result<Self, Error> {
        let previous = read_all(pins)?;
        let mut levels = previous;

        if mode == GpioMode::Toggle {
            for slot in 0..PIN_SLOTS {
                levels[slot] = !previous[slot];
                if let Err(e) = pins.write(slot, levels[slot]) {
                    warn!("gpio: toggle failed on pin {}", GPIO_MONITOR_PINS[slot]);
                    restore(pins, &previous[..slot]);
                    return Err(e);
                }
            }
        }

        Ok(Self {
            mode,
            levels,
            previous,
            selected: 0,
        })
    }

    pub fn mode(&self) -> GpioMode {
        self.mode
    }

    pub fn levels(&self) -> [bool; PIN_SLOTS] {
        self.levels
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn step<P: PinBank>(&mut self, pressed: ButtonSet, pins: &mut P) -> Result<Step, Error> {
        if pressed.contains(Button::Back) {
            return Ok(Step::Done);
        }

        match self.mode {
            GpioMode::Read | GpioMode::Toggle => {}
            GpioMode::Monitor => self.levels = read_all(pins)?,
            GpioMode::Write => {
                if pressed.contains(Button::Left) || pressed.contains(Button::Up) {
                    self.selected = wrap_prev(self.selected, PIN_SLOTS);
                }
                if pressed.contains(Button::Right) || pressed.contains(Button::Down) {
                    self.selected = wrap_next(self.selected, PIN_SLOTS);
                }
                if pressed.contains(Button::Select) {
                    let slot = self.selected;
                    let level = !pins.read(slot)?;
                    pins.write(slot, level)?;
                    debug!("gpio: pin {} -> {}", GPIO_MONITOR_PINS[slot], level_name(level));
                }
                self.levels[self.selected] = pins.read(self.selected)?;
            }
        }
        Ok(Step::Continue)
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.clear()?;
        canvas.draw_frame(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT, FRAME_RADIUS)?;
        canvas.set_font(Font::List);

        match self.mode {
            GpioMode::Read | GpioMode::Monitor => {
                let title = if self.mode == GpioMode::Read {
                    "GPIO PIN STATES:"
                } else {
                    "GPIO MONITOR (LIVE)"
                };
                canvas.draw_text(4, 12, title)?;
                canvas.set_font(Font::Tiny);
                for (slot, high) in self.levels.iter().enumerate() {
                    let y = FIRST_ROW_Y + slot as i32 * ROW_HEIGHT;
                    let line: heapless::String<16> = format_line(format_args!(
                        "PIN {}: {}",
                        GPIO_MONITOR_PINS[slot],
                        level_name(*high)
                    ));
                    canvas.draw_text(10, y, &line)?;
                    if self.mode == GpioMode::Monitor {
                        canvas.draw_text(100, y, if *high { "[ON]" } else { "[OFF]" })?;
                    }
                }
            }
            GpioMode::Toggle => {
                canvas.draw_text(4, 12, "GPIO TOGGLE MODE")?;
                canvas.set_font(Font::Tiny);
                for slot in 0..PIN_SLOTS {
                    let line: heapless::String<24> = format_line(format_args!(
                        "PIN {}: {} -> {}",
                        GPIO_MONITOR_PINS[slot],
                        level_name(self.previous[slot]),
                        level_name(self.levels[slot])
                    ));
                    canvas.draw_text(10, FIRST_ROW_Y + slot as i32 * ROW_HEIGHT, &line)?;
                }
            }
            GpioMode::Write => {
                canvas.draw_text(4, 12, "GPIO WRITE MODE")?;
                let slot = self.selected;
                let line: heapless::String<20> = format_line(format_args!(
                    "PIN {} ({})",
                    GPIO_MONITOR_PINS[slot],
                    level_name(self.levels[slot])
                ));
                canvas.draw_text(10, 28, &line)?;
                canvas.set_font(Font::Tiny);
                canvas.draw_text(10, 40, "UP/DOWN: select pin")?;
                canvas.draw_text(10, 48, "A: toggle level")?;
            }
        }

        canvas.set_font(Font::Tiny);
        canvas.draw_text(10, FOOTER_Y, "Press B to return")?;
        canvas.present()
    }
}
