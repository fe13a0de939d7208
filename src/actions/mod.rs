//! Leaf actions - what happens when the user commits to a menu item.
//!
//! An action is a cooperative state machine rather than a blocking
//! loop. The navigator calls [`ActionDispatch::begin`] from the Select
//! handler; while it answers [`Step::Continue`] the navigator keeps
//! calling [`ActionDispatch::step`] once per tick with that tick's
//! debounced presses, and lets the action draw the screen. The action
//! alone decides when it is finished (typically on Back); the navigator
//! never times it out.
//!
//! ## Dispatchers
//!
//! - [`CallbackTable`]: one plain `fn()` per action slot, finishes immediately
//! - [`DeviceActions`]: the on-device behaviour (send modes, GPIO screens)

pub mod gpio;
pub mod send;

use crate::menu::catalog::Action;
use crate::ui::canvas::Canvas;
use crate::ui::input::ButtonSet;

use gpio::{GpioSession, PinBank};
use send::SendSession;

/// Outcome of one action invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Keep running; call `step` again next tick.
    Continue,
    /// Finished; hand control back to the menu.
    Done,
}

/// Binds behaviour to the menu's action slots.
pub trait ActionDispatch {
    /// Start `action`. Called synchronously from the Select handler.
    fn begin(&mut self, action: Action) -> Step;

    /// Advance a running action by one tick.
    fn step(&mut self, action: Action, pressed: ButtonSet) -> Step {
        let _ = (action, pressed);
        Step::Done
    }

    /// Draw the running action's screen.
    fn draw<C: Canvas>(&mut self, action: Action, canvas: &mut C) -> Result<(), C::Error> {
        let _ = (action, canvas);
        Ok(())
    }
}

/// Zero-argument callback per action slot. Unbound slots are no-ops.
pub struct CallbackTable {
    slots: [Option<fn()>; Action::COUNT],
}

impl CallbackTable {
    pub const fn new() -> Self {
        Self {
            slots: [None; Action::COUNT],
        }
    }

    pub fn bind(&mut self, action: Action, callback: fn()) -> &mut Self {
        self.slots[action.index()] = Some(callback);
        self
    }

    pub fn is_bound(&self, action: Action) -> bool {
        self.slots[action.index()].is_some()
    }
}

impl Default for CallbackTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionDispatch for CallbackTable {
    fn begin(&mut self, action: Action) -> Step {
        match self.slots[action.index()] {
            Some(callback) => callback(),
            None => debug!("action {}: unbound", action),
        }
        Step::Done
    }
}

enum Session {
    Idle,
    Send(SendSession),
    Gpio(GpioSession),
}

/// On-device action handlers.
///
/// Infrared send modes and the GPIO screens run until Back is pressed.
/// Radio, NEOKIN and settings items have no hardware behind them yet
/// and finish immediately after logging.
pub struct DeviceActions<P> {
    pins: P,
    session: Session,
}

impl<P: PinBank> DeviceActions<P> {
    pub fn new(pins: P) -> Self {
        Self {
            pins,
            session: Session::Idle,
        }
    }

    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    fn finish(&mut self, action: Action) -> Step {
        info!("action {}: done", action);
        self.session = Session::Idle;
        Step::Done
    }
}

impl<P: PinBank> ActionDispatch for DeviceActions<P> {
    fn begin(&mut self, action: Action) -> Step {
        info!("action {}: begin", action);

        if let Some(session) = SendSession::start(action) {
            self.session = Session::Send(session);
            return Step::Continue;
        }

        match GpioSession::start(action, &mut self.pins) {
            Some(Ok(session)) => {
                self.session = Session::Gpio(session);
                Step::Continue
            }
            Some(Err(e)) => {
                warn!("action {}: {}", action, e);
                self.finish(action)
            }
            None => self.finish(action),
        }
    }

    fn step(&mut self, action: Action, pressed: ButtonSet) -> Step {
        let step = match &mut self.session {
            Session::Send(session) => session.step(pressed),
            Session::Gpio(session) => match session.step(pressed, &mut self.pins) {
                Ok(step) => step,
                Err(e) => {
                    warn!("action {}: {}", action, e);
                    Step::Done
                }
            },
            Session::Idle => Step::Done,
        };

        match step {
            Step::Continue => Step::Continue,
            Step::Done => self.finish(action),
        }
    }

    fn draw<C: Canvas>(&mut self, _action: Action, canvas: &mut C) -> Result<(), C::Error> {
        match &self.session {
            Session::Send(session) => session.draw(canvas),
            Session::Gpio(session) => session.draw(canvas),
            Session::Idle => Ok(()),
        }
    }
}
