//! The menu navigator: owns the navigation state, dispatches actions
//! and renders whichever screen is active.

use super::catalog::{self, Action};
use super::state::{NavigationState, Screen, Transition};
use crate::actions::{ActionDispatch, Step};
use crate::ui::canvas::Canvas;
use crate::ui::input::{Button, ButtonInput, ButtonSet};
use crate::ui::screens;

/// Single long-lived menu instance.
///
/// One [`tick`](Self::tick) polls the buttons, applies them, and draws
/// a frame. While an action is running it owns the buttons and the
/// screen; the menu resumes once the action reports [`Step::Done`].
pub struct MenuNavigator<A> {
    state: NavigationState,
    actions: A,
    running: Option<Action>,
    last_screen: Screen,
}

impl<A: ActionDispatch> MenuNavigator<A> {
    pub fn new(actions: A) -> Self {
        let state = NavigationState::new();
        Self {
            state,
            actions,
            running: None,
            last_screen: state.screen(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Action currently holding the screen, if any.
    pub fn running(&self) -> Option<Action> {
        self.running
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut A {
        &mut self.actions
    }

    // The six button handlers below only update state (or feed the
    // running action). Nothing is drawn until the next `render` or `tick`.

    pub fn select(&mut self) {
        self.handle(Button::Select);
    }

    pub fn back(&mut self) {
        self.handle(Button::Back);
    }

    pub fn left(&mut self) {
        self.handle(Button::Left);
    }

    pub fn right(&mut self) {
        self.handle(Button::Right);
    }

    pub fn up(&mut self) {
        self.handle(Button::Up);
    }

    pub fn down(&mut self) {
        self.handle(Button::Down);
    }

    /// Feed one debounced press.
    ///
    /// While an action is running the press goes to the action instead
    /// of the menu. Call [`render`](Self::render) afterwards to show the
    /// result; [`tick`](Self::tick) does both.
    pub fn handle(&mut self, button: Button) {
        if let Some(action) = self.running {
            let mut pressed = ButtonSet::empty();
            pressed.insert(button);
            self.step_action(action, pressed);
            return;
        }

        debug!("button {}", button);
        match self.state.apply(button) {
            Transition::Ignored => {}
            Transition::Moved => self.note_screen_change(),
            Transition::Dispatch(action) => self.dispatch(action),
        }
    }

    /// One UI tick: poll input, update state, draw.
    ///
    /// Presses are applied in [`Button::ALL`] order. Presses that come
    /// after the one that started an action are dropped for this tick:
    /// they were made while the menu was on screen, so handing them to
    /// the action would act on input the user never aimed at it (a
    /// BACK polled after SELECT would close the action before its first
    /// frame). The action sees only presses from the following ticks.
    pub fn tick<I, C>(&mut self, input: &mut I, canvas: &mut C) -> Result<(), C::Error>
    where
        I: ButtonInput,
        C: Canvas,
    {
        let pressed = input.poll_all();

        match self.running {
            Some(action) => self.step_action(action, pressed),
            None => {
                for button in pressed.iter() {
                    self.handle(button);
                    if self.running.is_some() {
                        break;
                    }
                }
            }
        }

        self.render(canvas)
    }

    /// Draw the current screen. Idempotent.
    pub fn render<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        if let Some(action) = self.running {
            return self.actions.draw(action, canvas);
        }

        let category = self.state.category();
        match self.state.screen() {
            Screen::MainMenu => screens::draw_main_menu(canvas, category),
            Screen::CategorySubMenu => {
                screens::draw_category_menu(canvas, category, self.state.sub_index())
            }
            Screen::TransmissionSubMenu => screens::draw_transmission_menu(
                canvas,
                catalog::transmission_items(),
                self.state.transmission_index(),
            ),
            Screen::FunctionScreen => {
                screens::draw_function_screen(canvas, category, self.state.sub_index())
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        info!("dispatch {}", action);
        match self.actions.begin(action) {
            Step::Continue => self.running = Some(action),
            Step::Done => self.finish_action(action),
        }
    }

    fn step_action(&mut self, action: Action, pressed: ButtonSet) {
        if self.actions.step(action, pressed) == Step::Done {
            self.finish_action(action);
        }
    }

    fn finish_action(&mut self, action: Action) {
        self.running = None;
        if action.is_send_mode() {
            self.state.return_to_transmission_menu();
        }
        self.note_screen_change();
    }

    /// Log entering and leaving the function screen and transmission menu.
    fn note_screen_change(&mut self) {
        let screen = self.state.screen();
        if screen == self.last_screen {
            return;
        }

        for (watched, name) in [
            (Screen::FunctionScreen, "function screen"),
            (Screen::TransmissionSubMenu, "transmission menu"),
        ] {
            if screen == watched {
                info!("transition: entered {}", name);
            } else if self.last_screen == watched {
                info!("transition: exited {}", name);
            }
        }
        self.last_screen = screen;
    }
}
