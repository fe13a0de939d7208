//! Navigation state and the transition table.
//!
//! [`NavigationState::apply`] is the whole menu state machine. It never
//! runs actions itself; when a Select commits to a leaf it returns
//! [`Transition::Dispatch`] and the navigator takes it from there.

use super::catalog::{
    self, Action, Category, EntryKind, MenuEntry, MAIN_MENU_COUNT, SUB_MENU_COUNT,
    TRANSMISSION_MENU_COUNT,
};
use crate::ui::input::Button;
use crate::ui::input_logic::{wrap_next, wrap_prev};

/// Which screen is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    MainMenu,
    CategorySubMenu,
    TransmissionSubMenu,
    FunctionScreen,
}

/// What an event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Nothing changed.
    Ignored,
    /// Screen or cursor changed.
    Moved,
    /// Run `action`; state is left as it was.
    Dispatch(Action),
}

/// Current screen plus the cursor of every menu level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationState {
    screen: Screen,
    category_index: usize,
    sub_index: usize,
    transmission_index: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    /// Power-on state: main menu, every cursor on its first item.
    pub const fn new() -> Self {
        Self {
            screen: Screen::MainMenu,
            category_index: 0,
            sub_index: 0,
            transmission_index: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn category_index(&self) -> usize {
        self.category_index
    }

    pub fn category(&self) -> Category {
        Category::from_index(self.category_index)
    }

    pub fn sub_index(&self) -> usize {
        self.sub_index
    }

    pub fn transmission_index(&self) -> usize {
        self.transmission_index
    }

    /// Entry under the category submenu cursor.
    pub fn selected_entry(&self) -> &'static MenuEntry {
        &self.category().items()[self.sub_index]
    }

    /// Entry under the transmission submenu cursor.
    pub fn selected_transmission_entry(&self) -> &'static MenuEntry {
        &catalog::transmission_items()[self.transmission_index]
    }

    /// Apply one button event.
    pub fn apply(&mut self, button: Button) -> Transition {
        match button {
            Button::Select => self.select(),
            Button::Back => self.back(),
            Button::Left | Button::Up => self.previous(),
            Button::Right | Button::Down => self.next(),
        }
    }

    fn select(&mut self) -> Transition {
        match self.screen {
            Screen::MainMenu => {
                self.screen = Screen::CategorySubMenu;
                self.sub_index = 0;
                Transition::Moved
            }
            Screen::CategorySubMenu => match self.selected_entry().kind {
                EntryKind::Back => {
                    self.screen = Screen::MainMenu;
                    Transition::Moved
                }
                EntryKind::Transmission => {
                    self.screen = Screen::TransmissionSubMenu;
                    self.transmission_index = 0;
                    Transition::Moved
                }
                EntryKind::Leaf(_) => {
                    self.screen = Screen::FunctionScreen;
                    Transition::Moved
                }
            },
            Screen::TransmissionSubMenu => match self.selected_transmission_entry().kind {
                EntryKind::Leaf(action) => Transition::Dispatch(action),
                // The transmission menu has no nested submenu; treat it as BACK.
                EntryKind::Back | EntryKind::Transmission => {
                    self.screen = Screen::CategorySubMenu;
                    Transition::Moved
                }
            },
            Screen::FunctionScreen => match self.selected_entry().action() {
                Some(action) => Transition::Dispatch(action),
                None => Transition::Ignored,
            },
        }
    }

    fn back(&mut self) -> Transition {
        match self.screen {
            Screen::MainMenu => Transition::Ignored,
            Screen::CategorySubMenu => {
                self.screen = Screen::MainMenu;
                Transition::Moved
            }
            Screen::TransmissionSubMenu | Screen::FunctionScreen => {
                self.screen = Screen::CategorySubMenu;
                Transition::Moved
            }
        }
    }

    fn previous(&mut self) -> Transition {
        match self.screen {
            Screen::MainMenu => {
                self.category_index = wrap_prev(self.category_index, MAIN_MENU_COUNT)
            }
            Screen::CategorySubMenu => self.sub_index = wrap_prev(self.sub_index, SUB_MENU_COUNT),
            Screen::TransmissionSubMenu => {
                self.transmission_index =
                    wrap_prev(self.transmission_index, TRANSMISSION_MENU_COUNT)
            }
            Screen::FunctionScreen => return Transition::Ignored,
        }
        Transition::Moved
    }

    fn next(&mut self) -> Transition {
        match self.screen {
            Screen::MainMenu => {
                self.category_index = wrap_next(self.category_index, MAIN_MENU_COUNT)
            }
            Screen::CategorySubMenu => self.sub_index = wrap_next(self.sub_index, SUB_MENU_COUNT),
            Screen::TransmissionSubMenu => {
                self.transmission_index =
                    wrap_next(self.transmission_index, TRANSMISSION_MENU_COUNT)
            }
            Screen::FunctionScreen => return Transition::Ignored,
        }
        Transition::Moved
    }

    #[cfg(test)]
    pub(crate) fn at(
        screen: Screen,
        category_index: usize,
        sub_index: usize,
        transmission_index: usize,
    ) -> Self {
        Self {
            screen,
            category_index,
            sub_index,
            transmission_index,
        }
    }

    /// A send-mode action finished: back on the transmission menu, cursor reset.
    pub(crate) fn return_to_transmission_menu(&mut self) {
        self.screen = Screen::TransmissionSubMenu;
        self.transmission_index = 0;
    }
}
