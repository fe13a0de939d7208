//! Menu hierarchy and navigation.
//!
//! ```text
//! MainMenu ──Select──▶ CategorySubMenu ──Select leaf──▶ FunctionScreen
//!          ◀──Back────                 ◀──────Back─────
//!
//! CategorySubMenu ──Select INFRARED/TRANSMISSION──▶ TransmissionSubMenu
//!                 ◀─────────────Back / BACK────────
//! ```
//!
//! - **catalog**: the fixed menu contents
//! - **state**: the transition table over [`NavigationState`]
//! - **navigator**: owns the state, runs actions, renders

pub mod catalog;
pub mod navigator;
pub mod state;


pub use catalog::{Action, Category, EntryKind, MenuEntry};
pub use navigator::MenuNavigator;
pub use state::{NavigationState, Screen, Transition};
