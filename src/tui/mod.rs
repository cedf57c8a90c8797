//! Terminal User Interface module
//!
//! Interactive main menu: a pure state machine (`menu`), its key bindings
//! (`input`) and the crossterm/ratatui runtime that drives it (`app`).

mod app;
mod input;
pub mod menu;
mod theme;

pub use app::{draw_menu, App};
pub use input::menu_event;
pub use menu::{Menu, MenuCommand, MenuEvent, MENU_CHOICES};
pub use theme::Theme;
