//! Reusable UI widgets
//!
//! Widgets are plain ratatui `Widget`s that render data handed to them by
//! components.

pub mod display;
pub mod keypad;
pub mod status_bar;

pub use display::DisplayWidget;
pub use keypad::KeypadWidget;
pub use status_bar::StatusBarWidget;
