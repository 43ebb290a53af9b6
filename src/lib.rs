//! # calctui - Terminal calculator
//!
//! A keypad calculator for the terminal, built with Rust and Ratatui. The
//! arithmetic itself is delegated to a remote HTTP service
//! (`GET {base}/{operation}/{lhs}/{rhs}` answering `{"result": ...}`).
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (HTTP requests, logging)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use calctui::{
//!     core::msg::{calculator::CalculatorMsg, Msg},
//!     domain::operation::Operation,
//!     AppState, Cmd,
//! };
//!
//! let mut state = AppState::default();
//! let mut commands = Vec::new();
//! for msg in [
//!     CalculatorMsg::Digit('7'),
//!     CalculatorMsg::Operator(Operation::Add),
//!     CalculatorMsg::Digit('3'),
//!     CalculatorMsg::Equal,
//! ] {
//!     let (next, cmds) = calctui::update(Msg::Calculator(msg), state);
//!     state = next;
//!     commands.extend(cmds);
//! }
//!
//! assert_eq!(state.display(), "3");
//! assert!(matches!(commands.as_slice(), [Cmd::Calculate(_)]));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture: state, messages, update, commands
//! - [`domain`] - Operations, keypad layout, numeric rules
//! - [`infrastructure`] - Terminal, CLI, config, arithmetic service client
//! - [`integration`] - Runtime and app runner
//! - [`presentation`] - Components, widgets, keybindings and styles
//! - [`utils`] - Logging, panic handling, paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
