//! Integration layer
//!
//! Wires the Elm core to the outside world:
//! - Runtime driving translate/update/execute cycles
//! - AppRunner owning the terminal and the arithmetic service

pub mod app_runner;
pub mod runtime;
