//! Domain logic
//!
//! This module contains calculator-specific types and rules:
//! - Arithmetic operations and calculation requests
//! - Numeric literal validation
//! - Keypad layout
//! - Text fitting for the display

pub mod calculation;
pub mod keypad;
pub mod numeric;
pub mod operation;
pub mod text;
