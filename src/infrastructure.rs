//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Arithmetic service client and background request processing

pub mod arithmetic_client;
pub mod calc_service;
pub mod cli;
pub mod config;
pub mod tui;
