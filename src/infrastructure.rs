//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Theme preference storage
//! - Email delivery

pub mod cli;
pub mod config;
pub mod email;
pub mod theme_store;
pub mod tui;
