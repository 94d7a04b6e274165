//! UI configuration
//!
//! This module contains configuration for UI appearance and behavior.

pub mod keybindings;
pub mod styles;

pub use keybindings::KeyBindings;
pub use styles::{Palette, Styles};
