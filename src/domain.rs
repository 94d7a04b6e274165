//! Domain layer
//!
//! Plain data and pure helpers shared by every other layer:
//! - Portfolio content (the owner's profile, projects, testimonials, ...)
//! - Theme preference
//! - Icon mapping
//! - Text utilities

pub mod contact;
pub mod content;
pub mod icon;
pub mod text;
pub mod theme;
pub mod ui;
