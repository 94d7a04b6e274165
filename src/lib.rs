//! # Folio - a personal portfolio in the terminal
//!
//! Browse someone's profile, skills, projects, career and testimonials, switch
//! between a dark and a light theme, and send them a message through an email
//! delivery service.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** ([`core::state`]): application state, one slice per section
//! - **Message** ([`core::msg`]): events that can change the state
//! - **Update** ([`core::update`]): pure state transitions
//! - **Command** ([`core::cmd`]): side effects (theme persistence, email delivery)
//! - **View** ([`presentation::components`]): stateless rendering of the state
//!
//! ```rust
//! use folio::{core::msg::{nav::NavMsg, Msg}, core::state::nav::Section, update, AppState};
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Nav(NavMsg::Select(Section::Projects)), state);
//!
//! assert_eq!(state.nav.current, Section::Projects);
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - state, messages, update and command execution
//! - [`domain`] - portfolio content, theme and validation
//! - [`infrastructure`] - terminal, configuration, theme storage and email delivery
//! - [`integration`] - runtime and event loop
//! - [`presentation`] - components, widgets, keybindings and styles

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod raw_msg;
pub mod utils;

pub use crate::core::{
    cmd::Cmd,
    msg::Msg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::{update, update_with_context, UpdateContext},
};
pub use raw_msg::RawMsg;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
