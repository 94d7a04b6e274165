//! Reusable UI widgets
//!
//! This module contains reusable widgets that can be used
//! across different components.

pub mod indicators;
pub mod status_bar;
pub mod tab_bar;
