//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - [`runtime::Runtime`] owns the state, message queues and the command executor
//! - [`app_runner::AppRunner`] pumps terminal events through the runtime and renders

pub mod app_runner;
pub mod runtime;
