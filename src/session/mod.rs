//! # Session
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - A car is built from its configuration
//! - Its events are routed to a dashboard
//! - Scripts of driving steps are played back

mod runner;
mod script;

pub use runner::Session;
pub use script::{Script, Step};
