//! # Adapters
//!
//! Swappable implementations of the Dashboard port.
//!
//! - `ConsoleDashboard` - one human-readable line per event
//! - `JsonDashboard` - one JSON object per line
//! - `EventLog` - in-memory recorder (tests, embedding)
//!
//! Adapters can be swapped without changing core logic.

mod console;
mod json;
mod memory;

pub use console::ConsoleDashboard;
pub use json::JsonDashboard;
pub use memory::EventLog;
