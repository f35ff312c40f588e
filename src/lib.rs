//! # Cupcake Car
//!
//! > "It hits a cat!"
//!
//! A toy simulation of a car with a fuel gauge, an engine and a single-slot
//! cupcake launcher, driven once through a fixed script.
//!
//! ## Philosophy
//!
//! - **State, not printing** - Operations return events; something else decides how to show them
//! - **Refusals are values** - An engine that is off is an outcome, not an error
//! - **Composition over inheritance** - The car owns its fuel tank and engine
//! - **Pure core, swappable adapters** - Hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CUPCAKE CAR                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure state, no I/O)                                  │
//! │    FuelTank, Engine, Car, Event, Refusal, CarConfig         │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Dashboard                                                 │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Console, JSON lines, in-memory EventLog                  │
//! │                                                              │
//! │  SESSION (orchestration)                                     │
//! │    Session, Script, Step                                     │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cupcake_car::{CarConfig, EventLog, Script, Session};
//!
//! let mut session = Session::new(&CarConfig::default(), EventLog::new())?;
//! session.run(&Script::demo())?;
//!
//! assert_eq!(session.car().fuel(), 10.0);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure state, no I/O
/// Contains: FuelTank, Engine, Car, Event, Refusal, CarConfig
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Dashboard trait
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: console, json, memory submodules
pub mod adapters;

/// Session - orchestration layer
/// Contains: Session, Script, Step
pub mod session;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{Car, Engine, FuelTank};
pub use crate::core::config::{CarConfig, ConfigError, ConfigResult};
pub use crate::core::event::{Event, Outcome, Refusal, Status};

// Port traits
pub use crate::ports::Dashboard;

// Adapters
pub use crate::adapters::{ConsoleDashboard, EventLog, JsonDashboard};

// Session
pub use crate::session::{Script, Session, Step};
