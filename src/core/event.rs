//! # Events and Refusals
//!
//! What the car has to say about each operation.
//!
//! ## Format Design
//!
//! ```text
//! Outcome = Result<Vec<Event>, Refusal>
//! ├── Ok(events)    operation applied, events in the order they happened
//! └── Err(refusal)  precondition failed, no state changed
//! ```
//!
//! A refusal is informational. It never aborts a script; the session turns
//! it into [`Event::Refused`] and carries on.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why an operation was declined
///
/// The `Display` text is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Refusal {
    #[error("Cannot accelerate, engine is off.")]
    EngineOff,

    #[error("Cannot accelerate, out of fuel!")]
    OutOfFuel,

    #[error("No cupcakes loaded! Please reload before throwing.")]
    NoCupcake,

    #[error("Not enough fuel to throw a cupcake!")]
    InsufficientFuel,

    #[error("Cupcake slot is already loaded.")]
    SlotFull,
}

/// Result of a car operation that can be declined
pub type Outcome = Result<Vec<Event>, Refusal>;

/// Point-in-time view of the car
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Status {
    pub speed: f32,
    pub fuel: f32,
    pub engine_running: bool,
    pub cupcakes: u8,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Speed: {} km/h, Fuel: {}%, Engine Running: {}, Cupcakes Loaded: {}",
            self.speed, self.fuel, self.engine_running, self.cupcakes
        )
    }
}

/// Something the car reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Status snapshot
    Status(Status),

    EngineStarted,

    EngineStopped,

    Accelerating { speed: f32, fuel: f32 },

    Braking { speed: f32 },

    /// Fuel dropped (or stayed) below the warning threshold after a mutation
    LowFuel { fuel: f32 },

    /// Extra warning checked before a throw while fuel is low
    LowFuelThrow { fuel: f32 },

    CupcakeThrown,

    CupcakeReloaded,

    /// An operation was declined
    Refused { reason: Refusal },
}

impl Event {
    /// True for the warning events
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::LowFuel { .. } | Event::LowFuelThrow { .. })
    }
}

impl From<Refusal> for Event {
    fn from(reason: Refusal) -> Self {
        Event::Refused { reason }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Status(status) => fmt::Display::fmt(status, f),
            Event::EngineStarted => f.write_str("Engine started."),
            Event::EngineStopped => f.write_str("Engine stopped."),
            Event::Accelerating { speed, fuel } => {
                write!(f, "Accelerating: {} km/h, Fuel: {}%", speed, fuel)
            }
            Event::Braking { speed } => write!(f, "Braking: {} km/h", speed),
            Event::LowFuel { .. } => f.write_str("Warning: Fuel is low!"),
            Event::LowFuelThrow { .. } => f.write_str(
                "Warning: Fuel is low! Throwing a cupcake will consume more fuel.",
            ),
            Event::CupcakeThrown => f.write_str(
                "Threw a cupcake! It hits a cat! 🐱 Cupcake slot empty, please reload.",
            ),
            Event::CupcakeReloaded => f.write_str("Reloaded one cupcake! Ready to throw."),
            Event::Refused { reason } => fmt::Display::fmt(reason, f),
        }
    }
}
