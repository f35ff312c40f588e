//! # Core Domain
//!
//! Pure state for the car and its parts. Nothing in here performs I/O:
//! every operation hands back [`Event`]s or a [`Refusal`] for the caller
//! to present.
//!
//! [`Event`]: event::Event
//! [`Refusal`]: event::Refusal

pub mod config;
pub mod event;

mod car;
mod engine;
mod fuel;

#[cfg(test)]
mod property_tests;

pub use car::Car;
pub use engine::Engine;
pub use fuel::FuelTank;

// ============================================================================
// TUNING CONSTANTS
// ============================================================================

/// Largest amount of fuel the tank holds (percent)
pub const TANK_CAPACITY: f32 = 100.0;

/// Fuel strictly below this level triggers the low-fuel warning
pub const LOW_FUEL_THRESHOLD: f32 = 10.0;

/// Speed gained (or shed while braking) per simulated second, in km/h
pub const SPEED_STEP_PER_SECOND: f32 = 10.0;

/// Fuel burned per simulated second of acceleration
pub const ACCELERATION_FUEL_RATE: f32 = 5.0;

/// Fuel burned by one cupcake throw
pub const CUPCAKE_FUEL_COST: f32 = 15.0;

/// Number of cupcakes the launcher slot holds
pub const CUPCAKE_SLOT_CAPACITY: u8 = 1;

/// NaN durations and amounts count as zero
///
/// `f32::clamp` passes NaN straight through, so it has to be caught before
/// it reaches a level or a speed. Infinities clamp normally.
pub(crate) fn or_zero(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}
