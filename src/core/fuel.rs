//! # Fuel Tank
//!
//! Bounded fuel level with a low-fuel signal.

use tracing::{debug, warn};

use super::event::Event;
use super::{or_zero, LOW_FUEL_THRESHOLD, TANK_CAPACITY};

/// Fuel level in percent, always within `[0, TANK_CAPACITY]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelTank {
    level: f32,
}

impl FuelTank {
    /// Create a tank, clamping the starting level into range
    pub fn new(fuel: f32) -> Self {
        Self {
            level: fuel.clamp(0.0, TANK_CAPACITY),
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_empty(&self) -> bool {
        self.level <= 0.0
    }

    /// Below the warning threshold (exclusive: exactly 10 is not low)
    pub fn is_low(&self) -> bool {
        self.level < LOW_FUEL_THRESHOLD
    }

    /// Burn `amount`, then check the warning
    pub fn use_fuel(&mut self, amount: f32) -> Option<Event> {
        let amount = or_zero(amount);
        self.level = (self.level - amount).clamp(0.0, TANK_CAPACITY);
        debug!(amount, level = self.level, "fuel used");
        self.low_fuel_warning()
    }

    /// Add `amount`, then check the warning
    pub fn refuel(&mut self, amount: f32) -> Option<Event> {
        let amount = or_zero(amount);
        self.level = (self.level + amount).clamp(0.0, TANK_CAPACITY);
        debug!(amount, level = self.level, "refueled");
        self.low_fuel_warning()
    }

    fn low_fuel_warning(&self) -> Option<Event> {
        if self.is_low() {
            warn!(level = self.level, "fuel is low");
            Some(Event::LowFuel { fuel: self.level })
        } else {
            None
        }
    }
}
