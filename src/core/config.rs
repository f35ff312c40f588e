//! # Car Configuration
//!
//! The three construction parameters of a car. Everything else is a
//! tuning constant in [`crate::core`].

use thiserror::Error;

/// Errors raised when a configuration cannot build a car
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("starting fuel must be a finite number, got {0}")]
    InvalidFuel(f32),

    #[error("max speed must be a finite positive number, got {0}")]
    InvalidMaxSpeed(f32),

    #[error("horsepower must be positive, got {0}")]
    InvalidHorsepower(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Construction parameters for a [`Car`](crate::core::Car)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarConfig {
    /// Starting fuel, clamped into the tank's range on construction
    pub fuel: f32,

    /// Top speed in km/h
    pub max_speed: f32,

    /// Engine horsepower
    pub horsepower: u32,
}

impl CarConfig {
    pub fn new(fuel: f32, max_speed: f32, horsepower: u32) -> Self {
        Self {
            fuel,
            max_speed,
            horsepower,
        }
    }

    pub fn with_fuel(mut self, fuel: f32) -> Self {
        self.fuel = fuel;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_horsepower(mut self, horsepower: u32) -> Self {
        self.horsepower = horsepower;
        self
    }

    /// Check that a car can be built from this configuration
    ///
    /// Out-of-range fuel is fine (the tank clamps it); NaN and infinities
    /// are not, since they would survive clamping.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.fuel.is_finite() {
            return Err(ConfigError::InvalidFuel(self.fuel));
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(ConfigError::InvalidMaxSpeed(self.max_speed));
        }
        if self.horsepower == 0 {
            return Err(ConfigError::InvalidHorsepower(self.horsepower));
        }
        Ok(())
    }
}

impl Default for CarConfig {
    /// The demo car: half a tank, 200 km/h, 300 hp
    fn default() -> Self {
        Self::new(50.0, 200.0, 300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_demo_car() {
        let config = CarConfig::default();

        assert_eq!(config.fuel, 50.0);
        assert_eq!(config.max_speed, 200.0);
        assert_eq!(config.horsepower, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = CarConfig::default()
            .with_fuel(5.0)
            .with_max_speed(120.0)
            .with_horsepower(90);

        assert_eq!(config, CarConfig::new(5.0, 120.0, 90));
    }

    #[test]
    fn test_out_of_range_fuel_is_valid() {
        assert!(CarConfig::default().with_fuel(250.0).validate().is_ok());
        assert!(CarConfig::default().with_fuel(-3.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            CarConfig::default().with_fuel(f32::NAN).validate(),
            Err(ConfigError::InvalidFuel(_))
        ));
        assert_eq!(
            CarConfig::default().with_max_speed(0.0).validate(),
            Err(ConfigError::InvalidMaxSpeed(0.0))
        );
        assert!(matches!(
            CarConfig::default().with_max_speed(f32::INFINITY).validate(),
            Err(ConfigError::InvalidMaxSpeed(_))
        ));
        assert_eq!(
            CarConfig::default().with_horsepower(0).validate(),
            Err(ConfigError::InvalidHorsepower(0))
        );
    }
}
