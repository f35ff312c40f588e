//! # Car
//!
//! The player's car. Owns a [`FuelTank`], an [`Engine`] and the cupcake
//! slot, and exposes every operation the driver script can call.
//!
//! Speed and engine state are independent axes, except that stopping the
//! engine halts the car on the spot.

use tracing::debug;

use super::config::{CarConfig, ConfigResult};
use super::engine::Engine;
use super::event::{Event, Outcome, Refusal, Status};
use super::fuel::FuelTank;
use super::{
    or_zero, ACCELERATION_FUEL_RATE, CUPCAKE_FUEL_COST, CUPCAKE_SLOT_CAPACITY, LOW_FUEL_THRESHOLD,
    SPEED_STEP_PER_SECOND,
};

/// A car with a fuel tank, an engine and a cupcake launcher
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    /// Fuel subsystem
    tank: FuelTank,

    /// Engine (running/stopped)
    engine: Engine,

    /// Current speed in km/h, within `[0, max_speed]`
    speed: f32,

    /// Top speed in km/h
    max_speed: f32,

    /// Cupcakes in the launcher slot, at most `CUPCAKE_SLOT_CAPACITY`
    cupcakes: u8,
}

impl Car {
    /// Build a car from a validated configuration
    ///
    /// The car starts parked with its engine off and one cupcake loaded.
    pub fn new(config: &CarConfig) -> ConfigResult<Self> {
        config.validate()?;

        Ok(Self {
            tank: FuelTank::new(config.fuel),
            engine: Engine::new(config.horsepower),
            speed: 0.0,
            max_speed: config.max_speed,
            cupcakes: CUPCAKE_SLOT_CAPACITY,
        })
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn fuel(&self) -> f32 {
        self.tank.level()
    }

    pub fn cupcakes(&self) -> u8 {
        self.cupcakes
    }

    pub fn horsepower(&self) -> u32 {
        self.engine.horsepower()
    }

    pub fn is_engine_running(&self) -> bool {
        self.engine.is_running()
    }

    // ========================================================================
    // ENGINE
    // ========================================================================

    pub fn start_engine(&mut self) -> Event {
        self.engine.start()
    }

    /// Stop the engine and drop speed to zero, whatever it was
    pub fn stop_engine(&mut self) -> Event {
        let event = self.engine.stop();
        self.speed = 0.0;
        event
    }

    // ========================================================================
    // DRIVING
    // ========================================================================

    /// Accelerate for `time` simulated seconds
    ///
    /// Needs a running engine and some fuel. Gains 10 km/h per second up to
    /// the top speed and burns 5 fuel per second; a low-fuel warning, if
    /// any, comes before the acceleration report. A NaN duration counts as
    /// zero seconds.
    pub fn accelerate(&mut self, time: f32) -> Outcome {
        if !self.engine.is_running() {
            return Err(Refusal::EngineOff);
        }
        if self.tank.is_empty() {
            return Err(Refusal::OutOfFuel);
        }

        let time = or_zero(time);
        self.speed = (self.speed + SPEED_STEP_PER_SECOND * time).clamp(0.0, self.max_speed);

        let mut events: Vec<Event> = self
            .tank
            .use_fuel(time * ACCELERATION_FUEL_RATE)
            .into_iter()
            .collect();
        debug!(time, speed = self.speed, fuel = self.fuel(), "accelerated");

        events.push(Event::Accelerating {
            speed: self.speed,
            fuel: self.fuel(),
        });
        Ok(events)
    }

    /// Brake for `time` simulated seconds, engine or not
    ///
    /// A negative duration cannot push the car past its top speed.
    pub fn brake(&mut self, time: f32) -> Event {
        let time = or_zero(time);
        self.speed = (self.speed - SPEED_STEP_PER_SECOND * time).clamp(0.0, self.max_speed);
        debug!(time, speed = self.speed, "braked");
        Event::Braking { speed: self.speed }
    }

    /// Top up the tank
    pub fn refuel(&mut self, amount: f32) -> Option<Event> {
        self.tank.refuel(amount)
    }

    // ========================================================================
    // CUPCAKE LAUNCHER
    // ========================================================================

    /// Fire the loaded cupcake
    ///
    /// Declined without touching fuel if the slot is empty or the tank holds
    /// less than the throw cost.
    pub fn throw_cupcake(&mut self) -> Outcome {
        if self.cupcakes == 0 {
            return Err(Refusal::NoCupcake);
        }
        if self.fuel() < CUPCAKE_FUEL_COST {
            return Err(Refusal::InsufficientFuel);
        }

        let mut events = Vec::new();

        // Unreachable while the throw cost exceeds the threshold.
        if self.fuel() < LOW_FUEL_THRESHOLD {
            events.push(Event::LowFuelThrow { fuel: self.fuel() });
        }

        self.cupcakes -= 1;
        events.extend(self.tank.use_fuel(CUPCAKE_FUEL_COST));
        debug!(fuel = self.fuel(), "cupcake thrown");

        events.push(Event::CupcakeThrown);
        Ok(events)
    }

    /// Fill the slot back up
    pub fn reload_cupcakes(&mut self) -> Outcome {
        if self.cupcakes >= CUPCAKE_SLOT_CAPACITY {
            return Err(Refusal::SlotFull);
        }

        self.cupcakes = CUPCAKE_SLOT_CAPACITY;
        debug!(cupcakes = self.cupcakes, "cupcakes reloaded");
        Ok(vec![Event::CupcakeReloaded])
    }

    // ========================================================================
    // STATUS
    // ========================================================================

    pub fn display_status(&self) -> Status {
        Status {
            speed: self.speed,
            fuel: self.fuel(),
            engine_running: self.engine.is_running(),
            cupcakes: self.cupcakes,
        }
    }
}
