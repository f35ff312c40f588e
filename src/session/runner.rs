//! # Session Runner
//!
//! Owns a car and a dashboard, and plays steps against them.
//!
//! Refusals do not stop a run: they are reported like any other event and
//! the next step goes ahead. Only dashboard I/O failures end a run early.

use std::io;

use tracing::{debug, info};

use crate::core::config::{CarConfig, ConfigResult};
use crate::core::event::{Event, Outcome};
use crate::core::Car;
use crate::ports::Dashboard;

use super::script::{Script, Step};

/// A car wired to a dashboard
pub struct Session<D: Dashboard> {
    /// The simulated car
    car: Car,

    /// Where events are reported
    dashboard: D,
}

impl<D: Dashboard> Session<D> {
    /// Build a car from `config` and attach `dashboard`
    pub fn new(config: &CarConfig, dashboard: D) -> ConfigResult<Self> {
        Ok(Self::with_car(Car::new(config)?, dashboard))
    }

    /// Attach a dashboard to an existing car
    pub fn with_car(car: Car, dashboard: D) -> Self {
        Self { car, dashboard }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn dashboard(&self) -> &D {
        &self.dashboard
    }

    pub fn into_parts(self) -> (Car, D) {
        (self.car, self.dashboard)
    }

    // ========================================================================
    // PLAYBACK
    // ========================================================================

    /// Run one step and report what happened
    ///
    /// A refusal is reported as `Event::Refused` and returned as `Err` inside
    /// the outcome.
    pub fn apply(&mut self, step: Step) -> io::Result<Outcome> {
        debug!(?step, "applying step");

        let outcome = match step {
            Step::DisplayStatus => Ok(vec![Event::Status(self.car.display_status())]),
            Step::StartEngine => Ok(vec![self.car.start_engine()]),
            Step::StopEngine => Ok(vec![self.car.stop_engine()]),
            Step::Accelerate(time) => self.car.accelerate(time),
            Step::Brake(time) => Ok(vec![self.car.brake(time)]),
            Step::Refuel(amount) => Ok(self.car.refuel(amount).into_iter().collect()),
            Step::ThrowCupcake => self.car.throw_cupcake(),
            Step::ReloadCupcakes => self.car.reload_cupcakes(),
        };

        match &outcome {
            Ok(events) => self.dashboard.report_all(events)?,
            Err(refusal) => {
                debug!(%refusal, "step refused");
                self.dashboard.report(&Event::from(*refusal))?;
            }
        }

        Ok(outcome)
    }

    /// Run every step of `script` in order
    pub fn run(&mut self, script: &Script) -> io::Result<Vec<Outcome>> {
        info!(steps = script.len(), "starting script");

        let outcomes = script
            .steps()
            .iter()
            .map(|step| self.apply(*step))
            .collect::<io::Result<Vec<_>>>()?;

        let refused = outcomes.iter().filter(|o| o.is_err()).count();
        info!(refused, fuel = self.car.fuel(), "script finished");

        Ok(outcomes)
    }
}
