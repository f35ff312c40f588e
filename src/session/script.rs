//! # Scripts
//!
//! A script is a fixed list of steps, each naming one car operation.

/// One car operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    DisplayStatus,
    StartEngine,
    StopEngine,
    /// Accelerate for this many simulated seconds
    Accelerate(f32),
    /// Brake for this many simulated seconds
    Brake(f32),
    /// Add this much fuel
    Refuel(f32),
    ThrowCupcake,
    ReloadCupcakes,
}

/// An ordered list of steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The demo drive: start, speed up, throw twice, slow down, park
    pub fn demo() -> Self {
        Self::new(vec![
            Step::DisplayStatus,
            Step::StartEngine,
            Step::Accelerate(2.0),
            Step::DisplayStatus,
            Step::ThrowCupcake,
            Step::ReloadCupcakes,
            Step::ThrowCupcake,
            Step::ReloadCupcakes,
            Step::DisplayStatus,
            Step::Brake(1.0),
            Step::StopEngine,
            Step::DisplayStatus,
        ])
    }

    /// Append a step
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<Step> for Script {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
