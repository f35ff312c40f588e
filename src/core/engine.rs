use tracing::debug;

use super::event::Event;

/// The car's engine: on or off
///
/// Starting a running engine (or stopping a stopped one) is allowed and
/// reports the same event again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    horsepower: u32,
    running: bool,
}

impl Engine {
    pub fn new(horsepower: u32) -> Self {
        Self {
            horsepower,
            running: false,
        }
    }

    pub fn horsepower(&self) -> u32 {
        self.horsepower
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) -> Event {
        self.running = true;
        debug!(horsepower = self.horsepower, "engine started");
        Event::EngineStarted
    }

    pub fn stop(&mut self) -> Event {
        self.running = false;
        debug!("engine stopped");
        Event::EngineStopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_stopped() {
        let engine = Engine::new(300);

        assert_eq!(engine.horsepower(), 300);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_start_stop_repeat() {
        let mut engine = Engine::new(300);

        assert_eq!(engine.start(), Event::EngineStarted);
        assert_eq!(engine.start(), Event::EngineStarted);
        assert!(engine.is_running());

        assert_eq!(engine.stop(), Event::EngineStopped);
        assert_eq!(engine.stop(), Event::EngineStopped);
        assert!(!engine.is_running());
    }
}
