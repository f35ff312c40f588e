//! # Event Log Adapter
//!
//! In-memory dashboard that keeps every event it is given.
//!
//! Good for:
//! - Testing
//! - Embedding the simulation behind another front end

use std::io;

use crate::core::event::Event;
use crate::ports::Dashboard;

/// In-memory dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of low-fuel warnings recorded
    pub fn warnings(&self) -> usize {
        self.events.iter().filter(|e| e.is_warning()).count()
    }

    /// Render every event as it would appear on the console
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Dashboard for EventLog {
    fn report(&mut self, event: &Event) -> io::Result<()> {
        self.events.push(*event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();

        log.report(&Event::EngineStarted).unwrap();
        log.report(&Event::LowFuel { fuel: 4.0 }).unwrap();
        log.report(&Event::EngineStopped).unwrap();

        assert_eq!(log.len(), 3);
        assert_eq!(log.warnings(), 1);
        assert_eq!(
            log.lines(),
            vec!["Engine started.", "Warning: Fuel is low!", "Engine stopped."]
        );
    }

    #[test]
    fn test_event_log_clear() {
        let mut log = EventLog::new();
        log.report(&Event::CupcakeReloaded).unwrap();

        log.clear();

        assert!(log.is_empty());
    }
}
