//! # Ports
//!
//! Trait contracts between the pure core and the outside world.
//!
//! The car never prints. A [`Dashboard`] receives each event in the order
//! it happened and decides what to do with it.

use std::io;

use crate::core::event::Event;

/// Where car events go
///
/// Implementations: `ConsoleDashboard` (text lines), `JsonDashboard`
/// (JSON lines), `EventLog` (in-memory).
pub trait Dashboard {
    /// Present one event
    fn report(&mut self, event: &Event) -> io::Result<()>;

    /// Present several events in order, stopping at the first failure
    fn report_all(&mut self, events: &[Event]) -> io::Result<()> {
        for event in events {
            self.report(event)?;
        }
        Ok(())
    }
}

impl<D: Dashboard + ?Sized> Dashboard for Box<D> {
    fn report(&mut self, event: &Event) -> io::Result<()> {
        (**self).report(event)
    }
}

impl<D: Dashboard + ?Sized> Dashboard for &mut D {
    fn report(&mut self, event: &Event) -> io::Result<()> {
        (**self).report(event)
    }
}
