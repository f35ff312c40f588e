//! # Console Dashboard
//!
//! Writes each event's message as a line of text.

use std::io::{self, Stdout, Write};

use crate::core::event::Event;
use crate::ports::Dashboard;

/// Text dashboard over any writer
pub struct ConsoleDashboard<W: Write> {
    out: W,
}

impl ConsoleDashboard<Stdout> {
    /// Dashboard on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleDashboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Dashboard for ConsoleDashboard<W> {
    fn report(&mut self, event: &Event) -> io::Result<()> {
        writeln!(self.out, "{}", event)
    }
}
