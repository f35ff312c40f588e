//! # JSON Lines Dashboard
//!
//! Writes each event as a single-line JSON object, tagged by `event`:
//!
//! ```text
//! {"event":"accelerating","speed":20.0,"fuel":40.0}
//! {"event":"refused","reason":"slot_full"}
//! ```

use std::io::{self, Stdout, Write};

use crate::core::event::Event;
use crate::ports::Dashboard;

/// Machine-readable dashboard over any writer
pub struct JsonDashboard<W: Write> {
    out: W,
}

impl JsonDashboard<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonDashboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Dashboard for JsonDashboard<W> {
    fn report(&mut self, event: &Event) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")
    }
}
