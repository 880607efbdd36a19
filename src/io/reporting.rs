// src/io/reporting.rs

use crate::error::ReportError;
use crate::model::ticket::Ticket;
use crate::simulation::engine::{RunReport, TickRecord};
use crate::simulation::traits::{Renderer, TickSnapshot};
use log::info;
use std::io::{self, Write};
use std::path::Path;

/// Writes the simulation history as CSV to any writer.
pub fn write_history<W: Write>(writer: W, data: &[TickRecord]) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(())
}

/// Writes the simulation history to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `data` - The tick records collected by the simulation engine.
pub fn write_history_file<P: AsRef<Path>>(file_path: P, data: &[TickRecord]) -> Result<(), ReportError> {
    let path = file_path.as_ref();
    let file = std::fs::File::create(path)?;
    write_history(io::BufWriter::new(file), data)?;

    info!("Exported {} rows to '{}'", data.len(), path.display());
    Ok(())
}

/// Prints each tick the way a person standing at the carousel would see it.
///
/// The carousel is shown on one line with the retrieval point on the far
/// left; empty positions show as `0`.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render_tick(&mut self, snapshot: &TickSnapshot) -> io::Result<()> {
        writeln!(self.out, "\nTime: {}", snapshot.clock)?;

        write!(self.out, "Carousel:")?;
        for slot in &snapshot.carousel {
            write!(self.out, " {}", Ticket::label(*slot))?;
        }
        writeln!(self.out)?;

        write!(self.out, "Customer: ")?;
        for (i, ticket) in snapshot.claimants.iter().enumerate() {
            if i > 0 {
                // line up with the first number
                write!(self.out, "          ")?;
            }
            writeln!(self.out, "{}", ticket)?;
        }
        if snapshot.claimants.is_empty() {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn render_claim(&mut self, ticket: Ticket) -> io::Result<()> {
        writeln!(self.out, "Baggage #{} being retrieved", ticket)
    }

    fn render_report(&mut self, report: &RunReport) -> io::Result<()> {
        if report.has_unclaimed_baggage() {
            writeln!(self.out, "\nThere is unclaimed luggage!")?;
        }
        if report.has_waiting_claimants() {
            writeln!(self.out, "\nSome customers are still waiting in line!")?;
        }
        self.out.flush()
    }
}
