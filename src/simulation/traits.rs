// src/simulation/traits.rs

use crate::error::InputError;
use crate::model::ticket::Ticket;
use crate::simulation::clock::SimClock;
use crate::simulation::engine::RunReport;
use std::io;

/// What the carousel and the line look like partway through a tick, after
/// new baggage has come up the ramp and before anyone picks a bag up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSnapshot {
    pub clock: SimClock,
    /// Carousel slots starting at the retrieval point. `None` is an empty slot.
    pub carousel: Vec<Option<Ticket>>,
    /// Waiting passengers, front of the line first.
    pub claimants: Vec<Ticket>,
    /// Bags still waiting on the loaders.
    pub loader_remaining: usize,
}

/// Shows the simulation to whoever is watching it.
///
/// Rendering only observes state. Returning an error stops the run.
pub trait Renderer {
    fn render_tick(&mut self, snapshot: &TickSnapshot) -> io::Result<()>;

    /// Called right after `ticket` is picked up by the front passenger.
    fn render_claim(&mut self, _ticket: Ticket) -> io::Result<()> {
        Ok(())
    }

    fn render_report(&mut self, _report: &RunReport) -> io::Result<()> {
        Ok(())
    }
}

/// Decides when the next tick may start. Consulted once per tick boundary.
pub trait TickGate {
    fn advance(&mut self) -> io::Result<()>;
}

/// Supplies the numbers a run is configured with.
///
/// Implementations keep asking until they get an acceptable value; the bounds
/// are passed in so the caller stays in charge of what "acceptable" means.
pub trait InputSource {
    /// A passenger count in `1..=max`.
    fn passengers(&mut self, max: usize) -> Result<usize, InputError>;

    /// A carousel size of at least `passengers`.
    fn carousel_size(&mut self, passengers: usize) -> Result<usize, InputError>;

    /// At least one minute.
    fn total_minutes(&mut self) -> Result<usize, InputError>;
}

/// Renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Renderer for Silent {
    fn render_tick(&mut self, _snapshot: &TickSnapshot) -> io::Result<()> {
        Ok(())
    }
}

/// Never waits between ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWait;

impl TickGate for NoWait {
    fn advance(&mut self) -> io::Result<()> {
        Ok(())
    }
}
