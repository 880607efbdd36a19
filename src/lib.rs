//! Baggage claim carousel simulation.
//!
//! Bags come off the plane onto a bank of loaders, ride up to a circular
//! carousel one at a time, and are picked up by passengers waiting in a single
//! line. Only the passenger at the front of the line may take a bag, and only
//! when their bag is at the retrieval point.
//!
//! The carousel is a [`Roundabout`](model::roundabout::Roundabout): a circular
//! list with a cursor that marks the retrieval point.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;

pub use error::{ConfigError, InputError, LoaderError, ReportError, SimulationError};
pub use model::roundabout::{Direction, Roundabout};
pub use model::ticket::Ticket;
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{CarouselSimulation, RunReport, TickOutcome, TickRecord};
