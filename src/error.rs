// src/error.rs

use thiserror::Error;

/// Problems with the numbers a run is configured with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Passenger count must be between 1 and {max}, got {actual}")]
    PassengersOutOfRange { actual: usize, max: usize },

    #[error("Carousel must hold at least {passengers} suitcases, got {actual}")]
    CarouselTooSmall { actual: usize, passengers: usize },

    #[error("Total minutes must be at least 1")]
    NoMinutes,

    #[error("Need at least one loader with room for at least one suitcase")]
    NoLoaderSpace,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("All {loaders} loaders are full (capacity {capacity} each)")]
    Overflow { loaders: usize, capacity: usize },
}

/// Which of the two ticket orders a run starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Unload,
    Disembark,
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderKind::Unload => f.write_str("unload"),
            OrderKind::Disembark => f.write_str("disembark"),
        }
    }
}

/// Errors raised while setting up a simulation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    #[error("Invalid {which} order: {reason}")]
    InvalidOrder { which: OrderKind, reason: String },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before a valid {0} was entered")]
    Closed(&'static str),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
