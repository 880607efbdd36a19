// src/simulation/config.rs

use crate::error::ConfigError;
use crate::model::roundabout::Direction;
use serde::{Deserialize, Serialize};

pub const SECS_IN_MIN: usize = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub passengers: usize,
    /// Suitcases that fit on the carousel.
    pub carousel_size: usize,
    pub total_minutes: usize,
    /// Maximum suitcases on a single loader.
    pub loader_capacity: usize,
    pub loader_count: usize,
    /// Direction the belt turns each second.
    pub rotation: Direction,
    /// Seed for ticket shuffling. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            passengers: 10,
            carousel_size: 10,
            total_minutes: 1,
            loader_capacity: 10,
            loader_count: 5,
            rotation: Direction::Backward,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Baggage can't exceed what the loaders hold.
    pub fn max_passengers(&self) -> usize {
        self.loader_capacity * self.loader_count
    }

    pub fn total_ticks(&self) -> usize {
        self.total_minutes * SECS_IN_MIN
    }

    /// The carousel has to fit every bag at once, otherwise the front
    /// passenger's bag may never make it on and the line deadlocks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_passengers() == 0 {
            return Err(ConfigError::NoLoaderSpace);
        }
        if self.passengers < 1 || self.passengers > self.max_passengers() {
            return Err(ConfigError::PassengersOutOfRange {
                actual: self.passengers,
                max: self.max_passengers(),
            });
        }
        if self.carousel_size < self.passengers {
            return Err(ConfigError::CarouselTooSmall {
                actual: self.carousel_size,
                passengers: self.passengers,
            });
        }
        if self.total_minutes < 1 {
            return Err(ConfigError::NoMinutes);
        }
        Ok(())
    }
}
