// src/simulation/clock.rs

use crate::simulation::config::SECS_IN_MIN;
use serde::Serialize;
use std::fmt;

/// Simulated time elapsed since the carousel started, one tick per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct SimClock {
    tick: usize,
}

impl SimClock {
    pub fn at(tick: usize) -> Self {
        Self { tick }
    }

    pub fn tick(self) -> usize {
        self.tick
    }

    pub fn minutes(self) -> usize {
        self.tick / SECS_IN_MIN
    }

    pub fn seconds(self) -> usize {
        self.tick % SECS_IN_MIN
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins, {} secs", self.minutes(), self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_seconds() {
        let mut clock = SimClock::at(59);
        assert_eq!((clock.minutes(), clock.seconds()), (0, 59));
        clock.advance();
        assert_eq!((clock.minutes(), clock.seconds()), (1, 0));
        assert_eq!(clock.to_string(), "1 mins, 0 secs");
    }
}
