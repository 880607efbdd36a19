// src/model/ticket.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A baggage claim ticket number. The same number is printed on a bag and
/// handed to the passenger who owns it.
///
/// Ticket numbers are always positive; an empty carousel slot is an
/// `Option<Ticket>` holding `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(NonZeroU32);

impl Ticket {
    /// Label used when an empty slot has to be shown as a number.
    pub const NO_BAGGAGE_LABEL: u32 = 0;

    /// Returns `None` for 0, which is not a valid ticket number.
    pub fn new(number: u32) -> Option<Self> {
        NonZeroU32::new(number).map(Ticket)
    }

    pub fn number(self) -> u32 {
        self.0.get()
    }

    /// The number to show for a carousel slot, using
    /// [`Ticket::NO_BAGGAGE_LABEL`] for an empty one.
    pub fn label(slot: Option<Ticket>) -> u32 {
        slot.map_or(Self::NO_BAGGAGE_LABEL, Ticket::number)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU32> for Ticket {
    fn from(number: NonZeroU32) -> Self {
        Ticket(number)
    }
}
