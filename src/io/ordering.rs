// src/io/ordering.rs

use crate::model::ticket::Ticket;
use rand::seq::SliceRandom;
use rand::Rng;
use std::num::NonZeroU32;

/// Tickets `1..=count` in ascending order.
pub fn sequential_tickets(count: usize) -> Vec<Ticket> {
    (1..=count as u32)
        .filter_map(NonZeroU32::new)
        .map(Ticket::from)
        .collect()
}

/// Tickets `1..=count` in a random order.
pub fn shuffled_tickets<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Ticket> {
    let mut tickets = sequential_tickets(count);
    tickets.shuffle(rng);
    tickets
}

/// The two independent orders a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketOrders {
    /// Order bags come off the plane onto the loaders.
    pub unload: Vec<Ticket>,
    /// Order passengers get off the plane and join the line.
    pub disembark: Vec<Ticket>,
}

impl TicketOrders {
    pub fn generate<R: Rng + ?Sized>(passengers: usize, rng: &mut R) -> Self {
        let unload = shuffled_tickets(passengers, rng);
        let disembark = shuffled_tickets(passengers, rng);
        Self { unload, disembark }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sequential() {
        let numbers: Vec<u32> = sequential_tickets(4).into_iter().map(Ticket::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(sequential_tickets(0).is_empty());
    }

    #[test]
    fn test_shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut numbers: Vec<u32> = shuffled_tickets(50, &mut rng).into_iter().map(Ticket::number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=50).collect::<Vec<_>>());
    }

    #[test]
    fn test_generate_is_deterministic_for_a_seed() {
        let a = TicketOrders::generate(20, &mut StdRng::seed_from_u64(7));
        let b = TicketOrders::generate(20, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.unload.len(), 20);
        assert_eq!(a.disembark.len(), 20);
    }
}
