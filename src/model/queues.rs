// src/model/queues.rs

use crate::model::ticket::Ticket;
use std::collections::VecDeque;

/// The single line of passengers waiting at the carousel.
/// Only the passenger at the front may pick up baggage.
#[derive(Debug, Clone, Default)]
pub struct ClaimantQueue {
    buffer: VecDeque<Ticket>,
}

impl ClaimantQueue {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::new(),
        }
    }

    /// A passenger joins the back of the line.
    pub fn enqueue(&mut self, ticket: Ticket) {
        self.buffer.push_back(ticket);
    }

    /// Ticket held by the passenger at the front, if anyone is waiting.
    pub fn front(&self) -> Option<Ticket> {
        self.buffer.front().copied()
    }

    /// The front passenger leaves with their bag.
    pub fn dequeue(&mut self) -> Option<Ticket> {
        self.buffer.pop_front()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Front to back.
    pub fn iter(&self) -> impl Iterator<Item = Ticket> + '_ {
        self.buffer.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(n: u32) -> Ticket {
        Ticket::new(n).unwrap()
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = ClaimantQueue::new();
        for n in [3, 1, 2] {
            queue.enqueue(ticket(n));
        }
        assert_eq!(queue.front(), Some(ticket(3)));
        assert_eq!(queue.iter().map(Ticket::number).collect::<Vec<_>>(), vec![3, 1, 2]);

        let mut served = Vec::new();
        while let Some(t) = queue.dequeue() {
            served.push(t.number());
            assert_eq!(queue.len(), 2 - (served.len() - 1));
        }
        assert_eq!(served, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_queue_has_no_front() {
        let mut queue = ClaimantQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);
        assert_eq!(queue.dequeue(), None);
    }
}
