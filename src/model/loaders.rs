// src/model/loaders.rs

use crate::error::LoaderError;
use crate::model::ticket::Ticket;
use log::debug;

/// The loaders baggage is stacked onto as it comes off the plane.
///
/// Each loader is a stack bounded at `capacity`. Baggage goes onto the first
/// loader until it is full, then the next one; it comes back off the top of
/// the first loader that still holds anything.
#[derive(Debug, Clone)]
pub struct LoaderBank {
    loaders: Vec<Vec<Ticket>>,
    capacity: usize,
    // Loader currently being filled. Never moves backwards.
    filling: usize,
}

impl LoaderBank {
    pub fn new(loader_count: usize, capacity: usize) -> Self {
        Self {
            loaders: (0..loader_count)
                .map(|_| Vec::with_capacity(capacity))
                .collect(),
            capacity,
            filling: 0,
        }
    }

    /// Stacks every ticket in unload order.
    pub fn fill<I>(&mut self, unload_order: I) -> Result<(), LoaderError>
    where
        I: IntoIterator<Item = Ticket>,
    {
        for ticket in unload_order {
            self.push(ticket)?;
        }
        Ok(())
    }

    /// Places one piece of baggage on top of the loader being filled,
    /// moving on to the next loader if that one is full.
    pub fn push(&mut self, ticket: Ticket) -> Result<(), LoaderError> {
        while self.filling < self.loaders.len() && self.loaders[self.filling].len() == self.capacity {
            if self.filling + 1 < self.loaders.len() {
                debug!(
                    "Loader #{} full, filling loader #{}",
                    self.filling + 1,
                    self.filling + 2
                );
            }
            self.filling += 1;
        }

        match self.loaders.get_mut(self.filling) {
            Some(loader) => {
                loader.push(ticket);
                Ok(())
            }
            None => Err(LoaderError::Overflow {
                loaders: self.loaders.len(),
                capacity: self.capacity,
            }),
        }
    }

    /// Takes the top piece of baggage off the first non-empty loader.
    /// Returns `None` once every loader is empty.
    pub fn drain_next(&mut self) -> Option<Ticket> {
        self.loaders.iter_mut().find_map(|loader| loader.pop())
    }

    /// Total baggage still on the loaders.
    pub fn len(&self) -> usize {
        self.loaders.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.iter().all(Vec::is_empty)
    }

    pub fn loader_count(&self) -> usize {
        self.loaders.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Contents of one loader, bottom to top.
    pub fn loader(&self, index: usize) -> Option<&[Ticket]> {
        self.loaders.get(index).map(Vec::as_slice)
    }
}
