// src/model/roundabout.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

/// Which way the cursor moves when a [`Roundabout`] rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Towards the successor of the current slot.
    Forward,
    /// Towards the predecessor of the current slot.
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    next: usize,
    prev: usize,
}

/// A circular doubly-linked list with a movable "current position".
///
/// Slots live in a dense arena and link to each other by index, so inserting
/// before the cursor and removing at the cursor never walk the chain. The
/// arena is kept compact: removing a slot moves the last arena entry into the
/// hole and patches the links that pointed at it.
///
/// ```
/// use baggage_carousel::model::roundabout::{Direction, Roundabout};
///
/// let mut ring = Roundabout::new();
/// ring.insert(3);
/// ring.insert(2);
/// ring.insert(1);
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// ring.rotate(Direction::Backward);
/// assert_eq!(ring.current(), Some(&3));
/// ```
pub struct Roundabout<T> {
    slots: Vec<Slot<T>>,
    cursor: Option<usize>,
}

impl<T> Roundabout<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            cursor: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            cursor: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_none()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// The value at the current position, or `None` when the list is empty.
    pub fn current(&self) -> Option<&T> {
        self.cursor.map(|idx| &self.slots[idx].value)
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.cursor {
            Some(idx) => Some(&mut self.slots[idx].value),
            None => None,
        }
    }

    /// Inserts `value` just before the current position.
    /// The new slot becomes the current position.
    pub fn insert(&mut self, value: T) {
        let idx = self.slots.len();
        match self.cursor {
            None => {
                // A lone slot is its own neighbour in both directions.
                self.slots.push(Slot {
                    value,
                    next: idx,
                    prev: idx,
                });
            }
            Some(cur) => {
                let prev = self.slots[cur].prev;
                self.slots.push(Slot {
                    value,
                    next: cur,
                    prev,
                });
                self.slots[prev].next = idx;
                self.slots[cur].prev = idx;
            }
        }
        self.cursor = Some(idx);
        debug_assert!(self.links_consistent());
    }

    /// Removes the value at the current position, if any, and returns it.
    /// The slot after the removed one becomes the current position.
    pub fn remove(&mut self) -> Option<T> {
        let cur = self.cursor?;

        if self.slots.len() == 1 {
            self.cursor = None;
            return self.slots.pop().map(|slot| slot.value);
        }

        let Slot { next, prev, .. } = self.slots[cur];
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        let mut new_cursor = next;

        let removed = self.slots.swap_remove(cur);

        // The former last entry now sits at `cur`; repoint whoever linked to it.
        let moved_from = self.slots.len();
        if cur != moved_from {
            // A lone survivor still links to itself by its old index.
            let relink = |idx: usize| if idx == moved_from { cur } else { idx };
            let next = relink(self.slots[cur].next);
            let prev = relink(self.slots[cur].prev);
            self.slots[cur].next = next;
            self.slots[cur].prev = prev;
            self.slots[prev].next = cur;
            self.slots[next].prev = cur;
            if new_cursor == moved_from {
                new_cursor = cur;
            }
        }

        self.cursor = Some(new_cursor);
        debug_assert!(self.links_consistent());
        Some(removed.value)
    }

    /// Moves the current position one slot in `direction`. No-op when empty.
    pub fn rotate(&mut self, direction: Direction) {
        if let Some(cur) = self.cursor {
            let slot = &self.slots[cur];
            self.cursor = Some(match direction {
                Direction::Forward => slot.next,
                Direction::Backward => slot.prev,
            });
        }
    }

    pub fn rotate_forward(&mut self) {
        self.rotate(Direction::Forward);
    }

    pub fn rotate_backward(&mut self) {
        self.rotate(Direction::Backward);
    }

    /// Drops every slot and leaves the list empty.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.cursor = None;
    }

    /// Walks the list once, starting at the current position and following
    /// successors.
    pub fn iter(&self) -> Iter<'_, T> {
        match self.cursor {
            Some(cur) => Iter {
                slots: &self.slots,
                front: cur,
                back: self.slots[cur].prev,
                remaining: self.slots.len(),
            },
            None => Iter {
                slots: &self.slots,
                front: 0,
                back: 0,
                remaining: 0,
            },
        }
    }

    /// Checks that successors and predecessors form one ring through the
    /// cursor that visits every slot exactly once.
    pub(crate) fn links_consistent(&self) -> bool {
        let cur = match self.cursor {
            Some(cur) => cur,
            None => return self.slots.is_empty(),
        };
        if cur >= self.slots.len() {
            return false;
        }

        let mut seen = vec![false; self.slots.len()];
        let mut idx = cur;
        for _ in 0..self.slots.len() {
            let slot = match self.slots.get(idx) {
                Some(slot) => slot,
                None => return false,
            };
            if seen[idx] || slot.next >= self.slots.len() {
                return false;
            }
            seen[idx] = true;
            if self.slots[slot.next].prev != idx {
                return false;
            }
            idx = slot.next;
        }
        idx == cur
    }
}

impl<T> Default for Roundabout<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Roundabout<T> {
    /// Copies `other`'s values in cursor order into `self`, which must be empty.
    fn copy_from(&mut self, other: &Self) {
        // Inserting before the cursor prepends, so walk the source backwards.
        for value in other.iter().rev() {
            self.insert(value.clone());
        }
    }
}

impl<T: Clone> Clone for Roundabout<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        copy.copy_from(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_from(source);
    }
}

impl<T: PartialEq> PartialEq for Roundabout<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Roundabout<T> {}

impl<T: fmt::Debug> fmt::Debug for Roundabout<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Values separated by single spaces, starting at the current position.
impl<T: fmt::Display> fmt::Display for Roundabout<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Each value is inserted in turn, so the last one ends up current and the
/// resulting order is the reverse of the input.
impl<T> Extend<T> for Roundabout<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Roundabout<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

impl<'a, T> IntoIterator for &'a Roundabout<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Roundabout`], see [`Roundabout::iter`].
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = &self.slots[self.front];
        self.front = slot.next;
        self.remaining -= 1;
        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = &self.slots[self.back];
        self.back = slot.prev;
        self.remaining -= 1;
        Some(&slot.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}
