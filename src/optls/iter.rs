//! Direction-fixed cursor over a list's entries.
use std::iter::FusedIterator;

use crate::optent::OptEntry;

/// Traversal direction, chosen when the iterator is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Borrowing iterator; the list cannot be mutated while it is alive.
#[derive(Debug, Clone)]
pub struct OptIter<'a, 'm> {
    entries: &'a [OptEntry<'m>],
    front: usize,
    back: usize,
    direction: Direction,
}

impl<'a, 'm> OptIter<'a, 'm> {
    #[must_use]
    pub fn new(entries: &'a [OptEntry<'m>], direction: Direction) -> Self {
        Self {
            entries,
            front: 0,
            back: entries.len(),
            direction,
        }
    }

    /// Rewind to the first entry in `direction`.
    pub fn reset(&mut self, direction: Direction) {
        self.front = 0;
        self.back = self.entries.len();
        self.direction = direction;
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<'a, 'm> Iterator for OptIter<'a, 'm> {
    type Item = &'a OptEntry<'m>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        match self.direction {
            Direction::Forward => {
                let ent = self.entries.get(self.front);
                self.front += 1;
                ent
            }
            Direction::Backward => {
                self.back -= 1;
                self.entries.get(self.back)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl ExactSizeIterator for OptIter<'_, '_> {}

impl FusedIterator for OptIter<'_, '_> {}
