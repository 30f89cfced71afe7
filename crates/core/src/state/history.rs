use std::collections::VecDeque;

use super::GameState;

/// Bounded stack of pre-mutation snapshots powering undo.
///
/// Ordered oldest first. Pushing beyond capacity discards the oldest
/// entry; only the top is ever popped.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: VecDeque<GameState>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a snapshot, discarding the oldest entry when full.
    pub fn push(&mut self, snapshot: GameState) {
        if self.capacity == 0 {
            return;
        }
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Pops the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
