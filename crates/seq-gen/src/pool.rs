//! Candidate pool: smallest unconsumed run-sum first, no duplicate values.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// What happened to a pushed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Value was new and is now in the pool
    Inserted,
    /// Value was already pending
    Duplicate,
}

/// Min-priority pool of representable sums.
///
/// The heap and the membership set always hold the same values.
#[derive(Debug, Default)]
pub struct CandidatePool {
    heap: BinaryHeap<Reverse<u64>>,
    members: HashSet<u64>,
}

impl CandidatePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` unless it is already pending.
    pub fn push(&mut self, value: u64) -> PushOutcome {
        if !self.members.insert(value) {
            return PushOutcome::Duplicate;
        }
        self.heap.push(Reverse(value));

        debug_assert_eq!(self.heap.len(), self.members.len());
        PushOutcome::Inserted
    }

    /// Remove and return the smallest pending value.
    pub fn pop_min(&mut self) -> Option<u64> {
        let Reverse(value) = self.heap.pop()?;
        let removed = self.members.remove(&value);
        debug_assert!(removed, "Heap and membership set diverged");
        Some(value)
    }

    /// Smallest pending value without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(v)| *v)
    }

    /// Whether `value` is pending.
    #[must_use]
    pub fn contains(&self, value: u64) -> bool {
        self.members.contains(&value)
    }

    /// Number of pending values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
