//! Min-priority frontier for the label-setting loop.
//!
//! `BinaryHeap` is a max-heap, so the entry ordering is reversed. Entries
//! with equal distance come out in the order they were pushed, which keeps
//! traces reproducible. There is no decrease-key: an improved node is pushed
//! again and the engine skips the stale entry when it surfaces.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    distance: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse both keys: smaller distance, then earlier push, pops first.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Node indices keyed by tentative distance.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, node: usize, distance: f64) {
        self.heap.push(FrontierEntry {
            distance,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    /// Remove the entry with the smallest distance.
    pub(crate) fn pop(&mut self) -> Option<(usize, f64)> {
        self.heap.pop().map(|e| (e.node, e.distance))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
