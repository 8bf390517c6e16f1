//! Open lists.
//!
//! A frontier holds handles of open nodes; costs live in the [`NodePool`] and
//! are read through it. Both implementations pop the node with the lowest `f`
//! and break ties by insertion order, so they expand nodes in exactly the
//! same sequence.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::{NodeId, NodePool};

pub(crate) trait Frontier {
    /// A node entered the frontier for the first time.
    fn push(&mut self, id: NodeId, pool: &NodePool);

    /// An open node's `f` decreased.
    fn relaxed(&mut self, id: NodeId, pool: &NodePool);

    /// Remove and return the open node with the lowest `f`.
    fn pop(&mut self, pool: &NodePool) -> Option<NodeId>;

    /// Number of open nodes.
    fn len(&self) -> usize;
}

// ---------------------------------------------------------------------------
// ScanFrontier
// ---------------------------------------------------------------------------

/// Insertion-ordered list, scanned in full on every pop.
#[derive(Debug, Default)]
pub(crate) struct ScanFrontier {
    open: Vec<NodeId>,
}

impl Frontier for ScanFrontier {
    fn push(&mut self, id: NodeId, _pool: &NodePool) {
        self.open.push(id);
    }

    fn relaxed(&mut self, _id: NodeId, _pool: &NodePool) {
        // Costs are read from the pool at pop time and the node keeps its
        // place in the list.
    }

    fn pop(&mut self, pool: &NodePool) -> Option<NodeId> {
        let mut best = 0;
        let mut best_f = pool.node(*self.open.first()?).f;
        for (i, &id) in self.open.iter().enumerate().skip(1) {
            let f = pool.node(id).f;
            if f < best_f {
                best = i;
                best_f = f;
            }
        }
        Some(self.open.remove(best))
    }

    fn len(&self) -> usize {
        self.open.len()
    }
}

// ---------------------------------------------------------------------------
// HeapFrontier
// ---------------------------------------------------------------------------

/// Heap entry: a node together with the `f` it had when pushed.
#[derive(Debug, Clone, Copy)]
struct Entry {
    f: f64,
    id: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse both keys so BinaryHeap (max-heap) pops the smallest f,
        // then the oldest node.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap on `(f, insertion order)`.
///
/// Relaxation pushes a fresh entry instead of fixing the old one up; entries
/// whose node has since been closed or whose `f` has since dropped are
/// skipped when they surface.
#[derive(Debug, Default)]
pub(crate) struct HeapFrontier {
    heap: BinaryHeap<Entry>,
    open: usize,
}

impl Frontier for HeapFrontier {
    fn push(&mut self, id: NodeId, pool: &NodePool) {
        self.heap.push(Entry {
            f: pool.node(id).f,
            id,
        });
        self.open += 1;
    }

    fn relaxed(&mut self, id: NodeId, pool: &NodePool) {
        self.heap.push(Entry {
            f: pool.node(id).f,
            id,
        });
    }

    fn pop(&mut self, pool: &NodePool) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            let node = pool.node(entry.id);
            // Stale entries.
            if node.closed || entry.f.total_cmp(&node.f) != Ordering::Equal {
                continue;
            }
            self.open -= 1;
            return Some(entry.id);
        }
        None
    }

    fn len(&self) -> usize {
        self.open
    }
}
