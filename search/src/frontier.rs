//! Frontier disciplines: FIFO (BFS), LIFO (DFS/DLS), and lowest-cost-first
//! (UCS).
//!
//! Membership is tracked in `BTreeMap`/`BTreeSet` (not hash containers) so
//! that any iteration over frontier contents is deterministic.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, VecDeque};

use pathfinder_kernel::grid::Cell;

use crate::node::{FrontierKey, SearchNode};

/// Common frontier interface.
pub trait Frontier {
    /// Offer a node. Returns `false` if the frontier declined it.
    fn push(&mut self, node: SearchNode) -> bool;

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<SearchNode>;

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Whether a live entry for `cell` is waiting.
    fn contains(&self, cell: Cell) -> bool;

    /// Largest `len()` observed so far.
    fn high_water(&self) -> usize;

    /// Live cells in the order they would be popped.
    fn cells(&self) -> Vec<Cell>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Live-entry counts per cell. FIFO and LIFO frontiers may hold the same
/// cell more than once (DFS tolerates duplicate pushes).
#[derive(Debug, Default)]
struct Membership {
    counts: BTreeMap<Cell, usize>,
}

impl Membership {
    fn add(&mut self, cell: Cell) {
        *self.counts.entry(cell).or_insert(0) += 1;
    }

    fn remove(&mut self, cell: Cell) {
        if let Some(count) = self.counts.get_mut(&cell) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&cell);
            }
        }
    }

    fn contains(&self, cell: Cell) -> bool {
        self.counts.contains_key(&cell)
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<SearchNode>,
    members: Membership,
    high_water: usize,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: SearchNode) -> bool {
        self.members.add(node.cell);
        self.queue.push_back(node);
        self.high_water = self.high_water.max(self.queue.len());
        true
    }

    fn pop(&mut self) -> Option<SearchNode> {
        let node = self.queue.pop_front()?;
        self.members.remove(node.cell);
        Some(node)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, cell: Cell) -> bool {
        self.members.contains(cell)
    }

    fn high_water(&self) -> usize {
        self.high_water
    }

    fn cells(&self) -> Vec<Cell> {
        self.queue.iter().map(|n| n.cell).collect()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<SearchNode>,
    members: Membership,
    high_water: usize,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: SearchNode) -> bool {
        self.members.add(node.cell);
        self.stack.push(node);
        self.high_water = self.high_water.max(self.stack.len());
        true
    }

    fn pop(&mut self) -> Option<SearchNode> {
        let node = self.stack.pop()?;
        self.members.remove(node.cell);
        Some(node)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn contains(&self, cell: Cell) -> bool {
        self.members.contains(cell)
    }

    fn high_water(&self) -> usize {
        self.high_water
    }

    fn cells(&self) -> Vec<Cell> {
        self.stack.iter().rev().map(|n| n.cell).collect()
    }
}

/// A heap entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// lowest `(cost, node_id)` first.
#[derive(Debug)]
struct PriorityEntry {
    key: Reverse<FrontierKey>,
    node: SearchNode,
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PriorityEntry {}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Lowest accumulated cost first, ties by push order.
///
/// Decrease-key is lazy: a cheaper push for a waiting cell records the new
/// best cost and adds a second heap entry; the older, costlier entry is
/// discarded when it surfaces. A cell is handed out by `pop` at most once,
/// always with the lowest cost pushed for it before that pop.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<PriorityEntry>,
    /// Best cost pushed for each waiting cell.
    best: BTreeMap<Cell, u64>,
    /// Cells already handed out by `pop`.
    settled: BTreeSet<Cell>,
    high_water: usize,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `node`, replacing a waiting entry for the same cell only if
    /// `node` is strictly cheaper.
    ///
    /// Returns `true` if the node was accepted (new cell, or cheaper than the
    /// waiting entry). Settled cells and equal-or-costlier offers are
    /// declined, so an equal-cost rediscovery never displaces the earlier
    /// push.
    pub fn decrease_or_replace(&mut self, node: SearchNode) -> bool {
        if self.settled.contains(&node.cell) {
            return false;
        }
        if let Some(&best) = self.best.get(&node.cell) {
            if best <= node.cost {
                return false;
            }
        }
        self.best.insert(node.cell, node.cost);
        self.heap.push(PriorityEntry {
            key: Reverse(FrontierKey::from(&node)),
            node,
        });
        self.high_water = self.high_water.max(self.best.len());
        true
    }

    #[cfg(test)]
    fn best_cost(&self, cell: Cell) -> Option<u64> {
        self.best.get(&cell).copied()
    }

    /// Heap entries including superseded ones.
    #[cfg(test)]
    fn raw_len(&self) -> usize {
        self.heap.len()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: SearchNode) -> bool {
        self.decrease_or_replace(node)
    }

    fn pop(&mut self) -> Option<SearchNode> {
        while let Some(PriorityEntry { node, .. }) = self.heap.pop() {
            if self.best.get(&node.cell) != Some(&node.cost) {
                // Superseded by a cheaper push, or the cell is settled.
                continue;
            }
            self.best.remove(&node.cell);
            self.settled.insert(node.cell);
            return Some(node);
        }
        None
    }

    fn len(&self) -> usize {
        self.best.len()
    }

    fn contains(&self, cell: Cell) -> bool {
        self.best.contains_key(&cell)
    }

    fn high_water(&self) -> usize {
        self.high_water
    }

    fn cells(&self) -> Vec<Cell> {
        let mut live: Vec<&PriorityEntry> = self
            .heap
            .iter()
            .filter(|e| self.best.get(&e.node.cell) == Some(&e.node.cost))
            .collect();
        live.sort_by(|a, b| b.key.cmp(&a.key));
        live.into_iter().map(|e| e.node.cell).collect()
    }
}
