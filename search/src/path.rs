//! Parent links and path reconstruction.
//!
//! Links are written once and never overwritten, so every chain ends at a
//! root and reconstruction needs no cycle detection.

use std::collections::BTreeMap;

use pathfinder_kernel::grid::Cell;

use crate::node::SearchNode;

/// Cell-keyed, write-once parent links.
///
/// A root is recorded with parent `None`. The first link recorded for a cell
/// wins; later attempts are refused.
#[derive(Debug, Clone, Default)]
pub struct ParentMap {
    links: BTreeMap<Cell, Option<Cell>>,
}

impl ParentMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `cell`'s parent. Returns `false` (and changes nothing) if the
    /// cell already has a link.
    pub fn link(&mut self, cell: Cell, parent: Option<Cell>) -> bool {
        if self.links.contains_key(&cell) {
            return false;
        }
        self.links.insert(cell, parent);
        true
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.links.contains_key(&cell)
    }

    #[cfg(test)]
    fn parent_of(&self, cell: Cell) -> Option<Option<Cell>> {
        self.links.get(&cell).copied()
    }

    /// Walk from `terminal` back to its root; returns root→terminal order.
    ///
    /// Returns `None` if `terminal` was never recorded.
    #[must_use]
    pub fn reconstruct(&self, terminal: Cell) -> Option<Vec<Cell>> {
        let mut current = terminal;
        let mut path = vec![current];
        loop {
            match self.links.get(&current)? {
                None => break,
                Some(parent) => {
                    current = *parent;
                    path.push(current);
                }
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Join two half-searches at `meeting`.
///
/// `forward` is rooted at the start, `backward` at the target. The result is
/// `start → meeting` followed by `meeting → target` with the meeting cell
/// appearing once.
#[must_use]
pub fn join_at_meeting(forward: &ParentMap, backward: &ParentMap, meeting: Cell) -> Option<Vec<Cell>> {
    let mut path = forward.reconstruct(meeting)?;
    let back = backward.reconstruct(meeting)?;
    path.extend(back.into_iter().rev().skip(1));
    Some(path)
}

/// Append-only node store where `node_id` is the index.
///
/// Depth-limited search may expand a cell more than once (when it is reached
/// again at a shallower depth), so it cannot use a cell-keyed map. Each
/// expansion instead gets its own node whose `parent_id` points at an older
/// node, which keeps every chain acyclic.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a root node.
    pub fn root(&mut self, cell: Cell) -> SearchNode {
        let node = SearchNode::root(self.next_id(), cell);
        self.nodes.push(node.clone());
        node
    }

    /// Allocate a child of `parent` at `cell`.
    pub fn child(&mut self, parent: &SearchNode, cell: Cell, step_cost: u64) -> SearchNode {
        let node = parent.child(self.next_id(), cell, step_cost);
        self.nodes.push(node.clone());
        node
    }

    fn get(&self, node_id: u64) -> Option<&SearchNode> {
        usize::try_from(node_id).ok().and_then(|i| self.nodes.get(i))
    }

    /// Cells from the root to `node_id`.
    #[must_use]
    pub fn reconstruct(&self, node_id: u64) -> Option<Vec<Cell>> {
        let mut path = Vec::new();
        let mut current = Some(node_id);
        while let Some(id) = current {
            let node = self.get(id)?;
            path.push(node.cell);
            current = node.parent_id;
        }
        path.reverse();
        Some(path)
    }

    fn next_id(&self) -> u64 {
        self.nodes.len() as u64
    }
}
