//! Search nodes and the priority ordering key.

use pathfinder_kernel::grid::Cell;

/// A discovered cell plus the bookkeeping a traversal needs.
///
/// `node_id` is assigned from a per-traversal counter in push order, so it
/// doubles as the insertion-order tie-break. `parent` and `parent_id`
/// describe the same link: cell-keyed maps use the former, the node arena
/// used by depth-limited search uses the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub cell: Cell,
    pub parent: Option<Cell>,
    /// Edges from the root (root = 0).
    pub depth: u32,
    /// Accumulated path cost (root = 0).
    pub cost: u64,
}

impl SearchNode {
    /// A root node: no parent, depth 0, cost 0.
    #[must_use]
    pub fn root(node_id: u64, cell: Cell) -> Self {
        Self {
            node_id,
            parent_id: None,
            cell,
            parent: None,
            depth: 0,
            cost: 0,
        }
    }

    /// A child of `self` one move away at `cell`.
    #[must_use]
    pub fn child(&self, node_id: u64, cell: Cell, step_cost: u64) -> Self {
        Self {
            node_id,
            parent_id: Some(self.node_id),
            cell,
            parent: Some(self.cell),
            depth: self.depth.saturating_add(1),
            cost: self.cost.saturating_add(step_cost),
        }
    }
}

/// Priority ordering key: `(cost, node_id)`.
///
/// Lower cost first; equal cost goes to the earlier push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub cost: u64,
    pub node_id: u64,
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            cost: node.cost,
            node_id: node.node_id,
        }
    }
}
