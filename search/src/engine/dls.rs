//! Depth-limited search.
//!
//! LIFO frontier with a depth counter; nothing is pushed beyond the limit.
//! A cell already expanded is re-opened only when it is reached again at a
//! strictly smaller depth, which guarantees that every cell within `limit`
//! edges of the start is eventually expanded at its true distance. Because a
//! cell can be expanded more than once, parent links live on a node arena.
//!
//! When the frontier empties the result is `DepthExhausted` if some neighbor
//! was cut off at the limit and never expanded afterwards, else `NoPath`.

use std::collections::{BTreeMap, BTreeSet};

use pathfinder_kernel::grid::{Cell, Grid};

use super::{Recorder, Step, TraversalStep};
use crate::event::{FailureReason, SearchOutcome};
use crate::frontier::{Frontier, LifoFrontier};
use crate::path::NodeArena;

#[derive(Debug)]
pub struct DlsState {
    frontier: LifoFrontier,
    arena: NodeArena,
    /// Shallowest depth at which each cell has been expanded.
    shallowest: BTreeMap<Cell, u32>,
    /// Cells cut off at the limit.
    pruned: BTreeSet<Cell>,
    target: Cell,
    limit: u32,
}

impl DlsState {
    pub fn new(start: Cell, target: Cell, limit: u32, rec: &mut Recorder) -> Self {
        let mut state = Self {
            frontier: LifoFrontier::new(),
            arena: NodeArena::new(),
            shallowest: BTreeMap::new(),
            pruned: BTreeSet::new(),
            target,
            limit,
        };
        let root = state.arena.root(start);
        state.frontier.push(root);
        rec.discovered(start);
        rec.observe_frontier(state.frontier.len());
        state
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    fn reached_by(&self, cell: Cell, depth: u32) -> bool {
        self.shallowest.get(&cell).is_some_and(|&d| d <= depth)
    }

    fn exhausted(&self) -> FailureReason {
        if self.pruned.iter().any(|c| !self.shallowest.contains_key(c)) {
            FailureReason::DepthExhausted { limit: self.limit }
        } else {
            FailureReason::NoPath
        }
    }
}

impl TraversalStep for DlsState {
    fn step(&mut self, grid: &Grid, rec: &mut Recorder) -> Step {
        let node = loop {
            let Some(node) = self.frontier.pop() else {
                return Step::Done(SearchOutcome::Failed(self.exhausted()));
            };
            if !self.reached_by(node.cell, node.depth) {
                break node;
            }
        };
        if !rec.expand(node.cell) {
            return Step::Done(rec.step_cap_failure());
        }
        self.shallowest.insert(node.cell, node.depth);
        if node.cell == self.target {
            return Step::from_path(self.arena.reconstruct(node.node_id));
        }

        let child_depth = node.depth.saturating_add(1);
        let children: Vec<Cell> = grid
            .neighbors(node.cell)
            .filter(|&c| !self.reached_by(c, child_depth))
            .collect();
        if child_depth > self.limit {
            self.pruned.extend(children);
        } else {
            for next in children.into_iter().rev() {
                let child = self.arena.child(&node, next, 1);
                self.frontier.push(child);
                rec.discovered(next);
            }
        }
        rec.observe_frontier(self.frontier.len());
        Step::Continue
    }

    fn frontier_cells(&self) -> Vec<Cell> {
        self.frontier.cells()
    }
}
