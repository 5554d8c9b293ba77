//! Breadth-first search.
//!
//! FIFO frontier. A cell is marked (linked in the parent map) when it is
//! discovered, so it is pushed at most once and its parent is the first cell
//! that reached it. The goal test runs at discovery: with unit edges the
//! first time the target is reached is already along a shortest path, so
//! the traversal stops without expanding the rest of that layer.

use pathfinder_kernel::grid::{Cell, Grid};

use super::{NodeIds, Recorder, Step, TraversalStep};
use crate::event::{FailureReason, SearchOutcome};
use crate::frontier::{FifoFrontier, Frontier};
use crate::node::SearchNode;
use crate::path::ParentMap;

#[derive(Debug)]
pub struct BfsState {
    frontier: FifoFrontier,
    parents: ParentMap,
    ids: NodeIds,
    target: Cell,
}

impl BfsState {
    /// Seed the frontier with `start`.
    pub fn new(start: Cell, target: Cell, rec: &mut Recorder) -> Self {
        let mut state = Self {
            frontier: FifoFrontier::new(),
            parents: ParentMap::new(),
            ids: NodeIds::default(),
            target,
        };
        state.parents.link(start, None);
        state.frontier.push(SearchNode::root(state.ids.alloc(), start));
        rec.discovered(start);
        rec.observe_frontier(state.frontier.len());
        state
    }
}

impl TraversalStep for BfsState {
    fn step(&mut self, grid: &Grid, rec: &mut Recorder) -> Step {
        let Some(node) = self.frontier.pop() else {
            return Step::Done(SearchOutcome::Failed(FailureReason::NoPath));
        };
        if !rec.expand(node.cell) {
            return Step::Done(rec.step_cap_failure());
        }
        for next in grid.neighbors(node.cell) {
            if self.parents.link(next, Some(node.cell)) {
                self.frontier.push(node.child(self.ids.alloc(), next, 1));
                rec.discovered(next);
                if next == self.target {
                    return Step::from_path(self.parents.reconstruct(next));
                }
            }
        }
        rec.observe_frontier(self.frontier.len());
        Step::Continue
    }

    fn frontier_cells(&self) -> Vec<Cell> {
        self.frontier.cells()
    }
}
