//! Depth-first search without a depth bound.
//!
//! LIFO frontier. A cell may sit on the stack more than once; it is expanded
//! only the first time it is popped, and its parent link is fixed at that
//! moment. Neighbors are pushed in reverse table order so that Up is
//! explored first.

use std::collections::BTreeSet;

use pathfinder_kernel::grid::{Cell, Grid};

use super::{NodeIds, Recorder, Step, TraversalStep};
use crate::event::{FailureReason, SearchOutcome};
use crate::frontier::{Frontier, LifoFrontier};
use crate::node::SearchNode;
use crate::path::ParentMap;

#[derive(Debug)]
pub struct DfsState {
    frontier: LifoFrontier,
    explored: BTreeSet<Cell>,
    parents: ParentMap,
    ids: NodeIds,
    target: Cell,
}

impl DfsState {
    pub fn new(start: Cell, target: Cell, rec: &mut Recorder) -> Self {
        let mut state = Self {
            frontier: LifoFrontier::new(),
            explored: BTreeSet::new(),
            parents: ParentMap::new(),
            ids: NodeIds::default(),
            target,
        };
        state.frontier.push(SearchNode::root(state.ids.alloc(), start));
        rec.discovered(start);
        rec.observe_frontier(state.frontier.len());
        state
    }

    /// Pop until an unexpanded cell surfaces.
    fn pop_fresh(&mut self) -> Option<SearchNode> {
        while let Some(node) = self.frontier.pop() {
            if !self.explored.contains(&node.cell) {
                return Some(node);
            }
        }
        None
    }
}

impl TraversalStep for DfsState {
    fn step(&mut self, grid: &Grid, rec: &mut Recorder) -> Step {
        let Some(node) = self.pop_fresh() else {
            return Step::Done(SearchOutcome::Failed(FailureReason::NoPath));
        };
        if !rec.expand(node.cell) {
            return Step::Done(rec.step_cap_failure());
        }
        self.explored.insert(node.cell);
        self.parents.link(node.cell, node.parent);
        if node.cell == self.target {
            return Step::from_path(self.parents.reconstruct(node.cell));
        }

        let children: Vec<Cell> = grid.neighbors(node.cell).collect();
        for next in children.into_iter().rev() {
            if self.explored.contains(&next) {
                continue;
            }
            self.frontier.push(node.child(self.ids.alloc(), next, 1));
            rec.discovered(next);
        }
        rec.observe_frontier(self.frontier.len());
        Step::Continue
    }

    fn frontier_cells(&self) -> Vec<Cell> {
        self.frontier
            .cells()
            .into_iter()
            .filter(|c| !self.explored.contains(c))
            .collect()
    }
}
