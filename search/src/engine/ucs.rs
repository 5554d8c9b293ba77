//! Uniform-cost search.
//!
//! Priority frontier keyed by accumulated cost, ties by push order. The
//! frontier settles a cell on pop, so a cell is expanded once and always at
//! its cheapest discovered cost. Parent links are fixed at expansion.

use pathfinder_kernel::grid::{Cell, Grid};

use super::{NodeIds, Recorder, Step, TraversalStep};
use crate::event::{FailureReason, SearchOutcome};
use crate::frontier::{Frontier, PriorityFrontier};
use crate::node::SearchNode;
use crate::path::ParentMap;
use crate::policy::CostModel;

#[derive(Debug)]
pub struct UcsState {
    frontier: PriorityFrontier,
    parents: ParentMap,
    ids: NodeIds,
    target: Cell,
    cost_model: CostModel,
}

impl UcsState {
    pub fn new(start: Cell, target: Cell, cost_model: CostModel, rec: &mut Recorder) -> Self {
        let mut state = Self {
            frontier: PriorityFrontier::new(),
            parents: ParentMap::new(),
            ids: NodeIds::default(),
            target,
            cost_model,
        };
        state.frontier.push(SearchNode::root(state.ids.alloc(), start));
        rec.discovered(start);
        rec.observe_frontier(state.frontier.len());
        state
    }
}

impl TraversalStep for UcsState {
    fn step(&mut self, grid: &Grid, rec: &mut Recorder) -> Step {
        let Some(node) = self.frontier.pop() else {
            return Step::Done(SearchOutcome::Failed(FailureReason::NoPath));
        };
        if !rec.expand(node.cell) {
            return Step::Done(rec.step_cap_failure());
        }
        self.parents.link(node.cell, node.parent);
        if node.cell == self.target {
            return Step::from_path(self.parents.reconstruct(node.cell));
        }
        for next in grid.neighbors(node.cell) {
            let cost = self.cost_model.step_cost(node.cell, next);
            let child = node.child(self.ids.alloc(), next, cost);
            if self.frontier.push(child) {
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
