//! Bidirectional breadth-first search.
//!
//! Two FIFO halves, one rooted at the start and one at the target, take
//! turns expanding one cell each, start side first. A cell popped on one
//! side that the other side has already discovered is the meeting cell.
//! Both halves use the same six-direction table; the table is closed under
//! negation, so a backward link is also a legal forward move.

use pathfinder_kernel::grid::{Cell, Grid};

use super::{NodeIds, Recorder, Step, TraversalStep};
use crate::event::{FailureReason, SearchOutcome};
use crate::frontier::{FifoFrontier, Frontier};
use crate::node::SearchNode;
use crate::path::{join_at_meeting, ParentMap};

#[derive(Debug, Default)]
struct Half {
    frontier: FifoFrontier,
    parents: ParentMap,
}

impl Half {
    fn seed(&mut self, ids: &mut NodeIds, cell: Cell, rec: &mut Recorder) {
        self.parents.link(cell, None);
        self.frontier.push(SearchNode::root(ids.alloc(), cell));
        rec.discovered(cell);
    }
}

#[derive(Debug)]
pub struct BidirectionalState {
    forward: Half,
    backward: Half,
    ids: NodeIds,
    forward_turn: bool,
}

impl BidirectionalState {
    pub fn new(start: Cell, target: Cell, rec: &mut Recorder) -> Self {
        let mut state = Self {
            forward: Half::default(),
            backward: Half::default(),
            ids: NodeIds::default(),
            forward_turn: true,
        };
        state.forward.seed(&mut state.ids, start, rec);
        state.backward.seed(&mut state.ids, target, rec);
        rec.observe_frontier(state.combined_len());
        state
    }

    fn combined_len(&self) -> usize {
        self.forward.frontier.len() + self.backward.frontier.len()
    }
}

impl TraversalStep for BidirectionalState {
    fn step(&mut self, grid: &Grid, rec: &mut Recorder) -> Step {
        if self.forward.frontier.is_empty() || self.backward.frontier.is_empty() {
            return Step::Done(SearchOutcome::Failed(FailureReason::NoPath));
        }
        let (active, other) = if self.forward_turn {
            (&mut self.forward, &self.backward)
        } else {
            (&mut self.backward, &self.forward)
        };
        let Some(node) = active.frontier.pop() else {
            return Step::Done(SearchOutcome::Failed(FailureReason::NoPath));
        };
        if !rec.expand(node.cell) {
            return Step::Done(rec.step_cap_failure());
        }
        if other.parents.contains(node.cell) {
            rec.record_meeting(node.cell);
            return Step::from_path(join_at_meeting(
                &self.forward.parents,
                &self.backward.parents,
                node.cell,
            ));
        }
        for next in grid.neighbors(node.cell) {
            if active.parents.link(next, Some(node.cell)) {
                active.frontier.push(node.child(self.ids.alloc(), next, 1));
                rec.discovered(next);
            }
        }
        self.forward_turn = !self.forward_turn;
        rec.observe_frontier(self.combined_len());
        Step::Continue
    }

    fn frontier_cells(&self) -> Vec<Cell> {
        let mut cells = self.forward.frontier.cells();
        cells.extend(self.backward.frontier.cells());
        cells
    }
}
