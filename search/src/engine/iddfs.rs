//! Iterative deepening: depth-limited search with limits `0..=max_depth`.
//!
//! Each iteration starts from a fresh [`DlsState`] and is announced with a
//! `DepthLimitStarted` event. An iteration that finds the target ends the run.
//! An iteration that exhausts the start's component without pruning ends it
//! with `NoPath`, since deeper limits cannot change the answer.

use pathfinder_kernel::grid::{Cell, Grid};

use super::dls::DlsState;
use super::{IterationRecord, Recorder, Step, TraversalStep};
use crate::event::{FailureReason, SearchOutcome};

#[derive(Debug)]
pub struct IddfsState {
    current: DlsState,
    start: Cell,
    target: Cell,
    max_depth: u32,
    /// Total expansions when the current iteration began.
    iteration_base: u64,
}

impl IddfsState {
    pub fn new(start: Cell, target: Cell, max_depth: u32, rec: &mut Recorder) -> Self {
        rec.depth_limit_started(0);
        let current = DlsState::new(start, target, 0, rec);
        Self {
            current,
            start,
            target,
            max_depth,
            iteration_base: rec.expansions(),
        }
    }

    fn close_iteration(&self, rec: &mut Recorder, failure: Option<FailureReason>) {
        let expansions = rec.expansions() - self.iteration_base;
        tracing::debug!(
            depth_limit = self.current.limit(),
            expansions,
            outcome = failure.as_ref().map_or("found", FailureReason::kind),
            "iddfs iteration finished"
        );
        rec.record_iteration(IterationRecord {
            depth_limit: self.current.limit(),
            expansions,
            failure,
        });
    }
}

impl TraversalStep for IddfsState {
    fn step(&mut self, grid: &Grid, rec: &mut Recorder) -> Step {
        let outcome = match self.current.step(grid, rec) {
            Step::Continue => return Step::Continue,
            Step::Done(outcome) => outcome,
        };
        match outcome {
            SearchOutcome::Failed(FailureReason::DepthExhausted { limit }) if limit < self.max_depth => {
                self.close_iteration(rec, Some(FailureReason::DepthExhausted { limit }));
                let next = limit + 1;
                rec.depth_limit_started(next);
                self.current = DlsState::new(self.start, self.target, next, rec);
                self.iteration_base = rec.expansions();
                Step::Continue
            }
            outcome => {
                self.close_iteration(rec, outcome.failure().cloned());
                Step::Done(outcome)
            }
        }
    }

    fn frontier_cells(&self) -> Vec<Cell> {
        self.current.frontier_cells()
    }
}
