//! Per-algorithm traversal state machines.
//!
//! Each strategy owns its frontier, explored bookkeeping and parent links,
//! and advances by exactly one expansion per [`TraversalStep::step`] call.
//! Events and counters go through a shared [`Recorder`], which also enforces
//! the expansion cap. [`Strategy`] closes over the six variants and
//! dispatches by `match`.

pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dls;
pub mod iddfs;
pub mod ucs;

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use pathfinder_kernel::grid::{Cell, Grid};

use crate::event::{FailureReason, SearchOutcome, TraceEvent};

/// Outcome of one IDDFS iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationRecord {
    pub depth_limit: u32,
    /// Expansions performed during this iteration alone.
    pub expansions: u64,
    /// `None` if the iteration reached the target.
    pub failure: Option<FailureReason>,
}

/// Counters and observations collected while a traversal runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Total expansions, across IDDFS iterations.
    pub expansions: u64,
    /// Total frontier pushes.
    pub discoveries: u64,
    /// Largest frontier size seen (both frontiers combined for
    /// bidirectional search).
    pub frontier_high_water: usize,
    /// First-expansion ordinal per cell, starting at 1.
    pub visit_order: BTreeMap<Cell, u64>,
    /// One record per IDDFS iteration, in order.
    pub iterations: Vec<IterationRecord>,
    /// Where the bidirectional halves met.
    pub meeting_cell: Option<Cell>,
}

impl TraversalStats {
    /// Every cell expanded at least once.
    #[must_use]
    pub fn explored(&self) -> BTreeSet<Cell> {
        self.visit_order.keys().copied().collect()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "discoveries": self.discoveries,
            "expansions": self.expansions,
            "explored_cells": self.visit_order.len(),
            "frontier_high_water": self.frontier_high_water,
            "iterations": self.iterations.iter().map(|it| serde_json::json!({
                "depth_limit": it.depth_limit,
                "expansions": it.expansions,
                "failure": it.failure.as_ref().map(FailureReason::to_json_value),
            })).collect::<Vec<_>>(),
            "meeting_cell": self.meeting_cell.map(Cell::to_json_value),
        })
    }
}

/// Pending-event queue plus counters, shared by all strategies.
#[derive(Debug)]
pub struct Recorder {
    pending: VecDeque<TraceEvent>,
    stats: TraversalStats,
    max_steps: u64,
}

impl Recorder {
    #[must_use]
    pub fn new(max_steps: u64) -> Self {
        Self {
            pending: VecDeque::new(),
            stats: TraversalStats::default(),
            max_steps,
        }
    }

    /// Record a frontier push.
    pub fn discovered(&mut self, cell: Cell) {
        self.stats.discoveries += 1;
        self.pending.push_back(TraceEvent::Discovered(cell));
    }

    /// Claim one expansion of `cell`.
    ///
    /// Returns `false` without emitting anything once the cap is reached; the
    /// caller must then finish with [`FailureReason::StepCapExceeded`].
    pub fn expand(&mut self, cell: Cell) -> bool {
        if self.stats.expansions >= self.max_steps {
            return false;
        }
        self.stats.expansions += 1;
        let ordinal = self.stats.visit_order.len() as u64 + 1;
        self.stats.visit_order.entry(cell).or_insert(ordinal);
        self.pending.push_back(TraceEvent::Expanded(cell));
        true
    }

    pub fn depth_limit_started(&mut self, limit: u32) {
        self.pending.push_back(TraceEvent::DepthLimitStarted(limit));
    }

    /// Fold a frontier size into the high-water mark.
    pub fn observe_frontier(&mut self, len: usize) {
        self.stats.frontier_high_water = self.stats.frontier_high_water.max(len);
    }

    pub fn record_iteration(&mut self, record: IterationRecord) {
        self.stats.iterations.push(record);
    }

    pub fn record_meeting(&mut self, cell: Cell) {
        self.stats.meeting_cell = Some(cell);
    }

    /// The failure to report when [`Recorder::expand`] refuses.
    #[must_use]
    pub fn step_cap_failure(&self) -> SearchOutcome {
        SearchOutcome::Failed(FailureReason::StepCapExceeded { cap: self.max_steps })
    }

    /// Queue the terminal event for `outcome`.
    pub fn finish(&mut self, outcome: &SearchOutcome) {
        self.pending.push_back(outcome.to_event());
    }

    pub fn next_event(&mut self) -> Option<TraceEvent> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }

    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.stats.expansions
    }
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// More work remains.
    Continue,
    /// The traversal reached a terminal outcome.
    Done(SearchOutcome),
}

impl Step {
    /// Finish with a reconstructed path. A missing chain means the target
    /// was never linked, which is reported as NoPath.
    #[must_use]
    pub fn from_path(path: Option<Vec<Cell>>) -> Self {
        Self::Done(path.map_or(SearchOutcome::Failed(FailureReason::NoPath), SearchOutcome::Found))
    }
}

/// Monotonic node id source; ids double as the push-order tie-break.
#[derive(Debug, Default)]
pub struct NodeIds {
    next: u64,
}

impl NodeIds {
    pub fn alloc(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// The interface every strategy implements.
pub trait TraversalStep {
    /// Perform at most one expansion, pushing events into `rec`.
    fn step(&mut self, grid: &Grid, rec: &mut Recorder) -> Step;

    /// Cells waiting in the frontier (both frontiers for bidirectional).
    fn frontier_cells(&self) -> Vec<Cell>;
}

/// Closed set of strategies.
#[derive(Debug)]
pub enum Strategy {
    Bfs(bfs::BfsState),
    Dfs(dfs::DfsState),
    Ucs(ucs::UcsState),
    Dls(dls::DlsState),
    Iddfs(iddfs::IddfsState),
    Bidirectional(bidirectional::BidirectionalState),
}

impl Strategy {
    pub fn step(&mut self, grid: &Grid, rec: &mut Recorder) -> Step {
        match self {
            Self::Bfs(s) => s.step(grid, rec),
            Self::Dfs(s) => s.step(grid, rec),
            Self::Ucs(s) => s.step(grid, rec),
            Self::Dls(s) => s.step(grid, rec),
            Self::Iddfs(s) => s.step(grid, rec),
            Self::Bidirectional(s) => s.step(grid, rec),
        }
    }

    #[must_use]
    pub fn frontier_cells(&self) -> Vec<Cell> {
        match self {
            Self::Bfs(s) => s.frontier_cells(),
            Self::Dfs(s) => s.frontier_cells(),
            Self::Ucs(s) => s.frontier_cells(),
            Self::Dls(s) => s.frontier_cells(),
            Self::Iddfs(s) => s.frontier_cells(),
            Self::Bidirectional(s) => s.frontier_cells(),
        }
    }
}
