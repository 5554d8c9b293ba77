//! Search entry point and the pull-based traversal.

use pathfinder_kernel::grid::{Cell, Grid};
use pathfinder_kernel::proof::canon::CanonError;
use pathfinder_kernel::proof::hash::ContentHash;

use crate::engine::bfs::BfsState;
use crate::engine::bidirectional::BidirectionalState;
use crate::engine::dfs::DfsState;
use crate::engine::dls::DlsState;
use crate::engine::iddfs::IddfsState;
use crate::engine::ucs::UcsState;
use crate::engine::{Recorder, Step, Strategy, TraversalStats};
use crate::error::SearchError;
use crate::event::{
    trace_digest, EndpointProblem, EndpointRole, FailureReason, SearchOutcome, TraceEvent,
};
use crate::policy::{SearchPolicy, DEFAULT_DEPTH_LIMIT, DEFAULT_MAX_DEPTH};

/// The six uninformed strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Dls,
    Iddfs,
    Bidirectional,
}

impl Algorithm {
    /// All strategies in menu order.
    pub const ALL: [Self; 6] = [
        Self::Bfs,
        Self::Dfs,
        Self::Ucs,
        Self::Dls,
        Self::Iddfs,
        Self::Bidirectional,
    ];

    /// Lowercase name, as accepted by [`str::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Ucs => "ucs",
            Self::Dls => "dls",
            Self::Iddfs => "iddfs",
            Self::Bidirectional => "bidirectional",
        }
    }

    /// Human-readable name for reports.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-First Search (BFS)",
            Self::Dfs => "Depth-First Search (DFS)",
            Self::Ucs => "Uniform Cost Search (UCS)",
            Self::Dls => "Depth-Limited Search (DLS)",
            Self::Iddfs => "Iterative Deepening DFS (IDDFS)",
            Self::Bidirectional => "Bidirectional Search",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted)
            .ok_or_else(|| SearchError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Lifecycle of a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// Frontier seeded, nothing expanded yet.
    Ready,
    /// At least one step taken, not finished.
    Running,
    /// A path was found.
    Succeeded,
    /// The frontier emptied (NoPath or DepthExhausted).
    Exhausted,
    /// Invalid endpoints or the step cap.
    Failed,
}

impl TraversalState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Exhausted | Self::Failed)
    }

    fn for_outcome(outcome: &SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(_) => Self::Succeeded,
            SearchOutcome::Failed(reason) if reason.is_exhaustion() => Self::Exhausted,
            SearchOutcome::Failed(_) => Self::Failed,
        }
    }
}

fn check_endpoint(grid: &Grid, role: EndpointRole, cell: Cell) -> Option<FailureReason> {
    let problem = if !grid.in_bounds(cell) {
        EndpointProblem::OutOfBounds
    } else if grid.is_blocked(cell) {
        EndpointProblem::Blocked
    } else {
        return None;
    };
    Some(FailureReason::InvalidStartOrTarget {
        role,
        cell,
        problem,
    })
}

/// Start a traversal of `grid` from `start` to `target`.
///
/// Nothing is expanded until the returned [`Traversal`] is pulled. Invalid
/// endpoints and `start == target` are resolved here: the traversal yields
/// its terminal event straight away and performs no expansions.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` does not carry what `algorithm`
/// needs. No events exist in that case.
pub fn run<'g>(
    algorithm: Algorithm,
    grid: &'g Grid,
    start: Cell,
    target: Cell,
    policy: &SearchPolicy,
) -> Result<Traversal<'g>, SearchError> {
    policy.validate_for(algorithm)?;
    tracing::debug!(
        algorithm = algorithm.as_str(),
        %start,
        %target,
        max_steps = policy.max_steps,
        "starting traversal"
    );

    let mut traversal = Traversal {
        algorithm,
        grid,
        recorder: Recorder::new(policy.max_steps),
        strategy: None,
        state: TraversalState::Ready,
        outcome: None,
    };

    let invalid = check_endpoint(grid, EndpointRole::Start, start)
        .or_else(|| check_endpoint(grid, EndpointRole::Target, target));
    if let Some(reason) = invalid {
        traversal.finish(SearchOutcome::Failed(reason));
        return Ok(traversal);
    }
    if start == target {
        traversal.finish(SearchOutcome::Found(vec![start]));
        return Ok(traversal);
    }

    let rec = &mut traversal.recorder;
    let strategy = match algorithm {
        Algorithm::Bfs => Strategy::Bfs(BfsState::new(start, target, rec)),
        Algorithm::Dfs => Strategy::Dfs(DfsState::new(start, target, rec)),
        Algorithm::Ucs => Strategy::Ucs(UcsState::new(start, target, policy.cost_model, rec)),
        Algorithm::Dls => Strategy::Dls(DlsState::new(
            start,
            target,
            policy.depth_limit.unwrap_or(DEFAULT_DEPTH_LIMIT),
            rec,
        )),
        Algorithm::Iddfs => Strategy::Iddfs(IddfsState::new(
            start,
            target,
            policy.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            rec,
        )),
        Algorithm::Bidirectional => {
            Strategy::Bidirectional(BidirectionalState::new(start, target, rec))
        }
    };
    traversal.strategy = Some(strategy);
    Ok(traversal)
}

/// A resumable traversal yielding [`TraceEvent`]s on demand.
///
/// Each call to `next` returns a queued event or performs one expansion to
/// produce more. The final event is always `PathFound` or `Failed`; after it
/// the iterator returns `None`.
#[derive(Debug)]
pub struct Traversal<'g> {
    algorithm: Algorithm,
    grid: &'g Grid,
    recorder: Recorder,
    /// `None` when the outcome was settled before any step.
    strategy: Option<Strategy>,
    state: TraversalState,
    outcome: Option<SearchOutcome>,
}

impl Traversal<'_> {
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn state(&self) -> TraversalState {
        self.state
    }

    /// The final outcome, once the terminal event has been produced.
    #[must_use]
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> &TraversalStats {
        self.recorder.stats()
    }

    /// Cells currently waiting for expansion, in pop order.
    #[must_use]
    pub fn frontier_cells(&self) -> Vec<Cell> {
        self.strategy
            .as_ref()
            .map(Strategy::frontier_cells)
            .unwrap_or_default()
    }

    /// Drain the remaining events and return the whole run.
    #[must_use]
    pub fn run_to_completion(mut self) -> SearchRun {
        let events: Vec<TraceEvent> = self.by_ref().collect();
        let outcome = match (self.outcome.take(), events.last()) {
            (Some(outcome), _) => outcome,
            (None, Some(TraceEvent::PathFound(path))) => SearchOutcome::Found(path.clone()),
            (None, Some(TraceEvent::Failed(reason))) => SearchOutcome::Failed(reason.clone()),
            (None, _) => SearchOutcome::Failed(FailureReason::NoPath),
        };
        SearchRun {
            algorithm: self.algorithm,
            events,
            outcome,
            stats: self.recorder.stats().clone(),
        }
    }

    fn finish(&mut self, outcome: SearchOutcome) {
        self.recorder.finish(&outcome);
        self.state = TraversalState::for_outcome(&outcome);
        let stats = self.recorder.stats();
        match &outcome {
            SearchOutcome::Found(path) => tracing::info!(
                algorithm = self.algorithm.as_str(),
                path_len = path.len(),
                expansions = stats.expansions,
                "path found"
            ),
            SearchOutcome::Failed(reason @ FailureReason::StepCapExceeded { .. }) => {
                tracing::warn!(
                    algorithm = self.algorithm.as_str(),
                    expansions = stats.expansions,
                    %reason,
                    "traversal stopped at step cap"
                );
            }
            SearchOutcome::Failed(reason) => tracing::info!(
                algorithm = self.algorithm.as_str(),
                expansions = stats.expansions,
                reason = reason.kind(),
                "traversal ended without a path"
            ),
        }
        self.outcome = Some(outcome);
    }
}

impl Iterator for Traversal<'_> {
    type Item = TraceEvent;

    fn next(&mut self) -> Option<TraceEvent> {
        loop {
            if let Some(event) = self.recorder.next_event() {
                return Some(event);
            }
            if self.outcome.is_some() {
                return None;
            }
            let strategy = self.strategy.as_mut()?;
            self.state = TraversalState::Running;
            if let Step::Done(outcome) = strategy.step(self.grid, &mut self.recorder) {
                self.finish(outcome);
            }
        }
    }
}

/// A finished traversal: every event plus the outcome and counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRun {
    pub algorithm: Algorithm,
    pub events: Vec<TraceEvent>,
    pub outcome: SearchOutcome,
    pub stats: TraversalStats,
}

impl SearchRun {
    /// Digest of the event sequence.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn trace_digest(&self) -> Result<ContentHash, CanonError> {
        trace_digest(&self.events)
    }

    /// Cells expanded in first-visit order.
    #[must_use]
    pub fn expansion_order(&self) -> Vec<Cell> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Expanded(cell) => Some(*cell),
                _ => None,
            })
            .collect()
    }
}

/// Run `algorithm` to the end.
///
/// # Errors
///
/// Same as [`run`].
pub fn search(
    algorithm: Algorithm,
    grid: &Grid,
    start: Cell,
    target: Cell,
    policy: &SearchPolicy,
) -> Result<SearchRun, SearchError> {
    Ok(run(algorithm, grid, start, target, policy)?.run_to_completion())
}
