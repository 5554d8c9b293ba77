//! Harness runner: builds the grid, drives traversals, packages reports.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig::validate() → generate_grid() → run() → run_to_completion()
//!   → trace_digest() → RunReport
//! ```
//!
//! Each algorithm gets its own `Traversal`; nothing mutable is shared
//! between runs in [`compare_all`].

use pathfinder_kernel::grid::{Cell, Grid};
use pathfinder_kernel::proof::canon::CanonError;
use pathfinder_kernel::proof::hash::grid_fingerprint;
use pathfinder_search::{run, Algorithm, SearchError, SearchPolicy};

use crate::config::{ConfigError, RunConfig};
use crate::environment::generate_grid;
use crate::report::RunReport;

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("canonicalization failed: {0}")]
    Canon(#[from] CanonError),
}

/// Run `algorithm` on an explicit grid.
///
/// # Errors
///
/// [`RunError::Search`] for an unusable policy, [`RunError::Canon`] if the
/// trace cannot be hashed.
pub fn run_on_grid(
    algorithm: Algorithm,
    grid: &Grid,
    start: Cell,
    target: Cell,
    policy: &SearchPolicy,
) -> Result<RunReport, RunError> {
    let finished = run(algorithm, grid, start, target, policy)?.run_to_completion();
    let trace_digest = finished.trace_digest()?;
    let path_len = finished.outcome.path().map_or(0, <[Cell]>::len);
    let path_cost = finished.outcome.path().map(|p| policy.cost_model.path_cost(p));
    Ok(RunReport {
        algorithm,
        outcome: finished.outcome,
        path_len,
        path_cost,
        stats: finished.stats,
        policy: policy.clone(),
        grid_fingerprint: grid_fingerprint(grid)?,
        trace_digest,
        events: finished.events,
    })
}

/// Validate `config`, generate its grid and run `algorithm` on it.
///
/// # Errors
///
/// [`RunError::Config`] if validation fails, otherwise as [`run_on_grid`].
pub fn run_algorithm(algorithm: Algorithm, config: &RunConfig) -> Result<RunReport, RunError> {
    config.validate()?;
    let grid = generate_grid(config);
    run_on_grid(algorithm, &grid, config.start, config.target, &config.policy())
}

/// Run all six algorithms on the same generated grid, in menu order.
///
/// # Errors
///
/// Same as [`run_algorithm`]; the first failure stops the comparison.
pub fn compare_all(config: &RunConfig) -> Result<Vec<RunReport>, RunError> {
    config.validate()?;
    let grid = generate_grid(config);
    let policy = config.policy();
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| run_on_grid(algorithm, &grid, config.start, config.target, &policy))
        .collect()
}
