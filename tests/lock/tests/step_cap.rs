//! Default step caps leave room for IDDFS on every valid grid size.

use pathfinder_harness::config::RunConfig;
use pathfinder_harness::runner::run_algorithm;
use pathfinder_kernel::grid::{Cell, Grid};
use pathfinder_search::policy::DEFAULT_MAX_STEPS;
use pathfinder_search::{search, Algorithm, FailureReason, SearchOutcome, SearchPolicy};

#[test]
fn iddfs_crosses_open_30x30_under_default_policy() {
    let grid = Grid::open(30, 30);
    let run = search(
        Algorithm::Iddfs,
        &grid,
        Cell::new(0, 0),
        Cell::new(29, 29),
        &SearchPolicy::default(),
    )
    .unwrap();
    let path = run.outcome.path().expect("iddfs should reach the corner");
    assert_eq!(path.len(), 30);
    assert_eq!(run.stats.iterations.len(), 30);
    assert!(run.stats.expansions < DEFAULT_MAX_STEPS);
}

#[test]
fn iddfs_crosses_open_30x30_under_default_config() {
    let config = RunConfig {
        rows: 30,
        cols: 30,
        obstacle_probability: 0.0,
        target: Cell::new(29, 29),
        ..RunConfig::default()
    };
    let report = run_algorithm(Algorithm::Iddfs, &config).unwrap();
    assert!(report.outcome.is_found(), "got {:?}", report.outcome.failure());
    assert_eq!(report.path_len, 30);
}

#[test]
fn dense_30x30_iddfs_is_never_capped() {
    for seed in 0..5 {
        let config = RunConfig {
            rows: 30,
            cols: 30,
            obstacle_probability: 0.3,
            target: Cell::new(29, 29),
            seed,
            ..RunConfig::default()
        };
        let bfs = run_algorithm(Algorithm::Bfs, &config).unwrap();
        let iddfs = run_algorithm(Algorithm::Iddfs, &config).unwrap();
        let reachable_within_max_depth = bfs
            .outcome
            .path()
            .is_some_and(|p| p.len() <= config.max_depth as usize + 1);
        if reachable_within_max_depth {
            assert_eq!(iddfs.path_len, bfs.path_len, "seed {seed}");
        } else {
            assert!(
                matches!(
                    iddfs.outcome,
                    SearchOutcome::Failed(
                        FailureReason::NoPath | FailureReason::DepthExhausted { .. }
                    )
                ),
                "seed {seed}: {:?}",
                iddfs.outcome
            );
        }
    }
}
