//! Golden scenarios: fixed grids with exact expected outcomes.

use lock_tests::{assert_valid_path, component};
use pathfinder_kernel::grid::{Cell, Grid};
use pathfinder_search::{
    search, Algorithm, EndpointProblem, EndpointRole, FailureReason, SearchOutcome, SearchPolicy,
    TraceEvent,
};

fn c(row: i32, col: i32) -> Cell {
    Cell::new(row, col)
}

fn diagonal(n: i32) -> Vec<Cell> {
    (0..n).map(|i| c(i, i)).collect()
}

/// 5x5, no obstacles, corner to corner: four Bottom-Right moves.
#[test]
fn open_5x5_bfs_takes_the_diagonal() {
    let grid = Grid::open(5, 5);
    let run = search(Algorithm::Bfs, &grid, c(0, 0), c(4, 4), &SearchPolicy::default()).unwrap();

    assert_eq!(run.outcome, SearchOutcome::Found(diagonal(5)));
    assert!(run.stats.expansions < 25, "expanded {}", run.stats.expansions);
    assert_eq!(run.stats.expansions, 16);
    assert_eq!(
        run.events[..12],
        [
            TraceEvent::Discovered(c(0, 0)),
            TraceEvent::Expanded(c(0, 0)),
            TraceEvent::Discovered(c(0, 1)),
            TraceEvent::Discovered(c(1, 0)),
            TraceEvent::Discovered(c(1, 1)),
            TraceEvent::Expanded(c(0, 1)),
            TraceEvent::Discovered(c(0, 2)),
            TraceEvent::Discovered(c(1, 2)),
            TraceEvent::Expanded(c(1, 0)),
            TraceEvent::Discovered(c(2, 0)),
            TraceEvent::Discovered(c(2, 1)),
            TraceEvent::Expanded(c(1, 1)),
        ]
    );
    assert_eq!(run.events.last(), Some(&TraceEvent::PathFound(diagonal(5))));
}

#[test]
fn open_5x5_every_algorithm() {
    let grid = Grid::open(5, 5);
    let policy = SearchPolicy::default();
    let go = |algorithm| search(algorithm, &grid, c(0, 0), c(4, 4), &policy).unwrap();

    let ucs = go(Algorithm::Ucs);
    assert_eq!(ucs.outcome, SearchOutcome::Found(diagonal(5)));
    assert_eq!(ucs.stats.expansions, 25);

    // Up-first descent hugs the top edge, then the right edge.
    let dfs = go(Algorithm::Dfs);
    let dfs_path = dfs.outcome.path().unwrap();
    assert_eq!(dfs_path.len(), 9);
    assert_eq!(dfs.stats.expansions, 9);
    assert_valid_path(&grid, dfs_path, c(0, 0), c(4, 4));

    let dls = go(Algorithm::Dls);
    assert_eq!(dls.outcome, dfs.outcome);

    let iddfs = go(Algorithm::Iddfs);
    assert_eq!(iddfs.outcome, SearchOutcome::Found(diagonal(5)));
    let per_iteration: Vec<u64> = iddfs.stats.iterations.iter().map(|it| it.expansions).collect();
    assert_eq!(per_iteration, vec![1, 4, 10, 21, 39]);
    assert_eq!(iddfs.stats.expansions, 75);

    let bidi = go(Algorithm::Bidirectional);
    assert_eq!(
        bidi.outcome,
        SearchOutcome::Found(vec![c(0, 0), c(0, 1), c(1, 2), c(2, 3), c(3, 4), c(4, 4)])
    );
    assert_eq!(bidi.stats.meeting_cell, Some(c(2, 3)));
    assert_eq!(bidi.stats.expansions, 12);
}

#[test]
fn obstacle_on_start_is_invalid_not_no_path() {
    let grid = Grid::from_ascii(&["#....", ".....", ".....", ".....", "....."]).unwrap();
    for algorithm in Algorithm::ALL {
        let run = search(algorithm, &grid, c(0, 0), c(4, 4), &SearchPolicy::default()).unwrap();
        assert_eq!(
            run.outcome,
            SearchOutcome::Failed(FailureReason::InvalidStartOrTarget {
                role: EndpointRole::Start,
                cell: c(0, 0),
                problem: EndpointProblem::Blocked,
            }),
            "{algorithm}"
        );
        assert_eq!(run.stats.expansions, 0);
    }
}

#[test]
fn dls_limit_two_on_depth_three_is_depth_exhausted() {
    let grid = Grid::open(5, 5);
    let shallow = SearchPolicy {
        depth_limit: Some(2),
        ..SearchPolicy::default()
    };
    let run = search(Algorithm::Dls, &grid, c(0, 0), c(3, 3), &shallow).unwrap();
    assert_eq!(
        run.outcome,
        SearchOutcome::Failed(FailureReason::DepthExhausted { limit: 2 })
    );
    assert_eq!(run.stats.expansions, 10);

    let enough = SearchPolicy {
        depth_limit: Some(3),
        ..SearchPolicy::default()
    };
    let run = search(Algorithm::Dls, &grid, c(0, 0), c(3, 3), &enough).unwrap();
    assert_eq!(run.outcome, SearchOutcome::Found(diagonal(4)));
}

#[test]
fn wall_splits_grid_into_no_path() {
    let grid = Grid::from_ascii(&["..#..", "..#..", "..#..", "..#..", "..#.."]).unwrap();
    let left = component(&grid, c(0, 0));
    assert_eq!(left.len(), 10);

    for algorithm in Algorithm::ALL {
        let run = search(algorithm, &grid, c(0, 0), c(0, 4), &SearchPolicy::default()).unwrap();
        assert_eq!(
            run.outcome,
            SearchOutcome::Failed(FailureReason::NoPath),
            "{algorithm}"
        );
    }
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ucs] {
        let run = search(algorithm, &grid, c(0, 0), c(0, 4), &SearchPolicy::default()).unwrap();
        assert_eq!(run.stats.explored(), left, "{algorithm}");
    }
}

#[test]
fn start_equals_target_for_every_algorithm() {
    let grid = Grid::open(5, 5);
    for algorithm in Algorithm::ALL {
        let run = search(algorithm, &grid, c(2, 3), c(2, 3), &SearchPolicy::default()).unwrap();
        assert_eq!(run.outcome, SearchOutcome::Found(vec![c(2, 3)]));
        assert_eq!(run.stats.expansions, 0);
    }
}

#[test]
fn out_of_bounds_target_is_invalid() {
    let grid = Grid::open(5, 5);
    let run = search(Algorithm::Bfs, &grid, c(0, 0), c(5, 5), &SearchPolicy::default()).unwrap();
    assert_eq!(
        run.outcome,
        SearchOutcome::Failed(FailureReason::InvalidStartOrTarget {
            role: EndpointRole::Target,
            cell: c(5, 5),
            problem: EndpointProblem::OutOfBounds,
        })
    );
}
