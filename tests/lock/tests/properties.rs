//! Property tests over small random grids, checked against an independent
//! breadth-first distance oracle.

use std::collections::BTreeSet;

use lock_tests::{assert_valid_path, component, oracle_distance, roomy_policy};
use pathfinder_kernel::grid::{Cell, Grid};
use pathfinder_search::{
    search, Algorithm, CostModel, FailureReason, SearchOutcome, SearchPolicy, TraceEvent,
};
use proptest::prelude::*;

/// A grid up to 7x7 with roughly a quarter of its cells blocked, plus two
/// passable endpoints.
fn scenario() -> impl Strategy<Value = (Grid, Cell, Cell)> {
    (2u32..8, 2u32..8).prop_flat_map(|(rows, cols)| {
        let cells = (rows * cols) as usize;
        (
            proptest::collection::vec(proptest::bool::weighted(0.25), cells),
            0..rows,
            0..cols,
            0..rows,
            0..cols,
        )
            .prop_map(move |(blocked, sr, sc, tr, tc)| {
                let start = Cell::new(sr as i32, sc as i32);
                let target = Cell::new(tr as i32, tc as i32);
                let obstacles = (0..rows)
                    .flat_map(|r| (0..cols).map(move |c| Cell::new(r as i32, c as i32)))
                    .zip(blocked)
                    .filter(|&(cell, b)| b && cell != start && cell != target)
                    .map(|(cell, _)| cell);
                (Grid::new(rows, cols, obstacles), start, target)
            })
    })
}

fn expanded_cells(events: &[TraceEvent]) -> Vec<Cell> {
    events
        .iter()
        .filter_map(|e| match e {
            TraceEvent::Expanded(cell) => Some(*cell),
            _ => None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn found_exactly_when_reachable((grid, start, target) in scenario()) {
        let policy = roomy_policy(&grid);
        let reachable = oracle_distance(&grid, start, target).is_some();
        for algorithm in Algorithm::ALL {
            let run = search(algorithm, &grid, start, target, &policy).unwrap();
            match &run.outcome {
                SearchOutcome::Found(path) => {
                    prop_assert!(reachable, "{} found an unreachable target", algorithm);
                    assert_valid_path(&grid, path, start, target);
                }
                SearchOutcome::Failed(reason) => {
                    prop_assert!(!reachable, "{} missed a reachable target", algorithm);
                    prop_assert_eq!(reason, &FailureReason::NoPath);
                }
            }
        }
    }

    #[test]
    fn bfs_and_unit_ucs_are_shortest((grid, start, target) in scenario()) {
        let Some(distance) = oracle_distance(&grid, start, target) else {
            return Ok(());
        };
        let policy = roomy_policy(&grid);
        for algorithm in [Algorithm::Bfs, Algorithm::Ucs] {
            let run = search(algorithm, &grid, start, target, &policy).unwrap();
            prop_assert_eq!(run.outcome.path().map(<[Cell]>::len), Some(distance + 1));
        }
    }

    #[test]
    fn octile_ucs_is_no_costlier_than_bfs((grid, start, target) in scenario()) {
        let policy = SearchPolicy {
            cost_model: CostModel::Octile,
            ..roomy_policy(&grid)
        };
        let ucs = search(Algorithm::Ucs, &grid, start, target, &policy).unwrap();
        let bfs = search(Algorithm::Bfs, &grid, start, target, &policy).unwrap();
        if let (Some(cheap), Some(short)) = (ucs.outcome.path(), bfs.outcome.path()) {
            prop_assert!(CostModel::Octile.path_cost(cheap) <= CostModel::Octile.path_cost(short));
        }
    }

    #[test]
    fn unreachable_search_explores_the_whole_component((grid, start, target) in scenario()) {
        prop_assume!(oracle_distance(&grid, start, target).is_none());
        let reachable = component(&grid, start);
        let policy = roomy_policy(&grid);
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ucs] {
            let run = search(algorithm, &grid, start, target, &policy).unwrap();
            prop_assert_eq!(&run.stats.explored(), &reachable, "{}", algorithm);
        }
    }

    #[test]
    fn single_pass_strategies_expand_each_cell_once((grid, start, target) in scenario()) {
        let policy = roomy_policy(&grid);
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ucs] {
            let run = search(algorithm, &grid, start, target, &policy).unwrap();
            let order = expanded_cells(&run.events);
            let unique: BTreeSet<Cell> = order.iter().copied().collect();
            prop_assert_eq!(unique.len(), order.len(), "{}", algorithm);
            prop_assert_eq!(run.stats.expansions, order.len() as u64);
        }
    }

    #[test]
    fn iddfs_stops_at_the_target_depth((grid, start, target) in scenario()) {
        prop_assume!(start != target);
        let Some(distance) = oracle_distance(&grid, start, target) else {
            return Ok(());
        };
        let run = search(Algorithm::Iddfs, &grid, start, target, &roomy_policy(&grid)).unwrap();
        let iterations = &run.stats.iterations;
        prop_assert_eq!(iterations.len(), distance + 1);
        let (last, earlier) = iterations.split_last().unwrap();
        for (limit, record) in earlier.iter().enumerate() {
            prop_assert_eq!(record.depth_limit as usize, limit);
            prop_assert_eq!(
                &record.failure,
                &Some(FailureReason::DepthExhausted { limit: record.depth_limit })
            );
        }
        prop_assert_eq!(last.depth_limit as usize, distance);
        prop_assert_eq!(&last.failure, &None);
        prop_assert_eq!(run.outcome.path().map(<[Cell]>::len), Some(distance + 1));
        let per_iteration: u64 = iterations.iter().map(|it| it.expansions).sum();
        prop_assert_eq!(per_iteration, run.stats.expansions);
    }

    #[test]
    fn bidirectional_path_passes_the_meeting_cell((grid, start, target) in scenario()) {
        prop_assume!(start != target);
        let run = search(Algorithm::Bidirectional, &grid, start, target, &roomy_policy(&grid))
            .unwrap();
        if let Some(path) = run.outcome.path() {
            let meeting = run.stats.meeting_cell.unwrap();
            let at = path.iter().position(|&c| c == meeting);
            prop_assert!(at.is_some(), "meeting cell {} not on path", meeting);
            let at = at.unwrap();
            assert_valid_path(&grid, &path[..=at], start, meeting);
            assert_valid_path(&grid, &path[at..], meeting, target);
        } else {
            prop_assert_eq!(run.stats.meeting_cell, None);
        }
    }

    #[test]
    fn dls_never_exceeds_its_limit((grid, start, target) in scenario(), limit in 0u32..6) {
        let policy = SearchPolicy {
            depth_limit: Some(limit),
            ..roomy_policy(&grid)
        };
        let run = search(Algorithm::Dls, &grid, start, target, &policy).unwrap();
        let distance = oracle_distance(&grid, start, target);
        match &run.outcome {
            SearchOutcome::Found(path) => {
                prop_assert!(path.len() <= limit as usize + 1);
                assert_valid_path(&grid, path, start, target);
            }
            SearchOutcome::Failed(FailureReason::DepthExhausted { limit: reported }) => {
                prop_assert_eq!(*reported, limit);
                prop_assert!(distance.map_or(true, |d| d > limit as usize));
            }
            SearchOutcome::Failed(FailureReason::NoPath) => {
                prop_assert!(distance.is_none());
            }
            SearchOutcome::Failed(other) => {
                prop_assert!(false, "unexpected failure {:?}", other);
            }
        }
    }
}
