//! Shared fixtures for the lock tests: reference grids, an independent
//! distance oracle, and path checks.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use pathfinder_kernel::grid::{is_adjacent, Cell, Grid};
use pathfinder_search::{SearchPolicy, SearchRun};

/// Offsets listed independently of the kernel's table, so the oracle does
/// not share code with the engine.
const MOVES: [(i32, i32); 6] = [(-1, 0), (0, 1), (1, 0), (1, 1), (0, -1), (-1, -1)];

fn oracle_neighbors(grid: &Grid, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    MOVES
        .iter()
        .filter_map(move |&(dr, dc)| cell.offset(dr, dc))
        .filter(move |&c| grid.is_passable(c))
}

/// Shortest move count from `start` to every reachable cell.
#[must_use]
pub fn oracle_distances(grid: &Grid, start: Cell) -> BTreeMap<Cell, usize> {
    let mut dist = BTreeMap::new();
    if !grid.is_passable(start) {
        return dist;
    }
    dist.insert(start, 0);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        for next in oracle_neighbors(grid, cell) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Shortest move count from `start` to `target`, if reachable.
#[must_use]
pub fn oracle_distance(grid: &Grid, start: Cell, target: Cell) -> Option<usize> {
    oracle_distances(grid, start).get(&target).copied()
}

/// Cells reachable from `start`, including `start`.
#[must_use]
pub fn component(grid: &Grid, start: Cell) -> BTreeSet<Cell> {
    oracle_distances(grid, start).into_keys().collect()
}

/// Panic unless `path` runs from `start` to `target` through passable cells
/// with legal moves and no repeats.
///
/// # Panics
///
/// On any violation.
pub fn assert_valid_path(grid: &Grid, path: &[Cell], start: Cell, target: Cell) {
    assert_eq!(path.first(), Some(&start), "path must begin at start");
    assert_eq!(path.last(), Some(&target), "path must end at target");
    for cell in path {
        assert!(grid.is_passable(*cell), "path crosses {cell}");
    }
    for pair in path.windows(2) {
        assert!(
            is_adjacent(pair[0], pair[1]),
            "illegal move {} -> {}",
            pair[0],
            pair[1]
        );
    }
    let unique: BTreeSet<Cell> = path.iter().copied().collect();
    assert_eq!(unique.len(), path.len(), "path repeats a cell");
}

/// A policy generous enough that small-grid runs never hit the cap.
#[must_use]
pub fn roomy_policy(grid: &Grid) -> SearchPolicy {
    let cells = grid.rows() * grid.cols();
    SearchPolicy {
        max_steps: 1_000_000,
        depth_limit: Some(cells),
        max_depth: Some(cells),
        ..SearchPolicy::default()
    }
}

/// Stable text rendering of a run for cross-process comparison.
///
/// # Panics
///
/// If the trace cannot be canonicalized (events hold integers only).
#[must_use]
pub fn fixture_lines(run: &SearchRun) -> Vec<String> {
    let digest = run.trace_digest().unwrap();
    let outcome = match run.outcome.failure() {
        None => "found".to_string(),
        Some(reason) => reason.kind().to_string(),
    };
    vec![
        format!("algorithm={}", run.algorithm),
        format!("trace_digest={digest}"),
        format!("event_count={}", run.events.len()),
        format!("expansions={}", run.stats.expansions),
        format!("outcome={outcome}"),
        format!(
            "path_len={}",
            run.outcome.path().map_or(0, <[Cell]>::len)
        ),
    ]
}
