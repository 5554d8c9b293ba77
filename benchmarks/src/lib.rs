//! Shared fixtures for pathfinder benchmark suites.

use pathfinder_harness::config::RunConfig;
use pathfinder_harness::environment::generate_grid;
use pathfinder_kernel::grid::{Cell, Grid};
use pathfinder_search::{search, Algorithm, SearchPolicy, SearchRun};

/// One benchmark scenario: a grid, its endpoints and the policy to run under.
pub struct Regime {
    pub name: &'static str,
    pub grid: Grid,
    pub start: Cell,
    pub target: Cell,
    pub policy: SearchPolicy,
}

/// 30x30 with no obstacles, corner to corner.
#[must_use]
pub fn regime_open_field() -> Regime {
    Regime {
        name: "open_field",
        grid: Grid::open(30, 30),
        start: Cell::new(0, 0),
        target: Cell::new(29, 29),
        policy: SearchPolicy::default(),
    }
}

/// 30x30 generated at the highest allowed obstacle density.
#[must_use]
pub fn regime_dense_obstacles() -> Regime {
    let config = RunConfig {
        rows: 30,
        cols: 30,
        obstacle_probability: 0.3,
        target: Cell::new(29, 29),
        seed: 7,
        ..RunConfig::default()
    };
    Regime {
        name: "dense_obstacles",
        grid: generate_grid(&config),
        start: config.start,
        target: config.target,
        policy: config.policy(),
    }
}

/// 30x30 split by a full-height wall: every strategy must exhaust the
/// start's half before reporting no path.
#[must_use]
pub fn regime_dead_end() -> Regime {
    let wall = (0..30).map(|row| Cell::new(row, 15));
    Regime {
        name: "dead_end",
        grid: Grid::new(30, 30, wall),
        start: Cell::new(0, 0),
        target: Cell::new(29, 29),
        policy: SearchPolicy::default(),
    }
}

/// Every regime, in a fixed order.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![regime_open_field(), regime_dense_obstacles(), regime_dead_end()]
}

/// Run `algorithm` on `regime` to completion.
///
/// # Panics
///
/// Panics if the regime's policy is unusable for `algorithm`. Benchmark
/// setup failures are fatal.
#[must_use]
pub fn run_regime(algorithm: Algorithm, regime: &Regime) -> SearchRun {
    search(algorithm, &regime.grid, regime.start, regime.target, &regime.policy)
        .expect("regime policy should validate")
}
