//! Seeded grid generation.

use pathfinder_kernel::grid::{Cell, Grid};

use crate::config::RunConfig;

/// xorshift64. Deterministic across platforms; zero seeds are bumped to 1.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in `[0, 1)` from the top 53 bits.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Grid described by `config`.
///
/// Cells are visited in row-major order and each becomes an obstacle with
/// probability `obstacle_probability`. Start and target are cleared
/// afterwards, so they are always passable.
#[must_use]
pub fn generate_grid(config: &RunConfig) -> Grid {
    let mut rng = SimpleRng::new(config.seed);
    let open = Grid::open(config.rows, config.cols);
    let obstacles: Vec<Cell> = open
        .cells()
        .filter(|_| rng.next_unit() < config.obstacle_probability)
        .filter(|&c| c != config.start && c != config.target)
        .collect();
    let grid = Grid::new(config.rows, config.cols, obstacles);
    tracing::debug!(
        rows = config.rows,
        cols = config.cols,
        seed = config.seed,
        obstacles = grid.obstacles().len(),
        passable = grid.passable_count(),
        "generated grid"
    );
    grid
}
