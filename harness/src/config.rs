//! Run configuration: compiled defaults overlaid with an optional TOML file.
//!
//! Every field in the file is optional; missing fields keep their defaults,
//! except that an unset target follows the configured grid to its
//! bottom-right cell and an unset step cap is sized from the grid. Unknown keys are ignored. The merged result is range-checked by
//! [`RunConfig::validate`] before use.

use std::path::Path;

use serde::Deserialize;

use pathfinder_kernel::grid::Cell;
use pathfinder_search::policy::{
    iddfs_expansion_bound, CostModel, SearchPolicy, DEFAULT_DEPTH_LIMIT, DEFAULT_MAX_DEPTH,
};
use pathfinder_search::SearchError;

/// Accepted grid side lengths.
pub const SIDE_RANGE: std::ops::RangeInclusive<u32> = 10..=30;

/// Largest accepted obstacle probability.
pub const MAX_OBSTACLE_PROBABILITY: f64 = 0.3;

/// Typed configuration failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("invalid TOML in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("{field} {message}")]
    OutOfRange { field: &'static str, message: String },

    #[error("{field} {cell} is outside the {rows}x{cols} grid")]
    EndpointOutOfBounds {
        field: &'static str,
        cell: Cell,
        rows: u32,
        cols: u32,
    },

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Fully-resolved settings for one run (or one comparison of all six).
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub rows: u32,
    pub cols: u32,
    pub obstacle_probability: f64,
    pub start: Cell,
    pub target: Cell,
    pub depth_limit: u32,
    pub max_depth: u32,
    pub seed: u64,
    /// Expansion cap. `None` sizes it from the grid and `max_depth` so that
    /// IDDFS can always run to its last iteration.
    pub max_steps: Option<u64>,
    pub cost_model: CostModel,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 15,
            obstacle_probability: 0.15,
            start: Cell::new(0, 0),
            target: Cell::new(14, 14),
            depth_limit: DEFAULT_DEPTH_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: 1,
            max_steps: None,
            cost_model: CostModel::Unit,
        }
    }
}

/// On-disk shape: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RunConfigFile {
    rows: Option<u32>,
    cols: Option<u32>,
    obstacle_probability: Option<f64>,
    start: Option<[i32; 2]>,
    target: Option<[i32; 2]>,
    depth_limit: Option<u32>,
    max_depth: Option<u32>,
    seed: Option<u64>,
    max_steps: Option<u64>,
    cost_model: Option<String>,
}

impl RunConfig {
    /// Defaults overlaid with the TOML file at `path`, then validated.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] if the file cannot be read,
    /// [`ConfigError::Parse`] for malformed TOML, and any error from
    /// [`RunConfig::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Defaults overlaid with `toml_str`, then validated.
    ///
    /// # Errors
    ///
    /// Same as [`RunConfig::load`], minus the read failure.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: RunConfigFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        let mut config = Self::default();
        config.merge(file)?;
        config.validate()?;
        Ok(config)
    }

    fn merge(&mut self, file: RunConfigFile) -> Result<(), ConfigError> {
        if let Some(rows) = file.rows {
            self.rows = rows;
        }
        if let Some(cols) = file.cols {
            self.cols = cols;
        }
        if let Some(p) = file.obstacle_probability {
            self.obstacle_probability = p;
        }
        if let Some([row, col]) = file.start {
            self.start = Cell::new(row, col);
        }
        self.target = match file.target {
            Some([row, col]) => Cell::new(row, col),
            None => self.bottom_right(),
        };
        if let Some(limit) = file.depth_limit {
            self.depth_limit = limit;
        }
        if let Some(depth) = file.max_depth {
            self.max_depth = depth;
        }
        if let Some(seed) = file.seed {
            self.seed = seed;
        }
        if let Some(cap) = file.max_steps {
            self.max_steps = Some(cap);
        }
        if let Some(name) = file.cost_model {
            self.cost_model = name.parse()?;
        }
        Ok(())
    }

    /// Range checks.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfRange`] for grid sides outside [`SIDE_RANGE`], a
    /// probability outside `[0, 0.3]`, or a zero step cap;
    /// [`ConfigError::EndpointOutOfBounds`] for a start or target off the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("rows", self.rows), ("cols", self.cols)] {
            if !SIDE_RANGE.contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field,
                    message: format!(
                        "must be between {} and {}, got {value}",
                        SIDE_RANGE.start(),
                        SIDE_RANGE.end()
                    ),
                });
            }
        }
        if !(0.0..=MAX_OBSTACLE_PROBABILITY).contains(&self.obstacle_probability) {
            return Err(ConfigError::OutOfRange {
                field: "obstacle_probability",
                message: format!(
                    "must be between 0 and {MAX_OBSTACLE_PROBABILITY}, got {}",
                    self.obstacle_probability
                ),
            });
        }
        if self.max_steps == Some(0) {
            return Err(ConfigError::OutOfRange {
                field: "max_steps",
                message: "must be at least 1".to_string(),
            });
        }
        for (field, cell) in [("start", self.start), ("target", self.target)] {
            let inside = u32::try_from(cell.row).is_ok_and(|r| r < self.rows)
                && u32::try_from(cell.col).is_ok_and(|c| c < self.cols);
            if !inside {
                return Err(ConfigError::EndpointOutOfBounds {
                    field,
                    cell,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        Ok(())
    }

    /// Last row, last column: the target when the file names none.
    #[must_use]
    pub fn bottom_right(&self) -> Cell {
        let last = |side: u32| i32::try_from(side.saturating_sub(1)).unwrap_or(i32::MAX);
        Cell::new(last(self.rows), last(self.cols))
    }

    /// The search policy these settings describe.
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_steps: self.max_steps.unwrap_or_else(|| {
                iddfs_expansion_bound(u64::from(self.rows) * u64::from(self.cols), self.max_depth)
            }),
            depth_limit: Some(self.depth_limit),
            max_depth: Some(self.max_depth),
            cost_model: self.cost_model,
        }
    }
}
