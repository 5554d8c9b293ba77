//! Search policy: step cap, depth bounds and the UCS cost model.

use pathfinder_kernel::grid::adjacency::direction_between;
use pathfinder_kernel::grid::Cell;
use pathfinder_kernel::proof::canon::CanonError;
use pathfinder_kernel::proof::hash::{canonical_json_hash, ContentHash};
use pathfinder_kernel::proof::hash_domain::HashDomain;

use crate::error::SearchError;
use crate::search::Algorithm;

/// Default DLS depth limit.
pub const DEFAULT_DEPTH_LIMIT: u32 = 20;

/// Default IDDFS maximum depth.
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Default expansion cap: enough for IDDFS to finish on a full 30x30 grid
/// at [`DEFAULT_MAX_DEPTH`].
pub const DEFAULT_MAX_STEPS: u64 = iddfs_expansion_bound(30 * 30, DEFAULT_MAX_DEPTH);

/// Most expansions IDDFS can perform over `cells` cells with limits
/// `0..=max_depth`.
///
/// An iteration at limit `L` expands a cell at most `L + 1` times (only at
/// strictly decreasing depths), so the total is
/// `cells * (max_depth + 1) * (max_depth + 2) / 2`. Every other strategy
/// expands each cell at most once, well under this bound.
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn iddfs_expansion_bound(cells: u64, max_depth: u32) -> u64 {
    let iterations = max_depth as u64 + 1;
    cells.saturating_mul(iterations.saturating_mul(iterations + 1) / 2)
}

/// Edge cost used by uniform-cost search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostModel {
    /// Every move costs 1.
    #[default]
    Unit,
    /// Straight moves cost 10, diagonal moves cost 14 (octile distance
    /// scaled to integers).
    Octile,
}

impl CostModel {
    /// Cost of moving from `from` to the adjacent cell `to`.
    ///
    /// Non-adjacent pairs never occur during a traversal; they are priced as
    /// straight moves.
    #[must_use]
    pub fn step_cost(self, from: Cell, to: Cell) -> u64 {
        match self {
            Self::Unit => 1,
            Self::Octile => match direction_between(from, to) {
                Some(dir) if dir.is_diagonal() => 14,
                _ => 10,
            },
        }
    }

    /// Total cost of walking `path` in order.
    #[must_use]
    pub fn path_cost(self, path: &[Cell]) -> u64 {
        path.windows(2).map(|pair| self.step_cost(pair[0], pair[1])).sum()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Octile => "octile",
        }
    }
}

impl std::str::FromStr for CostModel {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unit" => Ok(Self::Unit),
            "octile" => Ok(Self::Octile),
            _ => Err(SearchError::UnknownCostModel { name: s.to_string() }),
        }
    }
}

/// Budget and bounds for one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions, summed over IDDFS iterations.
    pub max_steps: u64,
    /// DLS depth limit (edges from start).
    pub depth_limit: Option<u32>,
    /// Largest limit IDDFS tries (inclusive).
    pub max_depth: Option<u32>,
    /// Edge cost for UCS. Other strategies ignore it.
    pub cost_model: CostModel,
}

impl SearchPolicy {
    /// Check that the policy carries what `algorithm` needs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ZeroStepCap`] for a zero cap and
    /// [`SearchError::MissingLimit`] when DLS lacks `depth_limit` or IDDFS
    /// lacks `max_depth`.
    pub fn validate_for(&self, algorithm: Algorithm) -> Result<(), SearchError> {
        if self.max_steps == 0 {
            return Err(SearchError::ZeroStepCap);
        }
        match algorithm {
            Algorithm::Dls if self.depth_limit.is_none() => Err(SearchError::MissingLimit {
                algorithm: algorithm.as_str(),
                field: "depth_limit",
            }),
            Algorithm::Iddfs if self.max_depth.is_none() => Err(SearchError::MissingLimit {
                algorithm: algorithm.as_str(),
                field: "max_depth",
            }),
            _ => Ok(()),
        }
    }

    /// JSON snapshot for run reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cost_model": self.cost_model.as_str(),
            "depth_limit": self.depth_limit,
            "max_depth": self.max_depth,
            "max_steps": self.max_steps,
        })
    }

    /// Digest of [`SearchPolicy::to_json_value`] under
    /// [`HashDomain::SearchPolicy`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        canonical_json_hash(HashDomain::SearchPolicy, &self.to_json_value())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            depth_limit: Some(DEFAULT_DEPTH_LIMIT),
            max_depth: Some(DEFAULT_MAX_DEPTH),
            cost_model: CostModel::Unit,
        }
    }
}
