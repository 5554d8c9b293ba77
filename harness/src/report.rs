//! Run reports: what one traversal did, in a canonical, hashable form.

use pathfinder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pathfinder_kernel::proof::hash::{canonical_hash, ContentHash};
use pathfinder_kernel::proof::hash_domain::HashDomain;
use pathfinder_search::{Algorithm, SearchOutcome, SearchPolicy, TraceEvent, TraversalStats};

/// Result of running one algorithm on one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    /// Cells on the path, endpoints included; 0 when no path was found.
    pub path_len: usize,
    /// Path cost under the policy's cost model.
    pub path_cost: Option<u64>,
    pub stats: TraversalStats,
    pub policy: SearchPolicy,
    pub grid_fingerprint: ContentHash,
    pub trace_digest: ContentHash,
    pub events: Vec<TraceEvent>,
}

impl RunReport {
    /// JSON view without the event list (the digest stands in for it).
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from the policy digest.
    pub fn to_json_value(&self) -> Result<serde_json::Value, CanonError> {
        Ok(serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "grid_fingerprint": self.grid_fingerprint.as_str(),
            "outcome": self.outcome.to_json_value(),
            "path_cost": self.path_cost,
            "path_len": self.path_len,
            "policy": self.policy.to_json_value(),
            "policy_digest": self.policy.digest()?.as_str(),
            "stats": self.stats.to_json_value(),
            "trace_digest": self.trace_digest.as_str(),
        }))
    }

    /// Canonical JSON bytes of [`RunReport::to_json_value`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value()?)
    }

    /// Digest of the canonical report under [`HashDomain::RunReport`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(HashDomain::RunReport, &self.to_canonical_json_bytes()?))
    }

    /// One human-readable line.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let verdict = match &self.outcome {
            SearchOutcome::Found(_) => format!("path of {} cells", self.path_len),
            SearchOutcome::Failed(reason) => reason.to_string(),
        };
        format!(
            "{:<32} {:<40} expanded {:>5}  frontier peak {:>4}",
            self.algorithm.display_name(),
            verdict,
            self.stats.expansions,
            self.stats.frontier_high_water,
        )
    }
}

/// Multi-line comparison of several reports, one line each.
#[must_use]
pub fn render_comparison(reports: &[RunReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&report.summary_line());
        out.push('\n');
    }
    out
}
