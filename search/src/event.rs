//! Trace events, failure reasons, and the canonical trace digest.
//!
//! The ordered event list is the normative record of a traversal. Two runs
//! with the same grid, endpoints, algorithm and policy produce byte-identical
//! canonical JSON and therefore the same digest.

use pathfinder_kernel::grid::Cell;
use pathfinder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pathfinder_kernel::proof::hash::{canonical_hash, ContentHash};
use pathfinder_kernel::proof::hash_domain::HashDomain;

/// Which endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Start,
    Target,
}

impl EndpointRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Target => "target",
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointProblem {
    OutOfBounds,
    Blocked,
}

impl EndpointProblem {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfBounds => "out_of_bounds",
            Self::Blocked => "blocked",
        }
    }
}

/// Why a traversal ended without a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The frontier emptied: the target is not reachable.
    NoPath,
    /// The frontier emptied but cells beyond `limit` were pruned, so a
    /// larger limit might succeed.
    DepthExhausted { limit: u32 },
    /// Start or target is out of bounds or on an obstacle. No step was taken.
    InvalidStartOrTarget {
        role: EndpointRole,
        cell: Cell,
        problem: EndpointProblem,
    },
    /// The expansion cap was reached before the search finished.
    StepCapExceeded { cap: u64 },
}

impl FailureReason {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoPath => "no_path",
            Self::DepthExhausted { .. } => "depth_exhausted",
            Self::InvalidStartOrTarget { .. } => "invalid_start_or_target",
            Self::StepCapExceeded { .. } => "step_cap_exceeded",
        }
    }

    /// `true` for NoPath and DepthExhausted: the search ran to the end of
    /// its frontier.
    #[must_use]
    pub const fn is_exhaustion(&self) -> bool {
        matches!(self, Self::NoPath | Self::DepthExhausted { .. })
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::NoPath => serde_json::json!({"type": "no_path"}),
            Self::DepthExhausted { limit } => {
                serde_json::json!({"limit": limit, "type": "depth_exhausted"})
            }
            Self::InvalidStartOrTarget {
                role,
                cell,
                problem,
            } => serde_json::json!({
                "cell": cell.to_json_value(),
                "problem": problem.as_str(),
                "role": role.as_str(),
                "type": "invalid_start_or_target",
            }),
            Self::StepCapExceeded { cap } => {
                serde_json::json!({"cap": cap, "type": "step_cap_exceeded"})
            }
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPath => write!(f, "no path exists"),
            Self::DepthExhausted { limit } => write!(f, "depth limit {limit} exhausted"),
            Self::InvalidStartOrTarget {
                role,
                cell,
                problem,
            } => write!(f, "{} {cell} is {}", role.as_str(), problem.as_str()),
            Self::StepCapExceeded { cap } => write!(f, "step cap of {cap} expansions exceeded"),
        }
    }
}

/// One observable unit of traversal progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A cell was pushed onto a frontier.
    Discovered(Cell),
    /// A cell was popped and its neighbors generated.
    Expanded(Cell),
    /// IDDFS began a fresh depth-limited iteration.
    DepthLimitStarted(u32),
    /// Terminal: the path from start to target, inclusive.
    PathFound(Vec<Cell>),
    /// Terminal: the traversal ended without a path.
    Failed(FailureReason),
}

impl TraceEvent {
    /// Whether this event ends the stream.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::PathFound(_) | Self::Failed(_))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Discovered(cell) => {
                serde_json::json!({"cell": cell.to_json_value(), "type": "discovered"})
            }
            Self::Expanded(cell) => {
                serde_json::json!({"cell": cell.to_json_value(), "type": "expanded"})
            }
            Self::DepthLimitStarted(limit) => {
                serde_json::json!({"limit": limit, "type": "depth_limit_started"})
            }
            Self::PathFound(path) => serde_json::json!({
                "path": path.iter().map(|c| c.to_json_value()).collect::<Vec<_>>(),
                "type": "path_found",
            }),
            Self::Failed(reason) => {
                serde_json::json!({"reason": reason.to_json_value(), "type": "failed"})
            }
        }
    }
}

/// Final result of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Non-empty path from start to target inclusive.
    Found(Vec<Cell>),
    Failed(FailureReason),
}

impl SearchOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Self::Found(path) => Some(path),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            Self::Found(_) => None,
            Self::Failed(reason) => Some(reason),
        }
    }

    /// The terminal event that reports this outcome.
    #[must_use]
    pub fn to_event(&self) -> TraceEvent {
        match self {
            Self::Found(path) => TraceEvent::PathFound(path.clone()),
            Self::Failed(reason) => TraceEvent::Failed(reason.clone()),
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Found(path) => serde_json::json!({
                "path": path.iter().map(|c| c.to_json_value()).collect::<Vec<_>>(),
                "type": "found",
            }),
            Self::Failed(reason) => {
                serde_json::json!({"reason": reason.to_json_value(), "type": "failed"})
            }
        }
    }
}

/// Canonical JSON bytes of an event sequence.
///
/// # Errors
///
/// Returns [`CanonError`] if serialization fails (events carry integers
/// only, so this does not happen in practice).
pub fn trace_to_canonical_json_bytes(events: &[TraceEvent]) -> Result<Vec<u8>, CanonError> {
    let value = serde_json::Value::Array(events.iter().map(TraceEvent::to_json_value).collect());
    canonical_json_bytes(&value)
}

/// Digest of an event sequence under [`HashDomain::TraceEvents`].
///
/// # Errors
///
/// Propagates [`CanonError`] from canonicalization.
pub fn trace_digest(events: &[TraceEvent]) -> Result<ContentHash, CanonError> {
    let bytes = trace_to_canonical_json_bytes(events)?;
    Ok(canonical_hash(HashDomain::TraceEvents, &bytes))
}
