//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (no path, depth exhaustion, invalid endpoints, step cap) are expressed as
//! [`crate::event::FailureReason`] values at the end of the trace, never as
//! errors.

/// Typed failure for pre-flight validation.
///
/// These are returned before a traversal is constructed, so no trace events
/// exist for them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// An algorithm name did not match any of the six strategies.
    #[error("unknown algorithm {name:?} (expected one of bfs, dfs, ucs, dls, iddfs, bidirectional)")]
    UnknownAlgorithm { name: String },

    /// A depth-bounded strategy was selected without its bound.
    #[error("{algorithm} requires `{field}` to be set")]
    MissingLimit {
        algorithm: &'static str,
        field: &'static str,
    },

    /// The step cap was zero, which would stop every run before it starts.
    #[error("max_steps must be at least 1")]
    ZeroStepCap,

    /// An unrecognized cost model name.
    #[error("unknown cost model {name:?} (expected unit or octile)")]
    UnknownCostModel { name: String },
}
