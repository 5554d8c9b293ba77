//! Pathfinder Search: uninformed grid traversals with an auditable event trace.
//!
//! This crate provides the search layer. It depends only on
//! `pathfinder_kernel`; it does NOT depend on `pathfinder_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathfinder_kernel  ←  pathfinder_search  ←  pathfinder_harness
//! (grid, hashing)       (frontiers, engine)    (config, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`Algorithm`]: the six strategies, parseable from lowercase names
//! - [`Traversal`]: pull-based iterator of [`TraceEvent`]s
//! - [`SearchOutcome`] / [`FailureReason`]: how a traversal ended
//! - [`SearchPolicy`]: step cap, depth bounds and UCS cost model
//! - [`frontier::Frontier`]: FIFO, LIFO and priority frontiers

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod error;
pub mod event;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;

pub use engine::{IterationRecord, TraversalStats};
pub use error::SearchError;
pub use event::{EndpointProblem, EndpointRole, FailureReason, SearchOutcome, TraceEvent};
pub use policy::{CostModel, SearchPolicy};
pub use search::{run, search, Algorithm, SearchRun, Traversal, TraversalState};
