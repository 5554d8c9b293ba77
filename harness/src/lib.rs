//! Pathfinder Harness: configuration, grid generation and run orchestration.
//!
//! The harness turns a [`config::RunConfig`] into a generated grid, drives
//! one or all six traversals through `pathfinder_search`, and packages each
//! run as a [`report::RunReport`] with canonical digests.
//!
//! The harness does NOT implement search logic; it delegates to the search
//! crate.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod environment;
pub mod report;
pub mod runner;
pub mod telemetry;
