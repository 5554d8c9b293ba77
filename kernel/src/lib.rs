//! Pathfinder Kernel: the immutable grid model and canonical hashing.
//!
//! # API Surface
//!
//! - [`grid::Grid`] -- rows, columns and a fixed obstacle set
//! - [`grid::adjacency::neighbors`] -- the fixed six-direction expansion order
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! # Module Dependency Direction
//!
//! `grid` ← `proof`
//!
//! `grid` depends on nothing internal. `proof` uses `grid` only to
//! fingerprint a layout.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
