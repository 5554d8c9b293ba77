//! Grid module: cells, the obstacle map, and the neighbor table.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod adjacency;
pub mod cell;
pub mod model;

pub use adjacency::{is_adjacent, neighbors, Direction, Neighbors};
pub use cell::Cell;
pub use model::{Grid, GridParseError};
