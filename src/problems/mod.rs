//! Problem models for the tabu search engine.
//!
//! Each model implements [`crate::tabu::TabuProblem`]: it owns the instance
//! data (board size, distance matrix) and supplies the initial solution,
//! cost function, and neighborhood the engine searches over.

pub mod queens;
pub mod routing;

pub use queens::NQueens;
pub use routing::StoreRouting;
