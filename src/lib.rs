//! Tabu search engine with pluggable problem definitions.
//!
//! The crate has two layers:
//!
//! - [`tabu`]: the search engine itself. A single-solution trajectory
//!   metaheuristic that always moves to the best admissible neighbor (even a
//!   worsening one) and keeps a short-term memory of recent moves, the tabu
//!   list, to avoid cycling back to just-visited states. Termination is
//!   either a stagnation budget (iterations without improving the best-known
//!   cost) or a wall-clock deadline.
//! - [`problems`]: ready-made problem models for the engine: the N-queens
//!   feasibility puzzle and a store-to-distribution-center routing problem.
//!
//! The engine knows nothing about boards or routes; problems supply an
//! initial solution, a cost function, and a neighborhood through the
//! [`tabu::TabuProblem`] trait. Runs are seedable and single-threaded; the
//! only output is the best solution found and its per-iteration cost trace.

pub mod problems;
pub mod tabu;
