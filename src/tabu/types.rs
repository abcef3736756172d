//! Core trait for Tabu Search problems.

use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;

/// A candidate move: a neighbor solution together with the key of the
/// perturbation that produced it.
///
/// The key identifies the move in the tabu list and must be normalized so
/// that equivalent perturbations compare equal regardless of enumeration
/// order (e.g., swapping values 3 and 7 yields the key `(3, 7)` whether the
/// swap was found as `(3, 7)` or `(7, 3)`).
///
/// Contract: `cost` is the cost of `solution`, and `solution` is a fresh
/// value that does not alias the solution the neighborhood was generated
/// from.
#[derive(Debug, Clone)]
pub struct TabuMove<S: Clone, K> {
    /// The resulting solution after applying this move.
    pub solution: S,
    /// Normalized move key for tabu tracking.
    pub key: K,
    /// Cost of the resulting solution.
    pub cost: f64,
}

/// Defines a combinatorial optimization problem for Tabu Search.
///
/// Users implement this trait to specify:
/// - How to create an initial solution
/// - How to evaluate a solution's cost (non-negative, lower is better)
/// - How to generate the neighborhood of a solution
///
/// Cost evaluation must be a pure function of the solution: evaluating the
/// same solution twice yields the same value, and neither `cost` nor
/// `neighbors` may mutate the solution they are given.
pub trait TabuProblem: Send + Sync {
    /// The solution type.
    type Solution: Clone + Send;

    /// The normalized move key type.
    type Key: Clone + Eq + Hash + Debug + Send;

    /// Creates an initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Evaluates the cost of a solution (lower is better).
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates neighboring solutions with their move keys.
    ///
    /// Each returned [`TabuMove`] includes the new solution, a move key
    /// for tabu tracking, and the solution cost. Tabu filtering is the
    /// engine's job: return all candidates, including ones whose key was
    /// recently used.
    ///
    /// The neighborhood need not be exhaustive; a representative sample
    /// (e.g., the best relocation per element) is acceptable.
    fn neighbors<R: Rng>(
        &self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Vec<TabuMove<Self::Solution, Self::Key>>;
}
