//! N-queens as a tabu-search feasibility problem.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::tabu::{TabuMove, TabuProblem};

/// The N-queens puzzle: place `n` queens on an `n x n` board so that no two
/// attack each other.
///
/// A solution is a permutation giving each column's queen row, so row and
/// column collisions are impossible by construction and the cost is the
/// number of queen pairs sharing a diagonal. Cost zero is a valid placement
/// and a provable optimum.
#[derive(Debug, Clone)]
pub struct NQueens {
    n: usize,
}

impl NQueens {
    /// Creates a problem for an `n` by `n` board.
    ///
    /// Fails for `n < 2`: with fewer than two columns there is nothing to
    /// swap and the neighborhood is vacuous.
    pub fn new(n: usize) -> Result<Self, String> {
        if n < 2 {
            return Err(format!("board size must be at least 2, got {n}"));
        }
        Ok(Self { n })
    }

    /// Board size.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Tabu tenure matched to the board size: half the board plus one.
    pub fn suggested_tenure(&self) -> usize {
        self.n / 2 + 1
    }
}

impl TabuProblem for NQueens {
    type Solution = Vec<usize>;
    /// Normalized `(min, max)` pair of the two swapped row values.
    type Key = (usize, usize);

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut board: Vec<usize> = (0..self.n).collect();
        board.shuffle(rng);
        board
    }

    /// Counts attacking pairs in one pass with per-diagonal occupancy
    /// counters: each queen collides with every earlier queen already on
    /// one of its two diagonals.
    fn cost(&self, board: &Vec<usize>) -> f64 {
        let n = self.n;
        let mut diag = vec![0u32; 2 * n]; // indexed by column + row
        let mut anti = vec![0u32; 2 * n]; // indexed by column - row, offset by n
        let mut collisions = 0u32;
        for (col, &row) in board.iter().enumerate() {
            let d = col + row;
            let a = col + n - row;
            collisions += diag[d] + anti[a];
            diag[d] += 1;
            anti[a] += 1;
        }
        f64::from(collisions)
    }

    /// Ring-adjacent column swaps: `(0,1), (1,2), ..., (n-1,0)`. Each
    /// neighbor is a fresh copy of the board; the input is never mutated.
    fn neighbors<R: Rng>(
        &self,
        board: &Vec<usize>,
        _rng: &mut R,
    ) -> Vec<TabuMove<Vec<usize>, (usize, usize)>> {
        let n = self.n;
        let mut moves = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            let key = (board[i].min(board[j]), board[i].max(board[j]));
            let mut neighbor = board.clone();
            neighbor.swap(i, j);
            let cost = self.cost(&neighbor);
            moves.push(TabuMove {
                solution: neighbor,
                key,
                cost,
            });
        }
        moves
    }
}
