//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate (or accept) an initial solution; a zero-cost start is already
//!    optimal and returns immediately.
//! 2. At each iteration:
//!    a. Generate the neighborhood of the current solution
//!    b. Select the best non-tabu candidate (or a tabu one satisfying
//!       aspiration); any zero-cost candidate is returned on the spot
//!    c. Move to the selected candidate even if it worsens the current cost,
//!       and push its key onto the tabu list
//!    d. Update the global best if improved
//! 3. Terminate on the configured budget: stagnation count or wall-clock
//!    deadline, under a hard iteration cap either way.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{TabuConfig, Termination};
use super::list::TabuList;
use super::types::TabuProblem;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = the initial
    /// solution was never improved on).
    pub best_iteration: usize,
    /// Best-known cost per iteration, starting with the initial solution's
    /// cost, so `cost_history.len() == iterations + 1`.
    pub cost_history: Vec<f64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem, drawing the initial
    /// solution from the problem itself.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`TabuConfig::validate`]; invalid budgets
    /// are rejected before the first iteration.
    pub fn run<P: TabuProblem>(problem: &P, config: &TabuConfig) -> TabuResult<P::Solution> {
        config.validate().expect("invalid TabuConfig");
        let mut rng = seeded_rng(config);
        let initial = problem.initial_solution(&mut rng);
        search(problem, config, initial, &mut rng)
    }

    /// Executes Tabu Search from an externally supplied initial solution.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`TabuConfig::validate`].
    pub fn run_from<P: TabuProblem>(
        problem: &P,
        config: &TabuConfig,
        initial: P::Solution,
    ) -> TabuResult<P::Solution> {
        config.validate().expect("invalid TabuConfig");
        let mut rng = seeded_rng(config);
        search(problem, config, initial, &mut rng)
    }
}

fn seeded_rng(config: &TabuConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

fn search<P: TabuProblem>(
    problem: &P,
    config: &TabuConfig,
    initial: P::Solution,
    rng: &mut StdRng,
) -> TabuResult<P::Solution> {
    let mut current = initial;
    let mut best = current.clone();
    let mut best_cost = problem.cost(&current);
    let mut best_iteration = 0;

    // The trace starts with the initial solution's cost.
    let mut cost_history = vec![best_cost];

    // A zero-cost start is a provable optimum for feasibility objectives.
    if best_cost <= 0.0 {
        return TabuResult {
            best,
            best_cost,
            iterations: 0,
            best_iteration,
            cost_history,
        };
    }

    let mut tabu: TabuList<P::Key> = TabuList::new(config.tabu_tenure);
    let mut no_improve = 0usize;
    let mut iterations = 0usize;
    let start = Instant::now();

    for iteration in 1..=config.max_iterations {
        if let Termination::TimeLimit(limit) = config.termination {
            if start.elapsed() >= limit {
                break;
            }
        }

        let neighbors = problem.neighbors(&current, rng);
        if neighbors.is_empty() {
            break;
        }

        // Aspiration override: a zero-cost candidate is a global optimum and
        // is returned immediately, tabu or not.
        if let Some(optimum) = neighbors.iter().find(|mv| mv.cost <= 0.0) {
            cost_history.push(optimum.cost);
            return TabuResult {
                best: optimum.solution.clone(),
                best_cost: optimum.cost,
                iterations: iteration,
                best_iteration: iteration,
                cost_history,
            };
        }

        // Best admissible candidate: non-tabu, or tabu but improving the
        // global best when aspiration is enabled. Ties keep the first found.
        let mut chosen = None;
        let mut chosen_cost = f64::INFINITY;
        for mv in &neighbors {
            if tabu.contains(&mv.key) && !(config.aspiration && mv.cost < best_cost) {
                continue;
            }
            if mv.cost < chosen_cost {
                chosen_cost = mv.cost;
                chosen = Some(mv);
            }
        }

        // Everything tabu and nothing aspirates: take the least bad move,
        // the search must keep moving.
        if chosen.is_none() {
            for mv in &neighbors {
                if mv.cost < chosen_cost {
                    chosen_cost = mv.cost;
                    chosen = Some(mv);
                }
            }
        }

        let mv = match chosen {
            Some(mv) => mv,
            // Unreachable: the neighborhood is non-empty.
            None => break,
        };

        tabu.push(mv.key.clone());
        current = mv.solution.clone();

        // Accepted even when worse than the current cost; only the global
        // best decides the stagnation counter, incremented once at most.
        if mv.cost < best_cost {
            best = mv.solution.clone();
            best_cost = mv.cost;
            best_iteration = iteration;
            no_improve = 0;
        } else {
            no_improve += 1;
        }

        cost_history.push(best_cost);
        iterations = iteration;

        if let Termination::Stagnation { max_no_improve } = config.termination {
            if no_improve >= max_no_improve {
                break;
            }
        }
    }

    TabuResult {
        best,
        best_cost,
        iterations,
        best_iteration,
        cost_history,
    }
}
