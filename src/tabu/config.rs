//! Tabu Search configuration.

use std::time::Duration;

/// When to stop the search.
///
/// Both policies are budgets, not error conditions: a search that exhausts
/// its budget returns the best solution found so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Stop after this many consecutive iterations without improving the
    /// best-known cost.
    Stagnation {
        /// Maximum iterations without improvement.
        max_no_improve: usize,
    },
    /// Stop once this much wall-clock time has elapsed, checked at the top
    /// of each iteration.
    TimeLimit(Duration),
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tabu_engine::tabu::{TabuConfig, Termination};
///
/// let config = TabuConfig::default()
///     .with_tabu_tenure(5)
///     .with_stagnation_limit(100);
/// assert_eq!(config.tabu_tenure, 5);
/// assert_eq!(config.termination, Termination::Stagnation { max_no_improve: 100 });
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Hard cap on the number of iterations, regardless of policy.
    pub max_iterations: usize,
    /// Capacity of the tabu list (how many recent moves stay forbidden).
    pub tabu_tenure: usize,
    /// Whether a tabu move that improves the global best is admissible.
    ///
    /// A move reaching cost zero is always taken regardless of this flag;
    /// zero is a provable optimum for feasibility-style objectives.
    pub aspiration: bool,
    /// Termination policy (stagnation budget or wall-clock deadline).
    pub termination: Termination,
    /// Random seed (None for a random seed).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            tabu_tenure: 7,
            aspiration: true,
            termination: Termination::Stagnation {
                max_no_improve: 100,
            },
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the hard iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (capacity of the tabu list).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Enables or disables the improving-move aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the termination policy.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Shorthand for a stagnation-budget policy.
    pub fn with_stagnation_limit(mut self, max_no_improve: usize) -> Self {
        self.termination = Termination::Stagnation { max_no_improve };
        self
    }

    /// Shorthand for a wall-clock deadline policy.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.termination = Termination::TimeLimit(limit);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".to_string());
        }
        if self.tabu_tenure == 0 {
            return Err("tabu_tenure must be positive".to_string());
        }
        match self.termination {
            Termination::Stagnation { max_no_improve } if max_no_improve == 0 => {
                Err("stagnation limit must be positive".to_string())
            }
            Termination::TimeLimit(limit) if limit.is_zero() => {
                Err("time limit must be positive".to_string())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 10_000);
        assert_eq!(config.tabu_tenure, 7);
        assert!(config.aspiration);
        assert_eq!(
            config.termination,
            Termination::Stagnation {
                max_no_improve: 100
            }
        );
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_max_iterations(1000)
            .with_tabu_tenure(10)
            .with_aspiration(false)
            .with_time_limit(Duration::from_secs(10))
            .with_seed(123);

        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_tenure, 10);
        assert!(!config.aspiration);
        assert_eq!(
            config.termination,
            Termination::TimeLimit(Duration::from_secs(10))
        );
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_tabu_config_rejects_zero_tenure() {
        let config = TabuConfig::default().with_tabu_tenure(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tabu_config_rejects_zero_budgets() {
        assert!(TabuConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
        assert!(TabuConfig::default()
            .with_stagnation_limit(0)
            .validate()
            .is_err());
        assert!(TabuConfig::default()
            .with_time_limit(Duration::ZERO)
            .validate()
            .is_err());
    }
}
