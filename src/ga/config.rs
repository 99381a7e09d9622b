//! Genetic algorithm configuration.
//!
//! Every field has a default, so a partial JSON/serde payload overrides
//! only what it names.
//!
//! ```
//! use u_takt::ga::TaktConfig;
//!
//! let config = TaktConfig::default()
//!     .with_population_size(40)
//!     .with_generations(20)
//!     .with_seed(7);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{TaktError, TaktResult};

/// GA parameters for one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaktConfig {
    /// Chromosomes per generation (default: 150).
    pub population_size: usize,
    /// Number of generations to run (default: 80).
    pub generations: usize,
    /// Probability of each mutation gate firing (default: 0.12).
    pub mutation_rate: f64,
    /// Probability of recombining a parent pair (default: 0.85).
    pub crossover_rate: f64,
    /// Contestants per tournament (default: 4). Capped at the population
    /// size when drawn.
    pub tournament_size: usize,
    /// Top chromosomes cloned into the next generation (default: 2).
    pub elitism_count: usize,
    /// RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Evaluate offspring on the rayon pool (default: false).
    pub parallel: bool,
}

impl Default for TaktConfig {
    fn default() -> Self {
        Self {
            population_size: 150,
            generations: 80,
            mutation_rate: 0.12,
            crossover_rate: 0.85,
            tournament_size: 4,
            elitism_count: 2,
            seed: None,
            parallel: false,
        }
    }
}

impl TaktConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the elitism count.
    pub fn with_elitism_count(mut self, count: usize) -> Self {
        self.elitism_count = count;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel offspring evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that the configuration can produce a population.
    ///
    /// Elitism larger than the population is allowed; only
    /// `population_size` elites are carried. So is a tournament larger than
    /// the population: each draw then sees every member once.
    pub fn validate(&self) -> TaktResult<()> {
        if self.population_size == 0 {
            return Err(TaktError::config("population_size", "must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(TaktError::config("tournament_size", "must be at least 1"));
        }
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("crossover_rate", self.crossover_rate)?;
        Ok(())
    }
}

fn check_probability(field: &'static str, value: f64) -> TaktResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TaktError::config(
            field,
            format!("must be within [0, 1], got {value}"),
        ))
    }
}
