//! Optimization entry point.
//!
//! [`TaktOptimizer`] validates the project and configuration, runs the
//! evolution to completion, derives the scenarios and assembles an
//! [`OptimizationResult`]. A call is synchronous and performs no I/O;
//! callers needing a deadline should run it on a worker thread.
//!
//! # Example
//!
//! ```
//! use u_takt::models::Project;
//! use u_takt::ga::TaktConfig;
//! use u_takt::TaktOptimizer;
//!
//! let project = Project::new()
//!     .with_floor("Zemin", 0)
//!     .with_work_item("w1", "Siva");
//! let config = TaktConfig::default()
//!     .with_population_size(10)
//!     .with_generations(5)
//!     .with_seed(42);
//!
//! let result = TaktOptimizer::new(project).with_config(config).optimize().unwrap();
//! assert_eq!(result.history.len(), 5);
//! assert_eq!(result.scenarios.len(), 3);
//! ```

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{TaktError, TaktResult};
use crate::ga::{evolve, EvolutionHistory, EvolutionState, TaktChromosome, TaktConfig};
use crate::models::Project;
use crate::scenario::{generate_scenarios, Scenario, RECOMMENDED_INDEX};
use crate::validation::{project_warnings, validate_project};

/// Summary figures of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationStatistics {
    /// Generations run.
    pub total_generations: usize,
    /// Chromosomes per generation.
    pub population_size: usize,
    /// Fitness of the best plan.
    pub best_fitness: f64,
    /// Span of the best plan (days).
    pub best_duration: i64,
    /// Labor cost of the best plan.
    pub best_cost: f64,
    /// Plans bred and scored: population × generations.
    pub total_simulations: usize,
    /// Wall-clock time of the run (ms).
    pub elapsed_ms: u64,
}

/// Output of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Best plan found, with metrics.
    pub best_plan: TaktChromosome,
    /// Fast Track, Economical, Balanced, in that order.
    pub scenarios: Vec<Scenario>,
    /// Per-generation best and mean fitness.
    pub history: EvolutionHistory,
    /// Summary figures.
    pub statistics: OptimizationStatistics,
}

impl OptimizationResult {
    /// The scenario consumers select by default (Balanced).
    pub fn recommended(&self) -> Option<&Scenario> {
        self.scenarios.get(RECOMMENDED_INDEX)
    }
}

/// Takt plan optimizer for one project.
#[derive(Debug, Clone)]
pub struct TaktOptimizer {
    project: Project,
    config: TaktConfig,
}

impl TaktOptimizer {
    /// Creates an optimizer with the default configuration.
    pub fn new(project: Project) -> Self {
        Self {
            project,
            config: TaktConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: TaktConfig) -> Self {
        self.config = config;
        self
    }

    /// The project being planned.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The active configuration.
    pub fn config(&self) -> &TaktConfig {
        &self.config
    }

    /// Runs with an RNG seeded from `config.seed`, or from the OS if unset.
    pub fn optimize(&self) -> TaktResult<OptimizationResult> {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.optimize_with_rng(&mut rng)
    }

    /// Runs with a caller-supplied RNG.
    pub fn optimize_with_rng<R: Rng>(&self, rng: &mut R) -> TaktResult<OptimizationResult> {
        let started = Instant::now();
        let state = self.evolve_with_rng(rng)?;
        let scenarios = generate_scenarios(&state.best);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let statistics = OptimizationStatistics {
            total_generations: self.config.generations,
            population_size: self.config.population_size,
            best_fitness: state.best.fitness(),
            best_duration: state.best.duration(),
            best_cost: state.best.cost(),
            total_simulations: self.config.population_size * self.config.generations,
            elapsed_ms,
        };

        info!(
            generations = statistics.total_generations,
            best_fitness = statistics.best_fitness,
            best_duration = statistics.best_duration,
            elapsed_ms,
            "optimization completed"
        );

        Ok(OptimizationResult {
            best_plan: state.best,
            scenarios,
            history: state.history,
            statistics,
        })
    }

    /// Runs the evolution only and returns its terminal state
    /// (best plan, final population, history).
    pub fn evolve_with_rng<R: Rng>(&self, rng: &mut R) -> TaktResult<EvolutionState> {
        if let Err(errors) = validate_project(&self.project) {
            warn!(issues = errors.len(), "project rejected");
            return Err(TaktError::InvalidProject(errors));
        }
        for issue in project_warnings(&self.project) {
            warn!(kind = ?issue.kind, "{}", issue.message);
        }
        if let Err(e) = self.config.validate() {
            warn!(error = %e, "configuration rejected");
            return Err(e);
        }
        evolve(&self.project, &self.config, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::fitness::labor_rate;
    use crate::scenario::ScenarioKind;

    fn sample_project() -> Project {
        Project::new()
            .with_floor("Zemin", 0)
            .with_floor("Kat 1", 1)
            .with_floor("Kat 2", 2)
            .with_floor("Kat 3", 3)
            .with_work_item("w1", "Betonarme Kalibi")
            .with_work_item("w2", "Duvar Sivasi")
            .with_work_item("w3", "Elektrik Tesisati")
            .with_work_item("w4", "Boya")
            .with_work_item("w5", "Yalitim")
    }

    fn fast_config() -> TaktConfig {
        TaktConfig::default()
            .with_population_size(40)
            .with_generations(20)
            .with_seed(42)
    }

    #[test]
    fn test_minimal_project_example() {
        let project = Project::new()
            .with_floor("Zemin", 0)
            .with_work_item("w1", "Siva");
        let config = TaktConfig::default()
            .with_population_size(10)
            .with_generations(5);

        let result = TaktOptimizer::new(project)
            .with_config(config)
            .optimize()
            .unwrap();
        assert_eq!(result.history.best_fitness.len(), 5);
        assert_eq!(result.history.mean_fitness.len(), 5);
        assert_eq!(result.scenarios.len(), 3);
    }

    #[test]
    fn test_result_contents() {
        let result = TaktOptimizer::new(sample_project())
            .with_config(fast_config())
            .optimize()
            .unwrap();

        let best = &result.best_plan;
        assert!(best.is_evaluated());
        assert_eq!(
            best.duration(),
            (best.teams.len() + best.zones.len() - 1) as i64 * i64::from(best.takt_days)
        );
        let cost: f64 = best
            .teams
            .iter()
            .map(|t| labor_rate(&t.name) * f64::from(t.headcount) * best.duration() as f64)
            .sum();
        assert_eq!(best.cost(), cost);

        let stats = &result.statistics;
        assert_eq!(stats.total_generations, 20);
        assert_eq!(stats.population_size, 40);
        assert_eq!(stats.total_simulations, 800);
        assert_eq!(stats.best_fitness, best.fitness());
        assert_eq!(stats.best_duration, best.duration());
        assert_eq!(stats.best_cost, best.cost());

        let recommended = result.recommended().unwrap();
        assert_eq!(recommended.kind, ScenarioKind::Balanced);
        assert_eq!(&recommended.plan, best);
    }

    #[test]
    fn test_best_plan_not_worse_than_history() {
        let result = TaktOptimizer::new(sample_project())
            .with_config(fast_config())
            .optimize()
            .unwrap();
        let best = result.best_plan.fitness();
        assert!(result.history.best_fitness.iter().all(|&f| f <= best));
    }

    #[test]
    fn test_same_seed_same_result() {
        let optimizer = TaktOptimizer::new(sample_project()).with_config(fast_config());
        let a = optimizer.optimize().unwrap();
        let b = optimizer.optimize().unwrap();
        assert_eq!(a.best_plan, b.best_plan);
        assert_eq!(a.scenarios, b.scenarios);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_invalid_project_rejected() {
        let project = sample_project().with_work_item("w3", "Seramik");
        let err = TaktOptimizer::new(project)
            .with_config(fast_config())
            .optimize()
            .unwrap_err();
        assert!(matches!(err, TaktError::InvalidProject(_)));
    }

    #[test]
    fn test_unnamed_work_item_priced_at_default_rate() {
        let project = Project::new()
            .with_floor("Zemin", 0)
            .with_floor("Zemin", 1)
            .with_work_item("w1", "");
        let config = TaktConfig::default()
            .with_population_size(10)
            .with_generations(2)
            .with_seed(42);

        let result = TaktOptimizer::new(project)
            .with_config(config)
            .optimize()
            .unwrap();
        let best = &result.best_plan;
        assert_eq!(best.teams.len(), 1);
        assert_eq!(best.teams[0].name, "");
        let expected = 700.0 * f64::from(best.teams[0].headcount) * best.duration() as f64;
        assert_eq!(best.cost(), expected);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = TaktOptimizer::new(sample_project())
            .with_config(fast_config().with_tournament_size(0))
            .optimize()
            .unwrap_err();
        assert!(matches!(err, TaktError::InvalidConfig { .. }));
    }

    #[test]
    fn test_zero_generations() {
        let result = TaktOptimizer::new(sample_project())
            .with_config(fast_config().with_generations(0))
            .optimize()
            .unwrap();
        assert!(result.history.is_empty());
        assert!(result.best_plan.is_evaluated());
        assert_eq!(result.scenarios.len(), 3);
    }

    #[test]
    fn test_empty_project_degrades_gracefully() {
        let result = TaktOptimizer::new(Project::new())
            .with_config(fast_config())
            .optimize()
            .unwrap();
        let best = &result.best_plan;
        assert_eq!(result.statistics.best_duration, -i64::from(best.takt_days));
        assert_eq!(result.statistics.best_cost, 0.0);
        assert_eq!(result.scenarios.len(), 3);
    }

    #[test]
    fn test_evolve_exposes_final_population() {
        let optimizer = TaktOptimizer::new(sample_project()).with_config(fast_config());
        let mut rng = SmallRng::seed_from_u64(1);
        let state = optimizer.evolve_with_rng(&mut rng).unwrap();
        assert_eq!(state.population.len(), 40);
        assert_eq!(state.history.len(), 20);
    }

    #[test]
    fn test_result_serializes() {
        let result = TaktOptimizer::new(sample_project())
            .with_config(fast_config().with_generations(2))
            .optimize()
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["scenarios"][0]["kind"], "fast_track");
        assert_eq!(json["scenarios"][2]["name"], "Dengeli (Onerilen)");
        assert_eq!(json["statistics"]["total_generations"], 2);
        assert!(json["best_plan"]["metrics"]["fitness"].is_number());
    }
}
