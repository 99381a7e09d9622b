//! Generational evolution loop.
//!
//! The engine is an explicit state value: [`EvolutionState::initialize`]
//! builds generation zero, and [`EvolutionState::step`] consumes one state
//! and returns the next. [`evolve`] folds `step` over the configured number
//! of generations. There is no early stopping.
//!
//! # Phases
//!
//! `Uninitialized → Initialized → Evolving(k) → Done`, see [`EvolutionPhase`].
//!
//! # Parallelism
//!
//! Randomness is consumed only on the calling thread while offspring are
//! built; evaluation is pure, so with [`TaktConfig::parallel`] set the
//! offspring are scored on the rayon pool and the run stays reproducible.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::operators::GeneticOperators;
use super::{Population, TaktChromosome, TaktConfig};
use crate::error::{TaktError, TaktResult};
use crate::models::Project;

/// Generations between progress log lines.
const LOG_EVERY: usize = 20;

/// Per-generation fitness trace, for plotting by consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionHistory {
    /// Top fitness of each generation.
    pub best_fitness: Vec<f64>,
    /// Mean fitness of each generation.
    pub mean_fitness: Vec<f64>,
}

impl EvolutionHistory {
    fn record(&mut self, best: f64, mean: f64) {
        self.best_fitness.push(best);
        self.mean_fitness.push(mean);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }
}

/// Lifecycle of an evolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionPhase {
    /// No population yet.
    Uninitialized,
    /// Generation zero built and evaluated.
    Initialized,
    /// Generation `k` (0-based) completed, more remain.
    Evolving(usize),
    /// All configured generations completed.
    Done,
}

impl EvolutionPhase {
    /// Phase of `state` in a run of `total_generations`.
    pub fn of(state: Option<&EvolutionState>, total_generations: usize) -> Self {
        match state {
            None => Self::Uninitialized,
            Some(s) if s.generation >= total_generations => Self::Done,
            Some(s) if s.generation == 0 => Self::Initialized,
            Some(s) => Self::Evolving(s.generation - 1),
        }
    }
}

/// State of an evolution run between generations.
#[derive(Debug, Clone)]
pub struct EvolutionState {
    /// Current generation, best first.
    pub population: Population,
    /// Best chromosome seen so far (owned copy).
    pub best: TaktChromosome,
    /// Fitness trace, one entry per completed generation.
    pub history: EvolutionHistory,
    /// Completed generations.
    pub generation: usize,
}

impl EvolutionState {
    /// Builds and evaluates generation zero.
    pub fn initialize<R: Rng>(
        project: &Project,
        config: &TaktConfig,
        rng: &mut R,
    ) -> TaktResult<Self> {
        config.validate()?;

        let seeds = (0..config.population_size)
            .map(|_| TaktChromosome::random(project, rng))
            .collect();
        let population = Population::sorted(evaluate_all(seeds, config.parallel));
        let best = population.best().cloned().ok_or(TaktError::EmptyPopulation)?;

        debug!(
            population = population.len(),
            best_fitness = best.fitness(),
            mean_fitness = population.mean_fitness(),
            "initial population evaluated"
        );

        Ok(Self {
            population,
            best,
            history: EvolutionHistory::default(),
            generation: 0,
        })
    }

    /// Runs one generation and returns the next state.
    ///
    /// Elites are cloned first, then offspring are bred pairwise
    /// (select, select, crossover, mutate each child) until the buffer
    /// holds `population_size` members.
    ///
    /// # Errors
    /// `InvalidConfig` if `config` fails [`TaktConfig::validate`]; the state
    /// is consumed either way.
    pub fn step<R: Rng>(self, config: &TaktConfig, rng: &mut R) -> TaktResult<Self> {
        config.validate()?;

        let ops = GeneticOperators::from_config(config);
        let parents = self.population.members();

        let mut next = self.population.top(config.elitism_count).to_vec();
        let needed = config.population_size.saturating_sub(next.len());

        let mut offspring = Vec::with_capacity(needed);
        while offspring.len() < needed {
            let p1 = ops.select(parents, rng).ok_or(TaktError::EmptyPopulation)?;
            let p2 = ops.select(parents, rng).ok_or(TaktError::EmptyPopulation)?;
            let (c1, c2) = ops.crossover(p1, p2, rng);
            for child in [c1, c2] {
                if offspring.len() >= needed {
                    break;
                }
                offspring.push(ops.mutate(&child, rng));
            }
        }
        next.extend(evaluate_all(offspring, config.parallel));

        let population = Population::sorted(next);
        let (top_fitness, top) = match population.best() {
            Some(top) => (top.fitness(), top),
            None => return Err(TaktError::EmptyPopulation),
        };
        let best = if top_fitness > self.best.fitness() {
            top.clone()
        } else {
            self.best
        };

        let mut history = self.history;
        history.record(top_fitness, population.mean_fitness());

        trace!(
            generation = self.generation,
            best_fitness = best.fitness(),
            top_fitness,
            "generation complete"
        );

        Ok(Self {
            population,
            best,
            history,
            generation: self.generation + 1,
        })
    }

    /// Phase of this state in a run of `total_generations`.
    pub fn phase(&self, total_generations: usize) -> EvolutionPhase {
        EvolutionPhase::of(Some(self), total_generations)
    }
}

/// Runs a full evolution: initialization plus `config.generations` steps.
pub fn evolve<R: Rng>(
    project: &Project,
    config: &TaktConfig,
    rng: &mut R,
) -> TaktResult<EvolutionState> {
    let initial = EvolutionState::initialize(project, config, rng)?;

    (0..config.generations).try_fold(initial, |state, generation| -> TaktResult<_> {
        let next = state.step(config, rng)?;
        if generation % LOG_EVERY == 0 {
            info!(
                generation,
                best_fitness = next.best.fitness(),
                "evolution progress"
            );
        }
        Ok(next)
    })
}

fn evaluate_all(chromosomes: Vec<TaktChromosome>, parallel: bool) -> Vec<TaktChromosome> {
    if parallel {
        chromosomes
            .into_par_iter()
            .map(TaktChromosome::evaluated)
            .collect()
    } else {
        chromosomes
            .into_iter()
            .map(TaktChromosome::evaluated)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sample_project() -> Project {
        Project::new()
            .with_floor("Zemin", 0)
            .with_floor("Kat 1", 1)
            .with_floor("Kat 2", 2)
            .with_work_item("w1", "Betonarme Kalibi")
            .with_work_item("w2", "Siva")
            .with_work_item("w3", "Boya")
            .with_work_item("w4", "Seramik")
    }

    fn small_config() -> TaktConfig {
        TaktConfig::default()
            .with_population_size(30)
            .with_generations(15)
    }

    #[test]
    fn test_initialize() {
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(42);
        let state = EvolutionState::initialize(&sample_project(), &config, &mut rng).unwrap();

        assert_eq!(state.population.len(), 30);
        assert!(state.population.is_sorted());
        assert!(state.population.iter().all(TaktChromosome::is_evaluated));
        assert_eq!(state.best, state.population.members()[0]);
        assert!(state.history.is_empty());
        assert_eq!(state.phase(15), EvolutionPhase::Initialized);
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = TaktConfig::default().with_population_size(0);
        assert!(EvolutionState::initialize(&sample_project(), &config, &mut rng).is_err());

        let config = TaktConfig::default().with_tournament_size(0);
        assert!(EvolutionState::initialize(&sample_project(), &config, &mut rng).is_err());
    }

    #[test]
    fn test_step_rejects_bad_rates() {
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(42);
        let state = EvolutionState::initialize(&sample_project(), &config, &mut rng).unwrap();

        let nan_crossover = config.clone().with_crossover_rate(f64::NAN);
        let err = state.clone().step(&nan_crossover, &mut rng).unwrap_err();
        assert!(matches!(err, TaktError::InvalidConfig { field: "crossover_rate", .. }));

        let high_mutation = config.with_mutation_rate(1.5);
        let err = state.step(&high_mutation, &mut rng).unwrap_err();
        assert!(matches!(err, TaktError::InvalidConfig { field: "mutation_rate", .. }));
    }

    #[test]
    fn test_tournament_larger_than_population_runs() {
        // Default tournament of 4 against 3 plans: every draw sees them all.
        let config = TaktConfig::default()
            .with_population_size(3)
            .with_generations(4);
        let mut rng = SmallRng::seed_from_u64(9);
        let state = evolve(&sample_project(), &config, &mut rng).unwrap();
        assert_eq!(state.population.len(), 3);
        assert_eq!(state.history.len(), 4);
    }

    #[test]
    fn test_every_generation_is_full_and_sorted() {
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut state = EvolutionState::initialize(&sample_project(), &config, &mut rng).unwrap();

        for g in 0..config.generations {
            state = state.step(&config, &mut rng).unwrap();
            assert_eq!(state.population.len(), config.population_size);
            assert!(state.population.is_sorted());
            assert_eq!(state.history.len(), g + 1);
        }
        assert_eq!(state.phase(config.generations), EvolutionPhase::Done);
    }

    #[test]
    fn test_best_fitness_is_monotone() {
        let config = small_config().with_elitism_count(0);
        let mut rng = SmallRng::seed_from_u64(7);
        let mut state = EvolutionState::initialize(&sample_project(), &config, &mut rng).unwrap();

        let mut previous = state.best.fitness();
        for _ in 0..config.generations {
            state = state.step(&config, &mut rng).unwrap();
            assert!(state.best.fitness() >= previous);
            previous = state.best.fitness();
        }
    }

    #[test]
    fn test_elites_survive() {
        let config = small_config().with_elitism_count(3);
        let mut rng = SmallRng::seed_from_u64(11);
        let mut state = EvolutionState::initialize(&sample_project(), &config, &mut rng).unwrap();

        for _ in 0..5 {
            let elites = state.population.top(3).to_vec();
            state = state.step(&config, &mut rng).unwrap();
            for elite in &elites {
                assert!(state.population.iter().any(|c| c == elite));
            }
        }
    }

    #[test]
    fn test_history_tracks_top_and_mean() {
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(3);
        let state = evolve(&sample_project(), &config, &mut rng).unwrap();

        assert_eq!(state.history.best_fitness.len(), 15);
        assert_eq!(state.history.mean_fitness.len(), 15);
        for (best, mean) in state
            .history
            .best_fitness
            .iter()
            .zip(&state.history.mean_fitness)
        {
            assert!(best >= mean);
        }
        assert_eq!(
            *state.history.best_fitness.last().unwrap(),
            state.population.best().unwrap().fitness()
        );
        assert!(state.best.fitness() >= state.population.best().unwrap().fitness());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = small_config();
        let a = evolve(&sample_project(), &config, &mut SmallRng::seed_from_u64(99)).unwrap();
        let b = evolve(&sample_project(), &config, &mut SmallRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let serial = small_config();
        let parallel = small_config().with_parallel(true);
        let a = evolve(&sample_project(), &serial, &mut SmallRng::seed_from_u64(5)).unwrap();
        let b = evolve(&sample_project(), &parallel, &mut SmallRng::seed_from_u64(5)).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_odd_population_truncates_overshoot() {
        let config = TaktConfig::default()
            .with_population_size(7)
            .with_generations(3)
            .with_elitism_count(2);
        let mut rng = SmallRng::seed_from_u64(1);
        let state = evolve(&sample_project(), &config, &mut rng).unwrap();
        assert_eq!(state.population.len(), 7);
    }

    #[test]
    fn test_elitism_larger_than_population() {
        let config = TaktConfig::default()
            .with_population_size(4)
            .with_tournament_size(2)
            .with_generations(2)
            .with_elitism_count(10);
        let mut rng = SmallRng::seed_from_u64(1);
        let initial = EvolutionState::initialize(&sample_project(), &config, &mut rng).unwrap();
        let before = initial.population.members().to_vec();

        let state = initial.step(&config, &mut rng).unwrap();
        assert_eq!(state.population.members(), before.as_slice());
    }

    #[test]
    fn test_degenerate_project() {
        let config = small_config();
        let mut rng = SmallRng::seed_from_u64(42);
        let state = evolve(&Project::new(), &config, &mut rng).unwrap();
        assert_eq!(state.population.len(), 30);
        assert_eq!(state.best.duration(), -i64::from(state.best.takt_days));
        assert!(state.best.zones.is_empty() && state.best.teams.is_empty());
    }

    #[test]
    fn test_phase_transitions() {
        assert_eq!(EvolutionPhase::of(None, 5), EvolutionPhase::Uninitialized);

        let config = small_config().with_generations(3);
        let mut rng = SmallRng::seed_from_u64(2);
        let state = EvolutionState::initialize(&sample_project(), &config, &mut rng).unwrap();
        let state = state.step(&config, &mut rng).unwrap();
        assert_eq!(state.phase(3), EvolutionPhase::Evolving(0));
        let state = state.step(&config, &mut rng).unwrap();
        assert_eq!(state.phase(3), EvolutionPhase::Evolving(1));
        let state = state.step(&config, &mut rng).unwrap();
        assert_eq!(state.phase(3), EvolutionPhase::Done);
    }
}
