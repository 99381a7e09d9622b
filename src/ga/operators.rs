//! Genetic operators for takt plans.
//!
//! - **Selection**: tournament without replacement over the whole population.
//! - **Crossover**: one-point zone crossover, per-crew headcount swap, takt swap.
//! - **Mutation**: three independent jitter gates (zones, crews, takt).
//!
//! [`GeneticOperators`] bundles the rates from a [`TaktConfig`] so the engine
//! can call the operators without threading individual parameters.
//!
//! # Usage
//!
//! ```
//! use u_takt::ga::TaktConfig;
//! use u_takt::ga::operators::GeneticOperators;
//!
//! let ops = GeneticOperators::from_config(&TaktConfig::default());
//! assert_eq!(ops.tournament_size, 4);
//! ```

use rand::Rng;

use super::chromosome::{TaktChromosome, MAX_TAKT_DAYS, MIN_TAKT_DAYS};
use super::TaktConfig;
use crate::models::{MAX_HEADCOUNT, MAX_ZONE_AREA, MIN_HEADCOUNT, MIN_ZONE_AREA};

/// Per-zone probability of area jitter once the zone gate fires.
pub const ZONE_JITTER_PROBABILITY: f64 = 0.3;
/// Per-crew probability of headcount jitter once the crew gate fires.
pub const TEAM_JITTER_PROBABILITY: f64 = 0.2;

/// Operator rates for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticOperators {
    /// Contestants per tournament.
    pub tournament_size: usize,
    /// Probability of recombining a pair.
    pub crossover_rate: f64,
    /// Probability of each mutation gate.
    pub mutation_rate: f64,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self::from_config(&TaktConfig::default())
    }
}

impl GeneticOperators {
    /// Takes the operator rates from a configuration.
    pub fn from_config(config: &TaktConfig) -> Self {
        Self {
            tournament_size: config.tournament_size,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
        }
    }

    /// Tournament selection with the configured size.
    pub fn select<'a, R: Rng>(
        &self,
        population: &'a [TaktChromosome],
        rng: &mut R,
    ) -> Option<&'a TaktChromosome> {
        tournament_select(population, self.tournament_size, rng)
    }

    /// Crossover with the configured rate.
    pub fn crossover<R: Rng>(
        &self,
        p1: &TaktChromosome,
        p2: &TaktChromosome,
        rng: &mut R,
    ) -> (TaktChromosome, TaktChromosome) {
        crossover(p1, p2, self.crossover_rate, rng)
    }

    /// Mutation with the configured rate.
    pub fn mutate<R: Rng>(&self, chromosome: &TaktChromosome, rng: &mut R) -> TaktChromosome {
        mutate(chromosome, self.mutation_rate, rng)
    }
}

// ======================== Selection ========================

/// Tournament selection.
///
/// Draws `tournament_size` distinct members uniformly (capped at the
/// population size) and returns the one with the strictly greatest
/// fitness; the first drawn wins ties. Returns `None` for an empty
/// population or a zero-sized tournament.
pub fn tournament_select<'a, R: Rng>(
    population: &'a [TaktChromosome],
    tournament_size: usize,
    rng: &mut R,
) -> Option<&'a TaktChromosome> {
    let amount = tournament_size.min(population.len());
    let mut winner: Option<&TaktChromosome> = None;
    for idx in rand::seq::index::sample(rng, population.len(), amount) {
        let candidate = &population[idx];
        match winner {
            Some(w) if candidate.fitness() <= w.fitness() => {}
            _ => winner = Some(candidate),
        }
    }
    winner
}

// ======================== Crossover ========================

/// Recombines two parents into two unevaluated children.
///
/// With probability `1 − crossover_rate` the children are plain copies.
/// Otherwise zones after a random cut are exchanged, each shared crew
/// index swaps headcount with probability 0.5, and the takt values swap
/// with probability 0.5.
pub fn crossover<R: Rng>(
    p1: &TaktChromosome,
    p2: &TaktChromosome,
    crossover_rate: f64,
    rng: &mut R,
) -> (TaktChromosome, TaktChromosome) {
    let mut c1 = p1.clone();
    let mut c2 = p2.clone();
    c1.invalidate();
    c2.invalidate();

    if !rng.random_bool(crossover_rate) {
        return (c1, c2);
    }

    // Zones: one-point
    let min_len = p1.zones.len().min(p2.zones.len());
    if min_len > 0 {
        let cut = rng.random_range(0..min_len);
        for i in cut..c1.zones.len().min(p2.zones.len()) {
            c1.zones[i] = p2.zones[i].clone();
        }
        for i in cut..c2.zones.len().min(p1.zones.len()) {
            c2.zones[i] = p1.zones[i].clone();
        }
    }

    // Crews: headcount only
    let shared = c1.teams.len().min(c2.teams.len());
    for i in 0..shared {
        if rng.random_bool(0.5) {
            std::mem::swap(&mut c1.teams[i].headcount, &mut c2.teams[i].headcount);
        }
    }

    // Takt
    if rng.random_bool(0.5) {
        std::mem::swap(&mut c1.takt_days, &mut c2.takt_days);
    }

    (c1, c2)
}

// ======================== Mutation ========================

/// Returns a mutated, unevaluated copy of `chromosome`.
///
/// Each gate fires with probability `mutation_rate`:
/// - zones: each zone (30%) scales its area by U[0.8, 1.2], clamped to [50, 250]
/// - crews: each crew (20%) shifts headcount by −1/0/+1, clamped to [2, 12]
/// - takt: shifts by −1/0/+1, clamped to [3, 20]
pub fn mutate<R: Rng>(
    chromosome: &TaktChromosome,
    mutation_rate: f64,
    rng: &mut R,
) -> TaktChromosome {
    let mut m = chromosome.clone();
    m.invalidate();

    if rng.random_bool(mutation_rate) {
        for zone in &mut m.zones {
            if rng.random_bool(ZONE_JITTER_PROBABILITY) {
                let scaled = (f64::from(zone.area) * rng.random_range(0.8..=1.2)).round();
                zone.area = (scaled as u32).clamp(MIN_ZONE_AREA, MAX_ZONE_AREA);
            }
        }
    }

    if rng.random_bool(mutation_rate) {
        for team in &mut m.teams {
            if rng.random_bool(TEAM_JITTER_PROBABILITY) {
                team.headcount = shift(team.headcount, rng).clamp(MIN_HEADCOUNT, MAX_HEADCOUNT);
            }
        }
    }

    if rng.random_bool(mutation_rate) {
        m.takt_days = shift(m.takt_days, rng).clamp(MIN_TAKT_DAYS, MAX_TAKT_DAYS);
    }

    m
}

fn shift<R: Rng>(value: u32, rng: &mut R) -> u32 {
    value.saturating_add_signed(rng.random_range(-1..=1))
}
