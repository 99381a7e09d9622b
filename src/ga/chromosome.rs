//! Takt plan chromosome.
//!
//! # Encoding
//!
//! A chromosome is a whole candidate plan:
//! - **Zones**: 2-4 per floor, in floor order.
//! - **Teams**: one crew per work item, in work-item order.
//! - **Takt**: a single cadence (days per zone) shared by all crews.
//!
//! Metrics are `None` until the chromosome passes through
//! [`TaktChromosome::evaluated`]. Crossover and mutation always return
//! unevaluated chromosomes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fitness::{self, PlanMetrics};
use crate::models::{Project, TaktSchedule, Team, Zone};

/// Shortest takt a plan may have (days).
pub const MIN_TAKT_DAYS: u32 = 3;
/// Longest takt a plan may have (days).
pub const MAX_TAKT_DAYS: u32 = 20;

/// A candidate takt plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaktChromosome {
    /// Zones in floor order.
    pub zones: Vec<Zone>,
    /// Crews in work-item order.
    pub teams: Vec<Team>,
    /// Days each crew spends in one zone.
    pub takt_days: u32,
    /// Evaluation result. `None` = stale.
    pub metrics: Option<PlanMetrics>,
}

impl TaktChromosome {
    /// Creates an unevaluated chromosome from explicit genes.
    pub fn new(zones: Vec<Zone>, teams: Vec<Team>, takt_days: u32) -> Self {
        Self {
            zones,
            teams,
            takt_days,
            metrics: None,
        }
    }

    /// Creates a random, unevaluated chromosome for a project.
    pub fn random<R: Rng>(project: &Project, rng: &mut R) -> Self {
        let mut zones = Vec::new();
        for floor in &project.floors {
            let zone_count = rng.random_range(2..=4);
            for i in 0..zone_count {
                zones.push(Zone::new(
                    Zone::zone_id(&floor.name, i),
                    floor.number,
                    rng.random_range(80..=180),
                    round2(rng.random_range(0.8..=1.2)),
                ));
            }
        }

        let teams = project
            .work_items
            .iter()
            .map(|item| {
                Team::new(
                    item.id.clone(),
                    item.name.clone(),
                    rng.random_range(3..=8),
                    round2(rng.random_range(0.9..=1.1)),
                )
            })
            .collect();

        Self::new(zones, teams, rng.random_range(5..=14))
    }

    /// Returns this chromosome with fresh metrics.
    pub fn evaluated(mut self) -> Self {
        self.metrics = Some(fitness::evaluate(&self.zones, &self.teams, self.takt_days));
        self
    }

    /// Marks the metrics stale.
    pub(crate) fn invalidate(&mut self) {
        self.metrics = None;
    }

    /// Whether metrics are present.
    pub fn is_evaluated(&self) -> bool {
        self.metrics.is_some()
    }

    /// Fitness, or `-inf` if unevaluated.
    pub fn fitness(&self) -> f64 {
        self.metrics.map_or(f64::NEG_INFINITY, |m| m.fitness)
    }

    /// Project span in days (0 if unevaluated).
    pub fn duration(&self) -> i64 {
        self.metrics.map_or(0, |m| m.duration)
    }

    /// Labor cost (0 if unevaluated).
    pub fn cost(&self) -> f64 {
        self.metrics.map_or(0.0, |m| m.cost)
    }

    /// Lays the plan out as a takt train.
    pub fn schedule(&self) -> TaktSchedule {
        TaktSchedule::build(&self.zones, &self.teams, self.takt_days)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
