//! Generation buffer.
//!
//! Each generation owns a freshly built `Population`; the previous one is
//! dropped wholesale when the engine steps.

use serde::{Deserialize, Serialize};

use super::TaktChromosome;

/// Chromosomes of one generation, best first once sorted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    members: Vec<TaktChromosome>,
}

impl Population {
    /// Wraps evaluated chromosomes and sorts them by descending fitness.
    pub fn sorted(members: Vec<TaktChromosome>) -> Self {
        let mut population = Self { members };
        population.sort();
        population
    }

    /// Sorts by descending fitness. Stable: equal fitness keeps insertion order.
    pub fn sort(&mut self) {
        self.members
            .sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
    }

    /// Fittest chromosome.
    pub fn best(&self) -> Option<&TaktChromosome> {
        self.members.first()
    }

    /// The `n` fittest chromosomes (fewer if the population is smaller).
    pub fn top(&self, n: usize) -> &[TaktChromosome] {
        &self.members[..n.min(self.members.len())]
    }

    /// Mean fitness (0.0 for an empty population).
    pub fn mean_fitness(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        self.members.iter().map(TaktChromosome::fitness).sum::<f64>() / self.members.len() as f64
    }

    /// Whether members are in non-increasing fitness order.
    pub fn is_sorted(&self) -> bool {
        self.members
            .windows(2)
            .all(|w| w[0].fitness() >= w[1].fitness())
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All chromosomes, best first.
    pub fn members(&self) -> &[TaktChromosome] {
        &self.members
    }

    /// Iterates over the chromosomes, best first.
    pub fn iter(&self) -> std::slice::Iter<'_, TaktChromosome> {
        self.members.iter()
    }

    /// Consumes the population.
    pub fn into_members(self) -> Vec<TaktChromosome> {
        self.members
    }
}
