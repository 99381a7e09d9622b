//! GA-based takt plan optimization.
//!
//! # Encoding
//!
//! A chromosome is a whole takt plan: per-floor zones, one crew per work
//! item, and a single takt duration. See [`TaktChromosome`].
//!
//! # Submodules
//!
//! - [`fitness`]: Deterministic scoring (duration, cost, balance, risk)
//! - [`operators`]: Tournament selection, crossover, mutation
//! - [`engine`]: Explicit-state generational loop
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection, and the
//!   Effects of Noise"

mod chromosome;
mod config;
pub mod engine;
pub mod fitness;
pub mod operators;
mod population;

pub use chromosome::{TaktChromosome, MAX_TAKT_DAYS, MIN_TAKT_DAYS};
pub use config::TaktConfig;
pub use engine::{evolve, EvolutionHistory, EvolutionPhase, EvolutionState};
pub use fitness::PlanMetrics;
pub use population::Population;
