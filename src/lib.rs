//! Takt-time planning for construction projects.
//!
//! Searches zone, crew and cadence assignments with a genetic algorithm and
//! derives named alternatives from the best plan found.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Project`, `Floor`, `WorkItem`, `Zone`,
//!   `Team`, `TaktSchedule`
//! - **`validation`**: Input integrity checks (blank names, duplicate ids)
//! - **`ga`**: Chromosome, fitness model, genetic operators, evolution engine
//! - **`scenario`**: Fast Track / Economical / Balanced variants
//! - **`optimizer`**: One-call entry point returning an `OptimizationResult`
//!
//! # Architecture
//!
//! The crate is a pure computation: a project description and a
//! configuration in, an optimization result out. Transport, persistence and
//! presentation belong to the caller. Randomness is always injected, so
//! seeded runs are reproducible.
//!
//! # References
//!
//! - Frandson, Berghede & Tommelein (2013), "Takt time planning for
//!   construction of exterior cladding"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

pub mod error;
pub mod ga;
pub mod models;
pub mod optimizer;
pub mod scenario;
pub mod validation;

pub use error::{TaktError, TaktResult};
pub use optimizer::{OptimizationResult, OptimizationStatistics, TaktOptimizer};
pub use scenario::{Scenario, ScenarioKind};
