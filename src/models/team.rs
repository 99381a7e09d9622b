//! Crew (team) model.
//!
//! One crew is assigned to each work item and moves through every zone
//! in order. Headcount is the only crew gene that affects cost and balance.

use serde::{Deserialize, Serialize};

/// Smallest crew the search may produce.
pub const MIN_HEADCOUNT: u32 = 2;
/// Largest crew the search may produce (scenario overrides excepted).
pub const MAX_HEADCOUNT: u32 = 12;

/// A crew assigned to one work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Work item id this crew executes.
    pub id: String,
    /// Trade name. Drives the labor rate.
    pub name: String,
    /// Number of workers.
    pub headcount: u32,
    /// Productivity multiplier in [0.9, 1.1]. Informational; not scored.
    pub productivity: f64,
}

impl Team {
    /// Creates a team.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        headcount: u32,
        productivity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            headcount,
            productivity,
        }
    }
}
