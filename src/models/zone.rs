//! Takt zone model.
//!
//! A zone is a spatial work area carved out of a floor. Crews pass
//! through zones one takt at a time.

use serde::{Deserialize, Serialize};

/// Smallest zone area a mutation may produce (m2).
pub const MIN_ZONE_AREA: u32 = 50;
/// Largest zone area a mutation may produce (m2).
pub const MAX_ZONE_AREA: u32 = 250;

/// A takt zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone identifier: `"<floor-name>-<letter>"`.
    pub id: String,
    /// Number of the floor this zone belongs to.
    pub floor_number: i32,
    /// Zone area (m2). Informational; not scored.
    pub area: u32,
    /// Work density multiplier in [0.8, 1.2].
    pub work_density: f64,
}

impl Zone {
    /// Creates a zone.
    pub fn new(id: impl Into<String>, floor_number: i32, area: u32, work_density: f64) -> Self {
        Self {
            id: id.into(),
            floor_number,
            area,
            work_density,
        }
    }

    /// Builds the zone id for the `index`-th zone of a floor (`0 → A`).
    pub fn zone_id(floor_name: &str, index: usize) -> String {
        let letter = char::from(b'A' + (index % 26) as u8);
        format!("{floor_name}-{letter}")
    }
}
