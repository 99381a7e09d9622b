//! Project (input) model.
//!
//! A project is the building description the planner works from: an
//! ordered list of floors and an ordered list of work items (trades).
//! Only floor names/numbers and work-item ids/names drive the search;
//! quantities are carried for the surrounding system.
//!
//! Deserialization also accepts the field names used by the original
//! project payloads (`katlar`, `kat_adi`, `kat_no`, `is_kalemleri`, `isim`).

use serde::{Deserialize, Deserializer, Serialize};

/// A construction project to be planned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Floors in building order.
    #[serde(default, alias = "katlar")]
    pub floors: Vec<Floor>,
    /// Work items (one crew each) in execution order.
    #[serde(default, alias = "is_kalemleri")]
    pub work_items: Vec<WorkItem>,
}

/// A building floor. Each floor is split into 2-4 takt zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    /// Floor name, used as the zone id prefix.
    #[serde(alias = "kat_adi")]
    pub name: String,
    /// Floor number.
    #[serde(alias = "kat_no")]
    pub number: i32,
    /// Floor elevation (m). Not used by the planner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

/// A work item (trade) executed by one crew across all zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Work item identifier. Accepts JSON strings or integers.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Trade name (e.g., "Siva", "Boya"). Drives the labor rate.
    #[serde(alias = "isim")]
    pub name: String,
    /// Planned quantity. Not used by the planner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Quantity unit (e.g., "m2"). Not used by the planner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Project {
    /// Creates an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a floor.
    pub fn with_floor(mut self, name: impl Into<String>, number: i32) -> Self {
        self.floors.push(Floor::new(name, number));
        self
    }

    /// Adds a work item.
    pub fn with_work_item(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.work_items.push(WorkItem::new(id, name));
        self
    }

    /// Number of floors.
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Number of work items (= crews per plan).
    pub fn work_item_count(&self) -> usize {
        self.work_items.len()
    }
}

impl Floor {
    /// Creates a floor.
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
            elevation: None,
        }
    }

    /// Sets the elevation.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }
}

impl WorkItem {
    /// Creates a work item.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }

    /// Sets the planned quantity and its unit.
    pub fn with_quantity(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.quantity = Some(quantity);
        self.unit = Some(unit.into());
        self
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}
