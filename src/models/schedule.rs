//! Takt schedule (takt train) model.
//!
//! Lays a plan out on the calendar: crew `t` enters zone `z` at day
//! `(t + z) × takt` and leaves one takt later. Crews follow each other
//! with a one-zone stagger, so the last crew leaves the last zone at
//! `(teams + zones − 1) × takt`.
//!
//! # Reference
//! Frandson, Berghede & Tommelein (2013), "Takt time planning for construction
//! of exterior cladding"

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Team, Zone};

/// A crew-zone-time assignment.
///
/// Days are 0-based; `end_day` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Crew id.
    pub team_id: String,
    /// Zone id.
    pub zone_id: String,
    /// First working day in the zone.
    pub start_day: u32,
    /// Day the crew hands the zone over.
    pub end_day: u32,
    /// Crew size while in the zone.
    pub headcount: u32,
}

/// A complete takt train for one plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaktSchedule {
    /// Takt duration (days per zone).
    pub takt_days: u32,
    /// Crew-zone assignments, crew-major.
    pub assignments: Vec<Assignment>,
}

impl Assignment {
    /// Days spent in the zone.
    #[inline]
    pub fn duration_days(&self) -> u32 {
        self.end_day - self.start_day
    }

    /// Person-days spent in the zone.
    #[inline]
    pub fn person_days(&self) -> u64 {
        u64::from(self.duration_days()) * u64::from(self.headcount)
    }
}

impl TaktSchedule {
    /// Builds the takt train for the given zones and crews.
    pub fn build(zones: &[Zone], teams: &[Team], takt_days: u32) -> Self {
        let mut assignments = Vec::with_capacity(zones.len() * teams.len());
        for (t, team) in teams.iter().enumerate() {
            for (z, zone) in zones.iter().enumerate() {
                let start_day = (t + z) as u32 * takt_days;
                assignments.push(Assignment {
                    team_id: team.id.clone(),
                    zone_id: zone.id.clone(),
                    start_day,
                    end_day: start_day + takt_days,
                    headcount: team.headcount,
                });
            }
        }
        Self {
            takt_days,
            assignments,
        }
    }

    /// Makespan: latest hand-over day across all assignments.
    pub fn makespan_days(&self) -> u32 {
        self.assignments.iter().map(|a| a.end_day).max().unwrap_or(0)
    }

    /// Returns all assignments of a crew.
    pub fn assignments_for_team(&self, team_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.team_id == team_id)
            .collect()
    }

    /// Returns all assignments in a zone, in crew order.
    pub fn assignments_for_zone(&self, zone_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.zone_id == zone_id)
            .collect()
    }

    /// Fraction of the makespan a crew spends working.
    ///
    /// Returns `None` for an empty schedule.
    pub fn team_utilization(&self, team_id: &str) -> Option<f64> {
        let horizon = self.makespan_days();
        if horizon == 0 {
            return None;
        }
        let busy: u32 = self
            .assignments_for_team(team_id)
            .iter()
            .map(|a| a.duration_days())
            .sum();
        Some(f64::from(busy) / f64::from(horizon))
    }

    /// Utilization of every crew that has assignments.
    pub fn all_utilizations(&self) -> HashMap<String, f64> {
        let horizon = self.makespan_days();
        if horizon == 0 {
            return HashMap::new();
        }

        let mut busy: HashMap<String, u32> = HashMap::new();
        for a in &self.assignments {
            *busy.entry(a.team_id.clone()).or_insert(0) += a.duration_days();
        }

        busy.into_iter()
            .map(|(id, days)| (id, f64::from(days) / f64::from(horizon)))
            .collect()
    }

    /// Largest number of workers on site on any single day.
    pub fn peak_headcount(&self) -> u32 {
        (0..self.makespan_days())
            .map(|day| {
                self.assignments
                    .iter()
                    .filter(|a| a.start_day <= day && day < a.end_day)
                    .map(|a| a.headcount)
                    .sum::<u32>()
            })
            .max()
            .unwrap_or(0)
    }

    /// Total person-days over all assignments.
    pub fn total_person_days(&self) -> u64 {
        self.assignments.iter().map(Assignment::person_days).sum()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
