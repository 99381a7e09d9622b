//! Scenario derivation.
//!
//! Turns the best plan of a run into three presentable alternatives:
//!
//! | # | Kind | Takt | Crews |
//! |---|------|------|-------|
//! | 0 | Fast Track ("Hizli Tren") | −2 days, min 3 | +2 workers, no cap |
//! | 1 | Economical ("Ekonomik") | +2 days, max 20 | −1 worker, min 2 |
//! | 2 | Balanced ("Dengeli (Onerilen)") | unchanged | unchanged |
//!
//! The Fast Track variant may staff crews above the 12-worker bound the
//! search itself respects.

use serde::{Deserialize, Serialize};

use crate::ga::{TaktChromosome, MAX_TAKT_DAYS, MIN_TAKT_DAYS};
use crate::models::MIN_HEADCOUNT;

/// Index of the scenario consumers select by default.
pub const RECOMMENDED_INDEX: usize = 2;

/// Scenario variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Shorter takt, larger crews.
    FastTrack,
    /// Longer takt, smaller crews.
    Economical,
    /// The optimized plan as found.
    Balanced,
}

impl ScenarioKind {
    /// All kinds in output order.
    pub const ALL: [ScenarioKind; 3] = [Self::FastTrack, Self::Economical, Self::Balanced];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FastTrack => "Hizli Tren",
            Self::Economical => "Ekonomik",
            Self::Balanced => "Dengeli (Onerilen)",
        }
    }

    /// English display name.
    pub fn english_name(self) -> &'static str {
        match self {
            Self::FastTrack => "Fast Track",
            Self::Economical => "Economical",
            Self::Balanced => "Balanced",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Self::FastTrack => "Minimum sure, yuksek iscilik maliyeti",
            Self::Economical => "Minimum maliyet, uzun proje suresi",
            Self::Balanced => "Sure-maliyet-risk dengesi optimum",
        }
    }

    /// Applies this variant's edits to a copy of `plan` and re-evaluates it.
    pub fn apply(self, plan: &TaktChromosome) -> TaktChromosome {
        let mut variant = plan.clone();
        match self {
            Self::FastTrack => {
                variant.takt_days = variant.takt_days.saturating_sub(2).max(MIN_TAKT_DAYS);
                for team in &mut variant.teams {
                    team.headcount += 2;
                }
            }
            Self::Economical => {
                variant.takt_days = (variant.takt_days + 2).min(MAX_TAKT_DAYS);
                for team in &mut variant.teams {
                    team.headcount = team.headcount.saturating_sub(1).max(MIN_HEADCOUNT);
                }
            }
            Self::Balanced => {}
        }
        variant.evaluated()
    }
}

/// A labeled, evaluated plan variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Variant.
    pub kind: ScenarioKind,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// The evaluated plan.
    pub plan: TaktChromosome,
}

impl Scenario {
    /// Derives one scenario from a plan.
    pub fn derive(kind: ScenarioKind, plan: &TaktChromosome) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            plan: kind.apply(plan),
        }
    }
}

/// Derives Fast Track, Economical and Balanced scenarios, in that order.
pub fn generate_scenarios(best: &TaktChromosome) -> Vec<Scenario> {
    ScenarioKind::ALL
        .iter()
        .map(|&kind| Scenario::derive(kind, best))
        .collect()
}
