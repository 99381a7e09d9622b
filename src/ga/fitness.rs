//! Takt plan fitness model.
//!
//! Scores a plan on four normalized criteria and combines them into a
//! single maximization fitness:
//!
//! | Criterion | Term | Weight |
//! |-----------|------|--------|
//! | Duration | `1 − duration / 365` | 0.35 |
//! | Cost | `1 − cost / 8 000 000` | 0.30 |
//! | Resource balance | `1 / (1 + σ(headcount))` | 0.20 |
//! | Risk | `1 − risk` | 0.15 |
//!
//! Duration and cost terms are not clamped: plans longer than a year or
//! above the cost ceiling score negative on that term.

use serde::{Deserialize, Serialize};

use crate::models::{Team, Zone};

pub const WEIGHT_DURATION: f64 = 0.35;
pub const WEIGHT_COST: f64 = 0.30;
pub const WEIGHT_BALANCE: f64 = 0.20;
pub const WEIGHT_RISK: f64 = 0.15;

/// Duration normalizer (days).
pub const MAX_DURATION_DAYS: f64 = 365.0;
/// Cost normalizer (currency units).
pub const MAX_COST: f64 = 8_000_000.0;

/// Daily labor rate (currency/person/day) for unlisted trades.
pub const DEFAULT_LABOR_RATE: f64 = 700.0;

const LABOR_RATES: &[(&str, f64)] = &[
    ("Elektrik Tesisati", 850.0),
    ("Siva", 650.0),
    ("Boya", 600.0),
    ("Seramik", 750.0),
    ("Asma Tavan", 700.0),
    ("Duvar Sivasi", 650.0),
    ("Sap", 600.0),
    ("Betonarme Kalibi", 800.0),
    ("Mekanik Tesisat", 900.0),
    ("Celik Dograma", 950.0),
];

/// Quality metrics of an evaluated plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanMetrics {
    /// Weighted fitness (higher = better).
    pub fitness: f64,
    /// Project span (days). Negative only for a plan with no zones and
    /// no crews.
    pub duration: i64,
    /// Total labor cost.
    pub cost: f64,
    /// Crew size balance in (0, 1].
    pub resource_balance: f64,
    /// Schedule risk in [0, 1].
    pub risk: f64,
}

/// Daily labor rate for a trade name.
///
/// Turkish letters are folded to ASCII before lookup, so `"Sıva"` and
/// `"Siva"` resolve to the same rate.
pub fn labor_rate(trade: &str) -> f64 {
    let key = fold_ascii(trade.trim());
    LABOR_RATES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, rate)| rate)
        .unwrap_or(DEFAULT_LABOR_RATE)
}

fn fold_ascii(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'ı' => 'i',
            'İ' => 'I',
            'ş' => 's',
            'Ş' => 'S',
            'ç' => 'c',
            'Ç' => 'C',
            'ğ' => 'g',
            'Ğ' => 'G',
            'ö' => 'o',
            'Ö' => 'O',
            'ü' => 'u',
            'Ü' => 'U',
            other => other,
        })
        .collect()
}

/// Flow time: crews pass zones with a one-zone stagger.
///
/// `(teams + zones − 1) × takt`. A plan with nothing in it spans `−takt`.
pub fn duration_days(team_count: usize, zone_count: usize, takt_days: u32) -> i64 {
    let stages = (team_count + zone_count) as i64 - 1;
    stages * i64::from(takt_days)
}

/// Labor cost: every crew is on the payroll for the full project span.
pub fn labor_cost(teams: &[Team], duration: i64) -> f64 {
    teams
        .iter()
        .map(|t| labor_rate(&t.name) * f64::from(t.headcount) * duration as f64)
        .sum()
}

/// Crew balance: `min(1, 1 / (1 + σ))` over headcounts.
///
/// Zero or one crew has σ = 0 and therefore balance 1.0.
pub fn resource_balance(teams: &[Team]) -> f64 {
    let sd = population_std_dev(teams.iter().map(|t| f64::from(t.headcount)));
    (1.0 / (1.0 + sd)).min(1.0)
}

/// Schedule risk from takt deviation, zone count and crew size deviation.
pub fn risk(takt_days: u32, zone_count: usize, teams: &[Team]) -> f64 {
    let takt_risk = (f64::from(takt_days) - 9.0).abs() / 10.0;
    let zone_risk = zone_count as f64 / 30.0;
    let mean_headcount = mean(teams.iter().map(|t| f64::from(t.headcount))).unwrap_or(5.0);
    let crew_risk = (mean_headcount - 5.0).abs() / 10.0;

    (0.4 * takt_risk + 0.3 * zone_risk + 0.3 * crew_risk).min(1.0)
}

/// Evaluates a plan. Pure: identical genes give bit-identical metrics.
pub fn evaluate(zones: &[Zone], teams: &[Team], takt_days: u32) -> PlanMetrics {
    let duration = duration_days(teams.len(), zones.len(), takt_days);
    let cost = labor_cost(teams, duration);
    let balance = resource_balance(teams);
    let risk = risk(takt_days, zones.len(), teams);

    let norm_duration = 1.0 - duration as f64 / MAX_DURATION_DAYS;
    let norm_cost = 1.0 - cost / MAX_COST;

    let fitness = WEIGHT_DURATION * norm_duration
        + WEIGHT_COST * norm_cost
        + WEIGHT_BALANCE * balance
        + WEIGHT_RISK * (1.0 - risk);

    PlanMetrics {
        fitness,
        duration,
        cost,
        resource_balance: balance,
        risk,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn population_std_dev(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let Some(m) = mean(values.clone()) else {
        return 0.0;
    };
    let var = mean(values.map(|v| (v - m) * (v - m))).unwrap_or(0.0);
    var.sqrt()
}
