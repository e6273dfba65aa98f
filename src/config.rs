//! Planner configuration: price table, scenario discount factors, and date lead time.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PlannerError, Result};
use crate::planner::constants::*;

/// Per-trip pricing used by the cost aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(default = "default_flights")]
    pub flights_round_trip: f64,

    #[serde(default = "default_lodging")]
    pub lodging_per_night: f64,

    #[serde(default = "default_meals")]
    pub meals_per_day: f64,

    /// Fraction of the other categories charged as miscellaneous.
    #[serde(default = "default_misc_rate")]
    pub misc_rate: f64,
}

fn default_flights() -> f64 {
    DEFAULT_FLIGHTS_ROUND_TRIP
}

fn default_lodging() -> f64 {
    DEFAULT_LODGING_PER_NIGHT
}

fn default_meals() -> f64 {
    DEFAULT_MEALS_PER_DAY
}

fn default_misc_rate() -> f64 {
    DEFAULT_MISC_RATE
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            flights_round_trip: default_flights(),
            lodging_per_night: default_lodging(),
            meals_per_day: default_meals(),
            misc_rate: default_misc_rate(),
        }
    }
}

/// Discount factors for the scenario templates.
///
/// Discounts are fractions removed from a category: 0.3 keeps 70% of the cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioFactors {
    pub shorten_by_days: u32,
    pub min_duration_days: u32,

    pub budget_lodging_discount: f64,
    pub budget_activities_discount: f64,
    pub budget_meals_discount: f64,

    pub ultra_lodging_discount: f64,
    pub ultra_meals_discount: f64,
    pub ultra_activities_discount: f64,
    pub ultra_flights_discount: f64,
}

impl Default for ScenarioFactors {
    fn default() -> Self {
        Self {
            shorten_by_days: DEFAULT_SHORTEN_BY_DAYS,
            min_duration_days: DEFAULT_MIN_DURATION_DAYS,
            budget_lodging_discount: DEFAULT_BUDGET_LODGING_DISCOUNT,
            budget_activities_discount: DEFAULT_BUDGET_ACTIVITIES_DISCOUNT,
            budget_meals_discount: DEFAULT_BUDGET_MEALS_DISCOUNT,
            ultra_lodging_discount: DEFAULT_ULTRA_LODGING_DISCOUNT,
            ultra_meals_discount: DEFAULT_ULTRA_MEALS_DISCOUNT,
            ultra_activities_discount: DEFAULT_ULTRA_ACTIVITIES_DISCOUNT,
            ultra_flights_discount: DEFAULT_ULTRA_FLIGHTS_DISCOUNT,
        }
    }
}

impl ScenarioFactors {
    fn discounts(&self) -> [(&'static str, f64); 7] {
        [
            ("budget_lodging_discount", self.budget_lodging_discount),
            ("budget_activities_discount", self.budget_activities_discount),
            ("budget_meals_discount", self.budget_meals_discount),
            ("ultra_lodging_discount", self.ultra_lodging_discount),
            ("ultra_meals_discount", self.ultra_meals_discount),
            ("ultra_activities_discount", self.ultra_activities_discount),
            ("ultra_flights_discount", self.ultra_flights_discount),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub pricing: PriceTable,

    #[serde(default)]
    pub scenarios: ScenarioFactors,

    /// Days between today and day 1 when no start date is supplied.
    #[serde(default = "default_lead_time")]
    pub lead_time_days: u32,
}

fn default_lead_time() -> u32 {
    DEFAULT_LEAD_TIME_DAYS
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            pricing: PriceTable::default(),
            scenarios: ScenarioFactors::default(),
            lead_time_days: default_lead_time(),
        }
    }
}

impl PlannerConfig {
    /// Load config from file, or use defaults.
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::from_file(config_path);
        }

        let default_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("travel_planner").join("config.yml")),
            Some(PathBuf::from("travel_planner.yml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first_existing(&default_paths)
    }

    /// Load the first candidate that exists, or fall back to defaults.
    fn load_first_existing(candidates: &[PathBuf]) -> Result<Self> {
        for path in candidates {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        debug!("PlannerConfig::load: no config file found, using defaults");
        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!("PlannerConfig::from_file: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: PlannerConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values that would make the cost model meaningless.
    pub fn validate(&self) -> Result<()> {
        let prices = [
            ("flights_round_trip", self.pricing.flights_round_trip),
            ("lodging_per_night", self.pricing.lodging_per_night),
            ("meals_per_day", self.pricing.meals_per_day),
        ];
        for (name, value) in prices {
            if !value.is_finite() || value < 0.0 {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be a non-negative amount (got {})",
                    name, value
                )));
            }
        }

        let fractions = std::iter::once(("misc_rate", self.pricing.misc_rate))
            .chain(self.scenarios.discounts());
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be between 0 and 1 (got {})",
                    name, value
                )));
            }
        }

        if self.scenarios.min_duration_days == 0 {
            return Err(PlannerError::InvalidConfig(
                "min_duration_days must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
