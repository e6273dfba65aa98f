use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Activity, CostBreakdown, Day, Itinerary, Scenario, ValidationResult};
use crate::planner::constants::round_to;
use crate::state::PlanState;

/// One itinerary day as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u32,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
    pub daily_cost: f64,
}

impl From<&Day> for DayRecord {
    fn from(day: &Day) -> Self {
        Self {
            day: day.index,
            date: day.date,
            activities: day.activities.clone(),
            daily_cost: day.daily_cost(),
        }
    }
}

/// The persisted JSON document for a finalized plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub destination: String,
    pub duration_days: u32,
    pub itinerary: Vec<DayRecord>,
    pub cost_breakdown: CostBreakdown,
    pub total_cost: f64,
    pub budget_limit: f64,
    pub validation: ValidationResult,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_scenarios: Option<Vec<Scenario>>,

    /// Label of the recommended scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_scenario: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub still_over_budget: Option<bool>,

    pub timestamp: DateTime<FixedOffset>,
}

impl SavedPlan {
    pub fn from_state(state: &PlanState, timestamp: DateTime<FixedOffset>) -> Self {
        let generated = !state.scenarios().is_empty();

        Self {
            destination: state.request().destination().to_string(),
            duration_days: state.request().duration_days(),
            itinerary: state.itinerary().days().iter().map(DayRecord::from).collect(),
            cost_breakdown: *state.cost_breakdown(),
            total_cost: round_to(state.total_cost(), 2),
            budget_limit: state.request().budget_limit(),
            validation: *state.validation(),
            alternative_scenarios: generated.then(|| state.scenarios().to_vec()),
            recommended_scenario: state.recommended_scenario().map(|s| s.label.clone()),
            still_over_budget: generated.then(|| state.still_over_budget()),
            timestamp,
        }
    }

    /// Rebuild the day list for rendering.
    pub fn to_itinerary(&self) -> Itinerary {
        Itinerary::new(
            self.itinerary
                .iter()
                .map(|record| Day {
                    index: record.day,
                    date: record.date,
                    activities: record.activities.clone(),
                })
                .collect(),
        )
    }

    /// Position of the recommended scenario within `alternative_scenarios`.
    pub fn recommended_index(&self) -> Option<usize> {
        let label = self.recommended_scenario.as_deref()?;
        self.alternative_scenarios
            .as_ref()?
            .iter()
            .position(|s| s.label == label)
    }
}

/// Default file name: `travel_plan_<destination>_<N>days.json`.
///
/// Characters other than ASCII letters, digits, `-` and `_` in the
/// destination become `_`.
pub fn plan_file_name(destination: &str, duration_days: u32) -> String {
    let safe: String = destination
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("travel_plan_{}_{}days.json", safe, duration_days)
}

/// Serialize a plan to pretty JSON.
pub fn plan_to_json(state: &PlanState, timestamp: DateTime<FixedOffset>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SavedPlan::from_state(state, timestamp))?)
}

/// Save a plan as JSON.
///
/// The plan is only borrowed, so a failed write leaves it usable for a retry.
pub fn save_plan<P: AsRef<Path>>(
    path: P,
    state: &PlanState,
    timestamp: DateTime<FixedOffset>,
) -> Result<()> {
    let json = plan_to_json(state, timestamp)?;
    fs::write(&path, json)?;
    info!("saved plan to {}", path.as_ref().display());
    Ok(())
}

/// Load a plan previously written by `save_plan`.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<SavedPlan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write the alternative scenarios to a CSV file.
pub fn write_scenarios_csv<P: AsRef<Path>>(path: P, state: &PlanState) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "scenario",
        "duration_days",
        "estimated_cost",
        "savings",
        "within_budget",
        "recommended",
    ])?;

    let recommended = state.recommended_index();
    for (i, scenario) in state.scenarios().iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            scenario.label.clone(),
            scenario.duration_days.to_string(),
            format!("{:.2}", scenario.estimated_cost),
            format!("{:.2}", scenario.savings),
            scenario.within_budget.to_string(),
            (recommended == Some(i)).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::models::TripRequest;
    use crate::planner::plan_trip;
    use tempfile::NamedTempFile;

    fn timestamp() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2026-10-19T09:30:00+02:00").unwrap()
    }

    fn plan(days: i64, budget: f64) -> PlanState {
        let request = TripRequest::new("Paris", days, budget).unwrap();
        let anchor = NaiveDate::from_ymd_opt(2026, 10, 26).unwrap();
        plan_trip(request, anchor, &PlannerConfig::default()).unwrap()
    }

    #[test]
    fn test_plan_file_name() {
        assert_eq!(plan_file_name("Paris", 7), "travel_plan_Paris_7days.json");
        assert_eq!(
            plan_file_name("New York/NYC", 3),
            "travel_plan_New_York_NYC_3days.json"
        );
    }

    #[test]
    fn test_json_fields() {
        let json = plan_to_json(&plan(2, 800.0), timestamp()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["itinerary"].as_array().unwrap().len(), 2);
        assert_eq!(value["itinerary"][0]["day"], 1);
        assert_eq!(value["itinerary"][0]["date"], "2026-10-26");
        assert_eq!(value["itinerary"][0]["activities"][0]["time"], "08:00");
        assert_eq!(
            value["itinerary"][0]["activities"][0]["activity"],
            "Breakfast at hotel"
        );
        assert_eq!(value["itinerary"][0]["daily_cost"], 235.0);
        assert_eq!(value["cost_breakdown"]["flights"], 450.0);
        assert_eq!(value["budget_limit"], 800.0);
        assert_eq!(value["timestamp"], "2026-10-19T09:30:00+02:00");
        assert!(value.get("total_cost").is_some());
    }

    #[test]
    fn test_scenarios_only_when_generated() {
        let accepted = plan_to_json(&plan(2, 5000.0), timestamp()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&accepted).unwrap();
        assert!(value.get("alternative_scenarios").is_none());
        assert!(value.get("recommended_scenario").is_none());

        let adjusted = plan_to_json(&plan(7, 1000.0), timestamp()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&adjusted).unwrap();
        assert_eq!(value["alternative_scenarios"].as_array().unwrap().len(), 3);
        assert_eq!(
            value["alternative_scenarios"][0]["scenario"],
            "Shorter Duration"
        );
        assert_eq!(value["recommended_scenario"], "Ultra-Budget Adventure");
    }

    #[test]
    fn test_save_and_load() {
        let state = plan(7, 1000.0);
        let file = NamedTempFile::new().unwrap();

        save_plan(file.path(), &state, timestamp()).unwrap();
        let saved = load_plan(file.path()).unwrap();

        assert_eq!(saved.destination, "Paris");
        assert_eq!(saved.duration_days, 7);
        assert_eq!(saved.timestamp, timestamp());
        assert!((saved.total_cost - state.total_cost()).abs() < 0.01);
        assert_eq!(saved.to_itinerary(), *state.itinerary());
        assert_eq!(saved.alternative_scenarios.as_ref().map(Vec::len), Some(3));
        assert_eq!(saved.recommended_index(), state.recommended_index());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let state = plan(2, 800.0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plan.json");

        assert!(save_plan(&path, &state, timestamp()).is_err());
        // The in-memory plan is untouched and can still be saved elsewhere.
        assert!(save_plan(dir.path().join("plan.json"), &state, timestamp()).is_ok());
    }

    #[test]
    fn test_scenarios_csv() {
        let state = plan(7, 1000.0);
        let file = NamedTempFile::new().unwrap();
        write_scenarios_csv(file.path(), &state).unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "Shorter Duration");
        assert_eq!(&rows[2][1], "Ultra-Budget Adventure");
        assert_eq!(&rows[2][6], "true");
        assert_eq!(&rows[0][6], "false");
    }
}
