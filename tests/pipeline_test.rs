use assert_float_eq::*;
use chrono::{DateTime, NaiveDate};

use travel_planner_rs::config::PlannerConfig;
use travel_planner_rs::models::{ScenarioKind, TripRequest};
use travel_planner_rs::planner::plan_trip;
use travel_planner_rs::state::{plan_to_json, PlanPhase, PlanState};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 26).unwrap()
}

fn plan(destination: &str, days: i64, budget: f64) -> PlanState {
    let request = TripRequest::new(destination, days, budget).unwrap();
    plan_trip(request, anchor(), &PlannerConfig::default()).unwrap()
}

#[test]
fn test_one_day_per_requested_day_with_consecutive_dates() {
    for days in [1, 2, 7, 30, 75] {
        let state = plan("Kyoto", days, 10_000.0);
        let itinerary = state.itinerary();

        assert_eq!(itinerary.len(), days as usize);
        assert_eq!(itinerary.days()[0].date, anchor());
        for pair in itinerary.days().windows(2) {
            assert_eq!(pair[1].index, pair[0].index + 1);
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }
}

#[test]
fn test_daily_cost_equals_activity_sum() {
    let state = plan("Kyoto", 5, 10_000.0);
    for day in state.itinerary().days() {
        let summed: f64 = day.activities.iter().map(|a| a.cost).sum();
        assert_eq!(day.daily_cost(), summed);
    }
}

#[test]
fn test_activities_category_matches_itinerary() {
    let state = plan("Kyoto", 9, 10_000.0);
    assert_eq!(
        state.cost_breakdown().activities,
        state.itinerary().activities_total()
    );
}

#[test]
fn test_total_equals_category_sum() {
    for days in [1, 3, 7, 14] {
        let state = plan("Kyoto", days, 1000.0);
        let summed: f64 = state.cost_breakdown().iter().map(|(_, v)| v).sum();
        assert_float_absolute_eq!(state.total_cost(), summed, 1e-9);
        assert_eq!(state.validation().total_cost, state.total_cost());
    }
}

#[test]
fn test_satisfied_iff_within_budget() {
    for (days, budget) in [(2, 5000.0), (2, 1000.0), (7, 4077.0), (7, 4076.99), (10, 500.0)] {
        let state = plan("Kyoto", days, budget);
        let validation = state.validation();

        assert_eq!(
            validation.satisfied,
            (validation.total_cost * 100.0).round() <= (budget * 100.0).round()
        );
        if validation.satisfied {
            assert_eq!(validation.overage_amount, 0.0);
            assert_eq!(state.phase(), PlanPhase::Accepted);
        } else {
            assert_eq!(validation.overage_amount, validation.total_cost - budget);
            assert!(matches!(state.phase(), PlanPhase::Adjusted { .. }));
        }
    }
}

#[test]
fn test_paris_week_on_small_budget() {
    let state = plan("Paris", 7, 1000.0);
    let validation = state.validation();

    assert!(!validation.satisfied);
    assert_float_absolute_eq!(validation.total_cost, 4077.0, 1e-6);
    assert_float_absolute_eq!(validation.overage_amount, 3077.0, 1e-6);
    assert_eq!(validation.overage_percent, 307.7);

    let scenarios = state.scenarios();
    assert_eq!(scenarios.len(), 3);
    assert!(scenarios[2].estimated_cost < 1000.0);

    let recommended = state.recommended_scenario().unwrap();
    assert_eq!(recommended.kind, ScenarioKind::UltraBudget);
    assert!(!state.still_over_budget());
}

#[test]
fn test_small_overage_still_generates_scenarios() {
    // 3 days cost 2025.00 against a 2000.00 ceiling.
    let state = plan("Barcelona", 3, 2000.0);
    let validation = state.validation();

    assert!(!validation.satisfied);
    assert_float_absolute_eq!(validation.overage_amount, 25.0, 1e-6);
    assert_eq!(validation.overage_percent, 1.3);
    assert_eq!(state.scenarios().len(), 3);
}

#[test]
fn test_scenarios_in_fixed_order() {
    let state = plan("Paris", 4, 300.0);
    let labels: Vec<&str> = state.scenarios().iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Shorter Duration",
            "Budget-Friendly Experience",
            "Ultra-Budget Adventure"
        ]
    );
}

#[test]
fn test_shorter_duration_never_lengthens_or_raises_flights() {
    for days in [1, 2, 3, 8, 40] {
        let state = plan("Paris", days, 100.0);
        let shorter = &state.scenarios()[0];

        assert_eq!(shorter.kind, ScenarioKind::ShorterDuration);
        assert!(shorter.duration_days <= state.request().duration_days());
        assert!(shorter.duration_days >= 1);
        assert!(shorter.cost_breakdown.flights <= state.cost_breakdown().flights);
    }
}

#[test]
fn test_recommends_cheapest_when_nothing_fits() {
    let state = plan("Paris", 7, 50.0);

    assert!(state.scenarios().iter().all(|s| !s.within_budget));
    assert!(state.still_over_budget());

    let cheapest = state
        .scenarios()
        .iter()
        .map(|s| s.estimated_cost)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(state.recommended_scenario().unwrap().estimated_cost, cheapest);
}

#[test]
fn test_pipeline_is_deterministic() {
    let timestamp = DateTime::parse_from_rfc3339("2026-10-19T12:00:00+00:00").unwrap();

    let first = plan("Lisbon", 6, 900.0);
    let second = plan("Lisbon", 6, 900.0);

    assert_eq!(first, second);
    assert_eq!(
        plan_to_json(&first, timestamp).unwrap(),
        plan_to_json(&second, timestamp).unwrap()
    );
}

#[test]
fn test_long_trip_is_not_clamped() {
    let state = plan("Patagonia", 90, 1000.0);
    assert_eq!(state.itinerary().len(), 90);
    assert!(state.total_cost() > 90.0 * 235.0);
}
