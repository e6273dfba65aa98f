use chrono::{Days, NaiveDate};
use log::info;

use crate::config::{PlannerConfig, ScenarioFactors};
use crate::error::{PlannerError, Result};
use crate::models::TripRequest;
use crate::planner::costs::aggregate_costs;
use crate::planner::itinerary::build_itinerary;
use crate::planner::scenarios::{generate_scenarios, recommend};
use crate::planner::validation::validate_budget;
use crate::state::PlanState;

/// Date of day 1: `today` plus the configured lead time.
pub fn anchor_date(today: NaiveDate, lead_time_days: u32) -> Result<NaiveDate> {
    today
        .checked_add_days(Days::new(u64::from(lead_time_days)))
        .ok_or_else(|| {
            PlannerError::InvalidConfig(format!(
                "lead time of {} days from {} exceeds the calendar range",
                lead_time_days, today
            ))
        })
}

/// Run the full pipeline for one request.
///
/// Build, cost and validate, then either accept the plan or attach the
/// three alternatives. The result depends only on the arguments.
pub fn plan_trip(
    request: TripRequest,
    anchor: NaiveDate,
    config: &PlannerConfig,
) -> Result<PlanState> {
    info!(
        "planning {} days in {} (budget ${:.2})",
        request.duration_days(),
        request.destination(),
        request.budget_limit()
    );

    let itinerary = build_itinerary(&request, anchor)?;
    let cost_breakdown = aggregate_costs(&request, &itinerary, &config.pricing);
    let validation = validate_budget(cost_breakdown.total(), request.budget_limit());

    let state = PlanState::planned(request, itinerary, cost_breakdown, validation);
    Ok(resolve_budget(state, &config.scenarios))
}

/// Route a planned state: accept it, or generate and attach alternatives.
pub fn resolve_budget(state: PlanState, factors: &ScenarioFactors) -> PlanState {
    if state.validation().satisfied {
        return state.accept();
    }

    let scenarios = generate_scenarios(&state, factors);
    match recommend(&scenarios) {
        Some(recommendation) => {
            if let Some(scenario) = scenarios.get(recommendation.index) {
                info!(
                    "recommended {} at ${:.2}{}",
                    scenario.label,
                    scenario.estimated_cost,
                    if recommendation.still_over_budget {
                        " (still over budget)"
                    } else {
                        ""
                    }
                );
            }
            state.adjust(scenarios, recommendation)
        }
        // Unreachable with three templates; keep the plan unadjusted.
        None => state,
    }
}
