use log::{debug, info, warn};

use crate::config::ScenarioFactors;
use crate::models::{CostBreakdown, Scenario, ScenarioKind};
use crate::planner::constants::round_to;
use crate::state::PlanState;

/// Which scenario to recommend and whether it still misses the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub index: usize,
    pub still_over_budget: bool,
}

impl ScenarioKind {
    /// Derive this variant from a validated plan.
    pub fn apply(self, state: &PlanState, factors: &ScenarioFactors) -> Scenario {
        let original = state.cost_breakdown();
        let duration = state.request().duration_days();

        let (duration_days, cost_breakdown, description) = match self {
            ScenarioKind::ShorterDuration => shorter_duration(original, duration, factors),
            ScenarioKind::BudgetFriendly => (
                duration,
                budget_friendly(original, factors),
                "Maintain full duration but reduce premium activities".to_string(),
            ),
            ScenarioKind::UltraBudget => (
                duration,
                ultra_budget(original, factors),
                "Minimal costs with local travel focus".to_string(),
            ),
        };

        let estimated_cost = cost_breakdown.total();
        let savings = state.validation().total_cost - estimated_cost;

        if estimated_cost < 0.0 || savings < 0.0 {
            warn!(
                "{}: degenerate estimate ${:.2} (savings ${:.2})",
                self.label(),
                estimated_cost,
                savings
            );
        }

        Scenario {
            kind: self,
            label: self.label().to_string(),
            description,
            duration_days,
            cost_breakdown,
            estimated_cost,
            savings,
            adjustments: self.adjustments().iter().map(|s| s.to_string()).collect(),
            within_budget: round_to(estimated_cost, 2)
                <= round_to(state.request().budget_limit(), 2),
        }
    }
}

/// Drop days from the trip; everything but flights scales with the new length.
fn shorter_duration(
    original: &CostBreakdown,
    duration: u32,
    factors: &ScenarioFactors,
) -> (u32, CostBreakdown, String) {
    let reduced = duration
        .saturating_sub(factors.shorten_by_days)
        .max(factors.min_duration_days)
        .min(duration);
    let ratio = f64::from(reduced) / f64::from(duration);

    let breakdown = CostBreakdown {
        flights: original.flights,
        accommodation: original.accommodation * ratio,
        meals: original.meals * ratio,
        activities: original.activities * ratio,
        miscellaneous: original.miscellaneous * ratio,
    };

    let description = if reduced < duration {
        format!("Reduce trip from {} to {} days", duration, reduced)
    } else {
        format!("Keep the trip at {} days, the shortest allowed", duration)
    };

    (reduced, breakdown, description)
}

fn budget_friendly(original: &CostBreakdown, factors: &ScenarioFactors) -> CostBreakdown {
    CostBreakdown {
        flights: original.flights,
        accommodation: original.accommodation * (1.0 - factors.budget_lodging_discount),
        meals: original.meals * (1.0 - factors.budget_meals_discount),
        activities: original.activities * (1.0 - factors.budget_activities_discount),
        miscellaneous: original.miscellaneous,
    }
}

fn ultra_budget(original: &CostBreakdown, factors: &ScenarioFactors) -> CostBreakdown {
    let mut breakdown = CostBreakdown {
        flights: original.flights * (1.0 - factors.ultra_flights_discount),
        accommodation: original.accommodation * (1.0 - factors.ultra_lodging_discount),
        meals: original.meals * (1.0 - factors.ultra_meals_discount),
        activities: original.activities * (1.0 - factors.ultra_activities_discount),
        miscellaneous: 0.0,
    };

    // Miscellaneous follows the subtotal down.
    let original_subtotal = original.subtotal();
    breakdown.miscellaneous = if original_subtotal > 0.0 {
        original.miscellaneous * (breakdown.subtotal() / original_subtotal)
    } else {
        original.miscellaneous
    };

    breakdown
}

/// Produce the three scenarios in presentation order.
pub fn generate_scenarios(state: &PlanState, factors: &ScenarioFactors) -> Vec<Scenario> {
    let scenarios: Vec<Scenario> = ScenarioKind::ALL
        .into_iter()
        .map(|kind| kind.apply(state, factors))
        .collect();

    for scenario in &scenarios {
        debug!(
            "scenario {}: ${:.2} saves ${:.2} within_budget={}",
            scenario.label, scenario.estimated_cost, scenario.savings, scenario.within_budget
        );
    }
    info!("generated {} alternative scenarios", scenarios.len());

    scenarios
}

/// Pick the first scenario within budget, else the cheapest (earliest on ties).
pub fn recommend(scenarios: &[Scenario]) -> Option<Recommendation> {
    if let Some(index) = scenarios.iter().position(|s| s.within_budget) {
        return Some(Recommendation {
            index,
            still_over_budget: false,
        });
    }

    let mut cheapest: Option<(usize, f64)> = None;
    for (index, scenario) in scenarios.iter().enumerate() {
        match cheapest {
            Some((_, cost)) if scenario.estimated_cost >= cost => {}
            _ => cheapest = Some((index, scenario.estimated_cost)),
        }
    }

    cheapest.map(|(index, _)| Recommendation {
        index,
        still_over_budget: true,
    })
}
