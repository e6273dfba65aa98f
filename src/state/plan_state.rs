use log::warn;

use crate::models::{CostBreakdown, Itinerary, Scenario, TripRequest, ValidationResult};
use crate::planner::scenarios::Recommendation;

/// Where a plan is in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanPhase {
    /// Built, costed and validated; routing not yet decided.
    Planned,
    /// Within budget; the initial plan is the result.
    Accepted,
    /// Over budget; alternatives were generated.
    Adjusted {
        recommended: usize,
        still_over_budget: bool,
    },
}

/// Aggregate threaded through the planning pipeline.
///
/// Only `accept` and `adjust` change a plan, and only while it is `Planned`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanState {
    request: TripRequest,
    itinerary: Itinerary,
    cost_breakdown: CostBreakdown,
    validation: ValidationResult,
    scenarios: Vec<Scenario>,
    phase: PlanPhase,
}

impl PlanState {
    pub fn planned(
        request: TripRequest,
        itinerary: Itinerary,
        cost_breakdown: CostBreakdown,
        validation: ValidationResult,
    ) -> Self {
        Self {
            request,
            itinerary,
            cost_breakdown,
            validation,
            scenarios: Vec::new(),
            phase: PlanPhase::Planned,
        }
    }

    /// Finalize with the initial plan as the result.
    pub fn accept(mut self) -> Self {
        if self.phase != PlanPhase::Planned {
            warn!("PlanState::accept: plan already finalized as {:?}", self.phase);
            return self;
        }
        self.phase = PlanPhase::Accepted;
        self
    }

    /// Finalize with generated alternatives and the chosen recommendation.
    pub fn adjust(mut self, scenarios: Vec<Scenario>, recommendation: Recommendation) -> Self {
        if self.phase != PlanPhase::Planned {
            warn!("PlanState::adjust: plan already finalized as {:?}", self.phase);
            return self;
        }
        if recommendation.index >= scenarios.len() {
            warn!(
                "PlanState::adjust: recommendation {} out of range for {} scenarios",
                recommendation.index,
                scenarios.len()
            );
            return self;
        }
        self.scenarios = scenarios;
        self.phase = PlanPhase::Adjusted {
            recommended: recommendation.index,
            still_over_budget: recommendation.still_over_budget,
        };
        self
    }

    pub fn request(&self) -> &TripRequest {
        &self.request
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn cost_breakdown(&self) -> &CostBreakdown {
        &self.cost_breakdown
    }

    pub fn total_cost(&self) -> f64 {
        self.cost_breakdown.total()
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn phase(&self) -> PlanPhase {
        self.phase
    }

    pub fn is_finalized(&self) -> bool {
        self.phase != PlanPhase::Planned
    }

    pub fn recommended_index(&self) -> Option<usize> {
        match self.phase {
            PlanPhase::Adjusted { recommended, .. } => Some(recommended),
            _ => None,
        }
    }

    pub fn recommended_scenario(&self) -> Option<&Scenario> {
        self.recommended_index().and_then(|i| self.scenarios.get(i))
    }

    /// True when even the recommended alternative misses the budget.
    pub fn still_over_budget(&self) -> bool {
        matches!(
            self.phase,
            PlanPhase::Adjusted {
                still_over_budget: true,
                ..
            }
        )
    }
}
