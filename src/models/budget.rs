use serde::{Deserialize, Serialize};

/// Outcome of checking a total cost against the budget ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub total_cost: f64,
    pub budget_limit: f64,
    pub satisfied: bool,
    /// `total_cost - budget_limit` when over budget, else 0.
    pub overage_amount: f64,
    /// Overage as a percentage of the budget, one decimal place.
    pub overage_percent: f64,
}
