use log::info;

use crate::models::ValidationResult;
use crate::planner::constants::round_to;

/// Compare a total against the budget ceiling.
///
/// The comparison runs on the two-decimal values shown to the user, so a
/// total that displays as equal to the budget is within it. Overage is kept
/// at full precision; the percentage is rounded to one decimal.
pub fn validate_budget(total_cost: f64, budget_limit: f64) -> ValidationResult {
    let satisfied = round_to(total_cost, 2) <= round_to(budget_limit, 2);

    let (overage_amount, overage_percent) = if satisfied {
        (0.0, 0.0)
    } else {
        let overage = total_cost - budget_limit;
        (overage, round_to(overage / budget_limit * 100.0, 1))
    };

    if satisfied {
        info!(
            "budget satisfied: ${:.2} <= ${:.2}",
            total_cost, budget_limit
        );
    } else {
        info!(
            "budget exceeded by ${:.2} ({:.1}% over ${:.2})",
            overage_amount, overage_percent, budget_limit
        );
    }

    ValidationResult {
        total_cost,
        budget_limit,
        satisfied,
        overage_amount,
        overage_percent,
    }
}
