use std::borrow::Cow;

use crate::models::{CostBreakdown, Itinerary, Scenario, ValidationResult};
use crate::state::{PlanState, SavedPlan};

/// Everything a report needs, borrowed from a live or saved plan.
///
/// A saved plan stores days as records, so its itinerary is rebuilt and owned.
struct ReportView<'a> {
    title: String,
    itinerary: Cow<'a, Itinerary>,
    cost_breakdown: &'a CostBreakdown,
    total_cost: f64,
    validation: &'a ValidationResult,
    scenarios: &'a [Scenario],
    recommended: Option<usize>,
    still_over_budget: bool,
}

/// Markdown table with one row per day.
pub fn format_itinerary_table(itinerary: &Itinerary) -> String {
    let mut table = String::from("| Day | Date | Activities | Daily Cost |\n");
    table.push_str("|-----|------|-----------|------------|\n");
    for day in itinerary.days() {
        table.push_str(&format!(
            "| {} | {} | {} | ${:.2} |\n",
            day.index,
            day.date,
            day.activity_summary(),
            day.daily_cost()
        ));
    }
    table
}

/// One line per cost category.
pub fn format_cost_breakdown(breakdown: &CostBreakdown) -> String {
    let mut out = String::new();
    for (category, amount) in breakdown.iter() {
        out.push_str(&format!("  * {}: ${:.2}\n", category.display_name(), amount));
    }
    out
}

/// Verdict line for the budget check.
pub fn format_validation(validation: &ValidationResult) -> String {
    if validation.satisfied {
        format!(
            "Within budget: ${:.2} <= ${:.2}",
            validation.total_cost, validation.budget_limit
        )
    } else {
        format!(
            "Budget EXCEEDED by ${:.2} ({:.1}% over ${:.2})",
            validation.overage_amount, validation.overage_percent, validation.budget_limit
        )
    }
}

fn format_scenario(out: &mut String, number: usize, scenario: &Scenario) {
    out.push_str(&format!("Scenario {}: {}\n", number, scenario.label));
    out.push_str(&format!("  Description: {}\n", scenario.description));
    out.push_str(&format!("  Estimated Cost: ${:.2}\n", scenario.estimated_cost));
    out.push_str(&format!("  Savings vs Original: ${:.2}\n", scenario.savings));
    out.push_str("  Key Adjustments:\n");
    for adjustment in &scenario.adjustments {
        out.push_str(&format!("    - {}\n", adjustment));
    }
    out.push('\n');
}

fn render(view: &ReportView) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", view.title));
    out.push('\n');
    out.push_str("Day-wise Itinerary:\n");
    out.push_str(&format_itinerary_table(&view.itinerary));
    out.push('\n');
    out.push_str("Cost Breakdown:\n");
    out.push_str(&format_cost_breakdown(view.cost_breakdown));
    out.push('\n');
    out.push_str(&format!("Total Cost: ${:.2}\n", view.total_cost));
    out.push_str(&format!("Budget Limit: ${:.2}\n", view.validation.budget_limit));
    out.push_str(&format_validation(view.validation));
    out.push('\n');

    if view.scenarios.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str("=== Alternative Scenarios ===\n\n");
    for (i, scenario) in view.scenarios.iter().enumerate() {
        format_scenario(&mut out, i + 1, scenario);
    }

    if let Some((i, best)) = view
        .recommended
        .and_then(|i| view.scenarios.get(i).map(|s| (i, s)))
    {
        out.push_str(&format!("Recommended: Scenario {}: {}\n", i + 1, best.label));
        if view.still_over_budget {
            out.push_str(&format!(
                "  Cost: ${:.2} (still over budget: ${:.2})\n",
                best.estimated_cost, view.validation.budget_limit
            ));
        } else {
            out.push_str(&format!(
                "  Cost: ${:.2} (within budget: ${:.2})\n",
                best.estimated_cost, view.validation.budget_limit
            ));
        }
    }

    out
}

/// Full text report for a finalized plan.
pub fn plan_report(state: &PlanState) -> String {
    render(&ReportView {
        title: state.request().summary(),
        itinerary: Cow::Borrowed(state.itinerary()),
        cost_breakdown: state.cost_breakdown(),
        total_cost: state.total_cost(),
        validation: state.validation(),
        scenarios: state.scenarios(),
        recommended: state.recommended_index(),
        still_over_budget: state.still_over_budget(),
    })
}

/// Full text report for a plan loaded from disk.
pub fn saved_plan_report(saved: &SavedPlan) -> String {
    render(&ReportView {
        title: format!(
            "Saved plan: {} days in {} ({})",
            saved.duration_days,
            saved.destination,
            saved.timestamp.to_rfc3339()
        ),
        itinerary: Cow::Owned(saved.to_itinerary()),
        cost_breakdown: &saved.cost_breakdown,
        total_cost: saved.total_cost,
        validation: &saved.validation,
        scenarios: saved.alternative_scenarios.as_deref().unwrap_or_default(),
        recommended: saved.recommended_index(),
        still_over_budget: saved.still_over_budget.unwrap_or(false),
    })
}

/// Print the full report for a plan.
pub fn display_plan(state: &PlanState) {
    println!();
    print!("{}", plan_report(state));
    println!();
}
