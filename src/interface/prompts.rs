use dialoguer::{Confirm, Input};

use crate::error::{PlannerError, Result};
use crate::models::TripRequest;
use crate::planner::constants::{DEFAULT_DESTINATION, PROMPT_MAX_DAYS, PROMPT_MIN_DAYS};

/// Parse a trip length within the prompt's accepted range.
pub fn parse_days(input: &str) -> std::result::Result<u32, String> {
    let days: u32 = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid number".to_string())?;
    if !(PROMPT_MIN_DAYS..=PROMPT_MAX_DAYS).contains(&days) {
        return Err(format!(
            "Please enter a number between {} and {}",
            PROMPT_MIN_DAYS, PROMPT_MAX_DAYS
        ));
    }
    Ok(days)
}

/// Parse a positive budget, allowing a leading `$`.
pub fn parse_budget(input: &str) -> std::result::Result<f64, String> {
    let budget: f64 = input
        .trim()
        .trim_start_matches('$')
        .parse()
        .map_err(|_| "Please enter a valid number".to_string())?;
    if !budget.is_finite() || budget <= 0.0 {
        return Err("Please enter a positive number".to_string());
    }
    Ok(budget)
}

/// Prompt for the destination; an empty answer picks the default.
pub fn prompt_destination() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Where do you want to go? (e.g., Paris, Tokyo, Hawaii)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_DESTINATION.to_string());
    }
    Ok(input.to_string())
}

/// Prompt for the trip length, re-asking until the answer is in range.
pub fn prompt_days() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!(
            "How many days? ({}-{})",
            PROMPT_MIN_DAYS, PROMPT_MAX_DAYS
        ))
        .validate_with(|input: &String| parse_days(input).map(|_| ()))
        .interact_text()?;

    parse_days(&input).map_err(|reason| PlannerError::invalid_request("duration_days", reason))
}

/// Prompt for the budget ceiling.
pub fn prompt_budget() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What's your budget? (e.g., 1000)")
        .validate_with(|input: &String| parse_budget(input).map(|_| ()))
        .interact_text()?;

    parse_budget(&input).map_err(|reason| PlannerError::invalid_request("budget_limit", reason))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full trip request interactively.
pub fn collect_trip_request() -> Result<TripRequest> {
    let destination = prompt_destination()?;
    let days = prompt_days()?;
    let budget = prompt_budget()?;

    TripRequest::new(destination, i64::from(days), budget)
}
