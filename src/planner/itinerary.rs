use chrono::{Days, NaiveDate};
use log::debug;

use crate::error::{PlannerError, Result};
use crate::models::{Activity, Day, Itinerary, TripRequest};
use crate::planner::constants::{DAILY_TEMPLATE, DESTINATION_PLACEHOLDER};

/// Instantiate the daily template for a destination.
pub fn day_template(destination: &str) -> Vec<Activity> {
    DAILY_TEMPLATE
        .iter()
        .map(|(time, description, cost)| {
            Activity::new(
                *time,
                description.replace(DESTINATION_PLACEHOLDER, destination),
                *cost,
            )
        })
        .collect()
}

/// Build one `Day` per trip day, dated consecutively from `anchor`.
///
/// Fails only when the last day would fall outside chrono's calendar range.
/// Durations are not otherwise capped, and every day holds its own copy of
/// the five template activities, so memory grows linearly with the trip: a
/// duration near the calendar limit (tens of millions of days) can exhaust
/// memory before this returns.
pub fn build_itinerary(request: &TripRequest, anchor: NaiveDate) -> Result<Itinerary> {
    let duration = request.duration_days();

    // Check the final date up front so a huge duration fails before allocating.
    anchor
        .checked_add_days(Days::new(u64::from(duration - 1)))
        .ok_or_else(|| {
            PlannerError::invalid_request(
                "duration_days",
                format!("{} days from {} exceeds the calendar range", duration, anchor),
            )
        })?;

    let template = day_template(request.destination());
    let days: Vec<Day> = (1..=duration)
        .map(|index| Day {
            index,
            // Cannot fail: the last offset was checked above.
            date: anchor + Days::new(u64::from(index - 1)),
            activities: template.clone(),
        })
        .collect();

    debug!(
        "build_itinerary: {} days for {} starting {}",
        days.len(),
        request.destination(),
        anchor
    );

    Ok(Itinerary::new(days))
}
