/// One slot of the daily activity template: (time label, description, cost).
///
/// `{destination}` in a description is replaced with the trip destination.
pub type ActivitySlot = (&'static str, &'static str, f64);

/// Repeating per-day schedule.
pub const DAILY_TEMPLATE: [ActivitySlot; 5] = [
    ("08:00", "Breakfast at hotel", 25.0),
    ("10:00", "Guided tour of {destination} landmarks", 75.0),
    ("13:00", "Lunch at local restaurant", 40.0),
    ("15:00", "Museum or cultural site", 35.0),
    ("18:00", "Dinner and evening entertainment", 60.0),
];

/// Placeholder substituted in template descriptions.
pub const DESTINATION_PLACEHOLDER: &str = "{destination}";

// ─────────────────────────────────────────────────────────────────────────────
// Pricing defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Round-trip fare, charged once per trip.
pub const DEFAULT_FLIGHTS_ROUND_TRIP: f64 = 450.0;

/// Lodging is charged for every day of the trip, including the last.
pub const DEFAULT_LODGING_PER_NIGHT: f64 = 115.0;

pub const DEFAULT_MEALS_PER_DAY: f64 = 125.0;

/// Share of the other four categories added as miscellaneous.
pub const DEFAULT_MISC_RATE: f64 = 0.08;

// ─────────────────────────────────────────────────────────────────────────────
// Scenario defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Days removed by the shorter-duration scenario.
pub const DEFAULT_SHORTEN_BY_DAYS: u32 = 2;

/// Shortest trip the shorter-duration scenario will propose.
pub const DEFAULT_MIN_DURATION_DAYS: u32 = 1;

pub const DEFAULT_BUDGET_LODGING_DISCOUNT: f64 = 0.30;
pub const DEFAULT_BUDGET_ACTIVITIES_DISCOUNT: f64 = 0.30;
pub const DEFAULT_BUDGET_MEALS_DISCOUNT: f64 = 0.12;

pub const DEFAULT_ULTRA_LODGING_DISCOUNT: f64 = 0.80;
pub const DEFAULT_ULTRA_MEALS_DISCOUNT: f64 = 0.80;
pub const DEFAULT_ULTRA_ACTIVITIES_DISCOUNT: f64 = 0.80;
pub const DEFAULT_ULTRA_FLIGHTS_DISCOUNT: f64 = 0.50;

// ─────────────────────────────────────────────────────────────────────────────
// Dates and input bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Days between "today" and day 1 when no start date is given.
pub const DEFAULT_LEAD_TIME_DAYS: u32 = 7;

/// Destination used by the interactive prompt when the answer is empty.
pub const DEFAULT_DESTINATION: &str = "Mediterranean";

/// Duration range accepted by the interactive prompt.
pub const PROMPT_MIN_DAYS: u32 = 1;
pub const PROMPT_MAX_DAYS: u32 = 30;

/// Round to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
