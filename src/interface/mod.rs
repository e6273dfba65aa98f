pub mod prompts;
pub mod render;

pub use prompts::{
    collect_trip_request, parse_budget, parse_days, prompt_budget, prompt_days,
    prompt_destination, prompt_yes_no,
};
pub use render::{
    display_plan, format_cost_breakdown, format_itinerary_table, format_validation, plan_report,
    saved_plan_report,
};
