pub mod constants;
pub mod costs;
pub mod itinerary;
pub mod pipeline;
pub mod scenarios;
pub mod validation;

pub use constants::*;
pub use costs::aggregate_costs;
pub use itinerary::{build_itinerary, day_template};
pub use pipeline::{anchor_date, plan_trip, resolve_budget};
pub use scenarios::{generate_scenarios, recommend, Recommendation};
pub use validation::validate_budget;
