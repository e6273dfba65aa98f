pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use models::{CostBreakdown, Itinerary, Scenario, ScenarioKind, TripRequest, ValidationResult};
pub use planner::plan_trip;
pub use state::{PlanPhase, PlanState};
