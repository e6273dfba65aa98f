pub mod budget;
pub mod cost;
pub mod itinerary;
pub mod scenario;
pub mod trip;

pub use budget::ValidationResult;
pub use cost::{CostBreakdown, CostCategory};
pub use itinerary::{Activity, Day, Itinerary};
pub use scenario::{Scenario, ScenarioKind};
pub use trip::TripRequest;
