mod persistence;
mod plan_state;

pub use persistence::{
    load_plan, plan_file_name, plan_to_json, save_plan, write_scenarios_csv, DayRecord, SavedPlan,
};
pub use plan_state::{PlanPhase, PlanState};
