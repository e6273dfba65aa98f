use serde::{Deserialize, Serialize};

use crate::models::CostBreakdown;

/// The three cost-reduction templates, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    ShorterDuration,
    BudgetFriendly,
    UltraBudget,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::ShorterDuration,
        ScenarioKind::BudgetFriendly,
        ScenarioKind::UltraBudget,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::ShorterDuration => "Shorter Duration",
            ScenarioKind::BudgetFriendly => "Budget-Friendly Experience",
            ScenarioKind::UltraBudget => "Ultra-Budget Adventure",
        }
    }

    /// Fixed recommendations shown with the scenario.
    pub fn adjustments(self) -> &'static [&'static str] {
        match self {
            ScenarioKind::ShorterDuration => &[
                "Eliminate slower travel days",
                "Focus on top-priority activities",
                "Stay in premium accommodations for fewer nights",
            ],
            ScenarioKind::BudgetFriendly => &[
                "Choose economy accommodations instead of 4-star hotels",
                "Select free or low-cost activities (parks, markets, beaches)",
                "Eat at local restaurants instead of tourist zones",
                "Skip premium guided tours; use self-guided options",
            ],
            ScenarioKind::UltraBudget => &[
                "Book flights 2+ months in advance or use budget airlines",
                "Stay in hostels or budget hotels",
                "Cook some meals; eat street food and local eateries",
                "Participate only in free activities",
                "Use public transportation exclusively",
            ],
        }
    }
}

/// A lower-cost variant of the base plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub kind: ScenarioKind,

    #[serde(rename = "scenario")]
    pub label: String,

    pub description: String,

    /// Trip length this scenario assumes.
    pub duration_days: u32,

    pub cost_breakdown: CostBreakdown,

    #[serde(rename = "cost")]
    pub estimated_cost: f64,

    /// Original total minus `estimated_cost`; negative when the variant costs more.
    pub savings: f64,

    pub adjustments: Vec<String>,

    pub within_budget: bool,
}
