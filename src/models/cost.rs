use serde::{Deserialize, Serialize};

/// Cost categories in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCategory {
    Flights,
    Accommodation,
    Meals,
    Activities,
    Miscellaneous,
}

impl CostCategory {
    pub const ALL: [CostCategory; 5] = [
        CostCategory::Flights,
        CostCategory::Accommodation,
        CostCategory::Meals,
        CostCategory::Activities,
        CostCategory::Miscellaneous,
    ];

    /// Key used in serialized output.
    pub fn key(self) -> &'static str {
        match self {
            CostCategory::Flights => "flights",
            CostCategory::Accommodation => "accommodation",
            CostCategory::Meals => "meals",
            CostCategory::Activities => "activities",
            CostCategory::Miscellaneous => "miscellaneous",
        }
    }

    /// Capitalized name for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            CostCategory::Flights => "Flights",
            CostCategory::Accommodation => "Accommodation",
            CostCategory::Meals => "Meals",
            CostCategory::Activities => "Activities",
            CostCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

/// Trip cost split into the fixed category set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub flights: f64,
    pub accommodation: f64,
    pub meals: f64,
    pub activities: f64,
    pub miscellaneous: f64,
}

impl CostBreakdown {
    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Flights => self.flights,
            CostCategory::Accommodation => self.accommodation,
            CostCategory::Meals => self.meals,
            CostCategory::Activities => self.activities,
            CostCategory::Miscellaneous => self.miscellaneous,
        }
    }

    /// Categories with their amounts, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        CostCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Everything except miscellaneous.
    pub fn subtotal(&self) -> f64 {
        self.flights + self.accommodation + self.meals + self.activities
    }

    /// Full-precision total of all five categories.
    pub fn total(&self) -> f64 {
        self.subtotal() + self.miscellaneous
    }
}
