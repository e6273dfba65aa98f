use log::debug;

use crate::config::PriceTable;
use crate::models::{CostBreakdown, Itinerary, TripRequest};

/// Compute the categorized trip cost.
///
/// Activities come from the itinerary; the other categories are priced from
/// the duration alone. Lodging is charged for `duration_days` nights.
pub fn aggregate_costs(
    request: &TripRequest,
    itinerary: &Itinerary,
    pricing: &PriceTable,
) -> CostBreakdown {
    let days = f64::from(request.duration_days());

    let mut breakdown = CostBreakdown {
        flights: pricing.flights_round_trip,
        accommodation: pricing.lodging_per_night * days,
        meals: pricing.meals_per_day * days,
        activities: itinerary.activities_total(),
        miscellaneous: 0.0,
    };
    breakdown.miscellaneous = breakdown.subtotal() * pricing.misc_rate;

    debug!("aggregate_costs: {:?} total={:.2}", breakdown, breakdown.total());

    breakdown
}
