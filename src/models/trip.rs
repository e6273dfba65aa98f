use crate::error::{PlannerError, Result};

/// A validated planning request.
///
/// Fields are private so an accepted request cannot change while it flows
/// through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    destination: String,
    duration_days: u32,
    budget_limit: f64,
}

impl TripRequest {
    /// Validate raw input and build a request.
    ///
    /// Duration is taken as a signed integer so that zero and negative
    /// values coming from a host surface as `InvalidRequest` rather than a
    /// parse failure somewhere else.
    pub fn new(destination: impl Into<String>, duration_days: i64, budget_limit: f64) -> Result<Self> {
        let destination = destination.into().trim().to_string();
        if destination.is_empty() {
            return Err(PlannerError::invalid_request("destination", "must not be empty"));
        }

        if duration_days <= 0 {
            return Err(PlannerError::invalid_request(
                "duration_days",
                format!("must be greater than 0 (got {})", duration_days),
            ));
        }
        let duration_days = u32::try_from(duration_days).map_err(|_| {
            PlannerError::invalid_request(
                "duration_days",
                format!("must be at most {} (got {})", u32::MAX, duration_days),
            )
        })?;

        if !budget_limit.is_finite() || budget_limit <= 0.0 {
            return Err(PlannerError::invalid_request(
                "budget_limit",
                format!("must be a positive amount (got {})", budget_limit),
            ));
        }

        Ok(Self {
            destination,
            duration_days,
            budget_limit,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn budget_limit(&self) -> f64 {
        self.budget_limit
    }

    /// One-line summary used as the report title.
    pub fn summary(&self) -> String {
        format!("Plan a {}-day trip to {}.", self.duration_days, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_field(result: Result<TripRequest>) -> &'static str {
        match result {
            Err(PlannerError::InvalidRequest { field, .. }) => field,
            other => panic!("expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request() {
        let request = TripRequest::new("  Paris ", 7, 1000.0).unwrap();
        assert_eq!(request.destination(), "Paris");
        assert_eq!(request.duration_days(), 7);
        assert_eq!(request.budget_limit(), 1000.0);
        assert_eq!(request.summary(), "Plan a 7-day trip to Paris.");
    }

    #[test]
    fn test_rejects_empty_destination() {
        assert_eq!(rejected_field(TripRequest::new("   ", 3, 500.0)), "destination");
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        assert_eq!(rejected_field(TripRequest::new("Rome", 0, 500.0)), "duration_days");
        assert_eq!(rejected_field(TripRequest::new("Rome", -4, 500.0)), "duration_days");
        assert_eq!(
            rejected_field(TripRequest::new("Rome", i64::from(u32::MAX) + 1, 500.0)),
            "duration_days"
        );
    }

    #[test]
    fn test_rejects_bad_budget() {
        assert_eq!(rejected_field(TripRequest::new("Rome", 3, 0.0)), "budget_limit");
        assert_eq!(rejected_field(TripRequest::new("Rome", 3, -10.0)), "budget_limit");
        assert_eq!(rejected_field(TripRequest::new("Rome", 3, f64::NAN)), "budget_limit");
    }

    #[test]
    fn test_large_duration_is_accepted() {
        let request = TripRequest::new("Tokyo", 90, 100.0).unwrap();
        assert_eq!(request.duration_days(), 90);
    }
}
