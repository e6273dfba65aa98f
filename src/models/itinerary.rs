use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled item within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Time-of-day label, e.g. "08:00".
    pub time: String,

    #[serde(rename = "activity")]
    pub description: String,

    pub cost: f64,
}

impl Activity {
    pub fn new(time: impl Into<String>, description: impl Into<String>, cost: f64) -> Self {
        Self {
            time: time.into(),
            description: description.into(),
            cost,
        }
    }
}

/// One day of the trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    /// 1-based index within the trip.
    pub index: u32,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

impl Day {
    /// Sum of this day's activity costs.
    pub fn daily_cost(&self) -> f64 {
        self.activities.iter().map(|a| a.cost).sum()
    }

    /// Activity descriptions joined for table output.
    pub fn activity_summary(&self) -> String {
        self.activities
            .iter()
            .map(|a| a.description.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Ordered days of a trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    days: Vec<Day>,
}

impl Itinerary {
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of all daily costs.
    pub fn activities_total(&self) -> f64 {
        self.days.iter().map(Day::daily_cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day(index: u32) -> Day {
        Day {
            index,
            date: NaiveDate::from_ymd_opt(2026, 3, index).unwrap(),
            activities: vec![
                Activity::new("08:00", "Breakfast", 12.5),
                Activity::new("12:00", "Walk", 0.0),
                Activity::new("19:00", "Dinner", 30.25),
            ],
        }
    }

    #[test]
    fn test_daily_cost_is_activity_sum() {
        let day = sample_day(1);
        assert_eq!(day.daily_cost(), 42.75);
    }

    #[test]
    fn test_activity_summary() {
        assert_eq!(sample_day(1).activity_summary(), "Breakfast, Walk, Dinner");
    }

    #[test]
    fn test_activities_total() {
        let itinerary = Itinerary::new(vec![sample_day(1), sample_day(2)]);
        assert_eq!(itinerary.len(), 2);
        assert_eq!(itinerary.activities_total(), 85.5);
    }
}
