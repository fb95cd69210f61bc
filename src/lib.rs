//! Canteen Advisor - dining hall recommendations for the north campus
//!
//! This library provides the recommendation engine behind the canteen service.
//! It filters the hall catalog by preference, scores each eligible hall against
//! the meal-time congestion factor and ranks the results.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Outcome, Recommendations, Recommender, time::{is_peak_hour, time_factor}};
pub use models::{DiningHallRecord, HallType, PreferenceProfile, RecommendationResult, RecommendationTier};
pub use services::Catalog;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_library_exports() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert!(is_peak_hour(noon));
        assert_eq!(time_factor(noon), 1.8);
        assert_eq!(Catalog::builtin().len(), 8);
    }
}
