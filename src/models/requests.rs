use crate::core::EngineError;
use crate::models::domain::{DiningPurpose, HallType, PreferenceProfile, PriceRange, UserType};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Price budget as submitted by the client
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct BudgetRequest {
    #[validate(range(max = 500))]
    pub min: u32,
    #[validate(range(max = 500))]
    pub max: u32,
}

/// Request to rank dining halls
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(alias = "user_type", rename = "userType")]
    pub user_type: UserType,
    #[serde(alias = "dining_purpose", rename = "diningPurpose")]
    pub dining_purpose: DiningPurpose,
    /// Clock time as "HH:MM"; defaults to the server's local time
    #[serde(alias = "requested_time", rename = "requestedTime", default)]
    pub requested_time: Option<String>,
    #[validate(nested)]
    #[serde(alias = "price_budget", rename = "priceBudget")]
    pub price_budget: BudgetRequest,
    #[validate(range(min = 1, max = 240))]
    #[serde(alias = "max_wait_minutes", rename = "maxWaitMinutes")]
    pub max_wait_minutes: u32,
    /// Omitted means every hall type
    #[serde(alias = "preferred_types", rename = "preferredTypes", default)]
    pub preferred_types: Option<Vec<HallType>>,
}

impl RecommendRequest {
    /// Build the per-request preference profile
    ///
    /// `now` is used when the request carries no explicit time.
    pub fn to_profile(&self, now: NaiveTime) -> Result<PreferenceProfile, EngineError> {
        let requested_time = match &self.requested_time {
            Some(raw) => parse_clock_time(raw).ok_or_else(|| {
                EngineError::InvalidProfile(format!("unrecognised time '{}', expected HH:MM", raw))
            })?,
            None => now,
        };

        let profile = PreferenceProfile::new(
            self.user_type,
            self.dining_purpose,
            requested_time,
            PriceRange::new(self.price_budget.min, self.price_budget.max),
            self.max_wait_minutes,
        );

        Ok(match &self.preferred_types {
            Some(types) => profile.with_preferred_types(types.iter().copied()),
            None => profile,
        })
    }
}

/// Query for the peak status endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakStatusQuery {
    pub time: Option<String>,
}

/// Parse "HH:MM" or "HH:MM:SS"
pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> RecommendRequest {
        serde_json::from_value(serde_json::json!({
            "userType": "faculty",
            "diningPurpose": "studyDiscussion",
            "requestedTime": "12:05",
            "priceBudget": { "min": 8, "max": 25 },
            "maxWaitMinutes": 15
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("12:05"), NaiveTime::from_hms_opt(12, 5, 0));
        assert_eq!(parse_clock_time(" 07:30:15 "), NaiveTime::from_hms_opt(7, 30, 15));
        assert_eq!(parse_clock_time("25:00"), None);
        assert_eq!(parse_clock_time("noon"), None);
    }

    #[test]
    fn test_to_profile_defaults_to_all_types() {
        let request = sample_request();
        assert!(request.validate().is_ok());

        let now = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let profile = request.to_profile(now).unwrap();

        assert_eq!(profile.requested_time, NaiveTime::from_hms_opt(12, 5, 0).unwrap());
        assert_eq!(profile.preferred_types, HallType::all());
        assert_eq!(profile.user_type, UserType::Faculty);
    }

    #[test]
    fn test_to_profile_uses_now_and_type_filter() {
        let mut request = sample_request();
        request.requested_time = None;
        request.preferred_types = Some(vec![HallType::Staff, HallType::Halal]);

        let now = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let profile = request.to_profile(now).unwrap();

        assert_eq!(profile.requested_time, now);
        assert_eq!(profile.preferred_types.len(), 2);
    }

    #[test]
    fn test_bad_time_rejected() {
        let mut request = sample_request();
        request.requested_time = Some("lunch".to_string());

        let now = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(matches!(request.to_profile(now), Err(EngineError::InvalidProfile(_))));
    }

    #[test]
    fn test_validation_bounds() {
        let mut request = sample_request();
        request.max_wait_minutes = 0;
        assert!(request.validate().is_err());

        let mut request = sample_request();
        request.price_budget.max = 1000;
        assert!(request.validate().is_err());
    }
}
