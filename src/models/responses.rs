use crate::core::{Meal, MealPhase, Outcome, Recommendations, Summary};
use crate::models::domain::{DiningHallRecord, RecommendationResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse<'a> {
    #[serde(rename = "requestId")]
    pub request_id: uuid::Uuid,
    #[serde(rename = "requestedTime")]
    pub requested_time: String,
    pub phase: MealPhase,
    #[serde(rename = "timeFactor")]
    pub time_factor: f64,
    #[serde(rename = "isPeakHour")]
    pub is_peak_hour: bool,
    #[serde(rename = "peakMeal")]
    pub peak_meal: Option<Meal>,
    #[serde(rename = "peakWindow")]
    pub peak_window: Option<&'static str>,
    pub outcome: Outcome,
    #[serde(rename = "bestPick")]
    pub best_pick: Option<RecommendationResult<'a>>,
    pub ranked: Vec<RecommendationResult<'a>>,
    pub results: Vec<RecommendationResult<'a>>,
    pub summary: Summary,
}

impl<'a> RecommendResponse<'a> {
    pub fn new(
        request_id: uuid::Uuid,
        requested_time: NaiveTime,
        recommendations: &Recommendations<'a>,
    ) -> Self {
        Self {
            request_id,
            requested_time: requested_time.format("%H:%M").to_string(),
            phase: recommendations.phase,
            time_factor: recommendations.time_factor,
            is_peak_hour: recommendations.is_peak_hour,
            peak_meal: recommendations.peak_meal,
            peak_window: recommendations.peak_meal.map(|meal| meal.peak_window()),
            outcome: recommendations.outcome(),
            best_pick: recommendations.best_pick().cloned(),
            ranked: recommendations.ranked().into_iter().cloned().collect(),
            results: recommendations.results.clone(),
            summary: recommendations.summary(),
        }
    }
}

/// Catalog listing response
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse<'a> {
    pub canteens: &'a [DiningHallRecord],
    pub total: usize,
}

/// Peak status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakStatusResponse {
    pub time: String,
    pub phase: MealPhase,
    #[serde(rename = "timeFactor")]
    pub time_factor: f64,
    #[serde(rename = "isPeakHour")]
    pub is_peak_hour: bool,
    #[serde(rename = "peakMeal")]
    pub peak_meal: Option<Meal>,
    #[serde(rename = "peakWindow")]
    pub peak_window: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
