use crate::core::{is_peak_hour, meal_phase, peak_meal, Recommender};
use crate::models::{
    requests::parse_clock_time, CatalogResponse, ErrorResponse, HealthResponse, PeakStatusQuery,
    PeakStatusResponse, RecommendRequest, RecommendResponse,
};
use crate::services::Catalog;
use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveTime;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
    pub seed: Option<u64>,
}

impl AppState {
    /// Fresh jitter source for one request
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/canteens", web::get().to(list_canteens))
        .route("/peak-status", web::get().to(peak_status))
        .route("/recommendations", web::post().to(recommend));
}

fn local_now() -> NaiveTime {
    chrono::Local::now().time()
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the catalog in display order
///
/// GET /api/v1/canteens
async fn list_canteens(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CatalogResponse {
        canteens: state.catalog.all(),
        total: state.catalog.len(),
    })
}

/// Meal rush status for a clock time
///
/// GET /api/v1/peak-status?time=HH:MM
async fn peak_status(query: web::Query<PeakStatusQuery>) -> impl Responder {
    let time = match query.time.as_deref() {
        Some(raw) => match parse_clock_time(raw) {
            Some(time) => time,
            None => {
                return bad_request(
                    "Invalid time",
                    format!("unrecognised time '{}', expected HH:MM", raw),
                );
            }
        },
        None => local_now(),
    };

    let phase = meal_phase(time);
    let meal = peak_meal(time);

    HttpResponse::Ok().json(PeakStatusResponse {
        time: time.format("%H:%M").to_string(),
        phase,
        time_factor: phase.time_factor(),
        is_peak_hour: is_peak_hour(time),
        peak_meal: meal,
        peak_window: meal.map(|m| m.peak_window().to_string()),
    })
}

/// Recommend dining halls
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "userType": "undergraduate",
///   "diningPurpose": "quickMeal",
///   "requestedTime": "12:00",
///   "priceBudget": { "min": 8, "max": 25 },
///   "maxWaitMinutes": 15,
///   "preferredTypes": ["massMarket", "fastFood"]
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let profile = match req.to_profile(local_now()) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::info!("Rejected recommendation request: {}", e);
            return bad_request("Invalid profile", e.to_string());
        }
    };

    let request_id = uuid::Uuid::new_v4();
    let mut rng = state.rng();

    let recommendations = match state.recommender.recommend(&state.catalog, &profile, &mut rng) {
        Ok(recommendations) => recommendations,
        Err(e) => {
            tracing::info!("Rejected recommendation request {}: {}", request_id, e);
            return bad_request("Invalid profile", e.to_string());
        }
    };

    let response = RecommendResponse::new(request_id, profile.requested_time, &recommendations);

    tracing::info!(
        "Request {}: {} eligible, {} recommended, best pick {:?}",
        request_id,
        response.summary.eligible_count,
        response.summary.recommended_count,
        response.best_pick.as_ref().map(|r| r.hall.name.as_str())
    );

    HttpResponse::Ok().json(response)
}
