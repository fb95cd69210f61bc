// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CrowdTier, DiningHallRecord, DiningPurpose, HallType, PreferenceProfile, PriceRange,
    RecommendationResult, RecommendationTier, ScoringWeights, TierThresholds, UserType,
};
pub use requests::{BudgetRequest, PeakStatusQuery, RecommendRequest};
pub use responses::{
    CatalogResponse, ErrorResponse, HealthResponse, PeakStatusResponse, RecommendResponse,
};
