use crate::models::{
    CrowdTier, DiningHallRecord, DiningPurpose, HallType, PreferenceProfile, RecommendationTier,
    ScoringWeights, TierThresholds, UserType,
};

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;
pub const MIN_WAIT_MINUTES: i64 = 3;
pub const MAX_WAIT_MINUTES: i64 = 40;
pub const MIN_CROWD_PERCENT: i64 = 10;
pub const MAX_CROWD_PERCENT: i64 = 95;

/// Time factors above this count as the meal rush for wait estimates
const PEAK_FACTOR_THRESHOLD: f64 = 1.5;

const BASE_WAIT_MINUTES: f64 = 10.0;
const BASE_CROWD_PERCENT: f64 = 50.0;

/// Calculate a recommendation score (1-10) for an eligible hall
///
/// Scoring formula:
/// score = clamp(
///     (base_score
///      - price_penalty       # average price above budget or its midpoint
///      + identity_bonus      # faculty at staff hall, international student at halal hall
///      + purpose_bonus)      # study/group/quick-meal affinity
///     * time_factor,
///     1.0, 10.0)
pub fn score_hall(
    hall: &DiningHallRecord,
    profile: &PreferenceProfile,
    time_factor: f64,
    weights: &ScoringWeights,
) -> f64 {
    let score = hall.base_score - price_penalty(hall, profile, weights)
        + identity_bonus(hall.hall_type, profile.user_type, weights)
        + purpose_bonus(hall.hall_type, profile.dining_purpose, weights);

    (score * time_factor).clamp(MIN_SCORE, MAX_SCORE)
}

#[inline]
fn price_penalty(hall: &DiningHallRecord, profile: &PreferenceProfile, weights: &ScoringWeights) -> f64 {
    let avg_price = hall.price_range.midpoint();
    let budget = &profile.price_budget;

    if avg_price > budget.max as f64 {
        weights.over_budget_penalty
    } else if avg_price > budget.midpoint() {
        weights.above_midpoint_penalty
    } else {
        0.0
    }
}

#[inline]
fn identity_bonus(hall_type: HallType, user_type: UserType, weights: &ScoringWeights) -> f64 {
    match (user_type, hall_type) {
        (UserType::Faculty, HallType::Staff)
        | (UserType::InternationalStudent, HallType::Halal) => weights.identity_bonus,
        _ => 0.0,
    }
}

#[inline]
fn purpose_bonus(hall_type: HallType, purpose: DiningPurpose, weights: &ScoringWeights) -> f64 {
    match (purpose, hall_type) {
        (DiningPurpose::StudyDiscussion, HallType::Staff)
        | (DiningPurpose::GroupDining, HallType::LateNight)
        | (DiningPurpose::GroupDining, HallType::FoodCourt) => weights.purpose_bonus,
        (DiningPurpose::QuickMeal, HallType::FastFood) => weights.quick_meal_bonus,
        _ => 0.0,
    }
}

/// Estimate queueing time in minutes, perturbed by `jitter`
pub fn estimate_wait(hall_type: HallType, time_factor: f64, jitter: i32) -> u32 {
    let mut wait = BASE_WAIT_MINUTES;
    if time_factor > PEAK_FACTOR_THRESHOLD {
        wait *= 1.8;
    }
    match hall_type {
        HallType::FastFood => wait *= 0.7,
        HallType::MassMarket => wait *= 1.3,
        _ => {}
    }

    ((wait + jitter as f64) as i64).clamp(MIN_WAIT_MINUTES, MAX_WAIT_MINUTES) as u32
}

/// Estimate occupancy percent, perturbed by `jitter`
pub fn estimate_crowd(hall_type: HallType, time_factor: f64, jitter: i32) -> u32 {
    let mut crowd = BASE_CROWD_PERCENT * time_factor;
    match hall_type {
        HallType::Staff => crowd *= 0.7,
        HallType::MassMarket => crowd *= 1.3,
        _ => {}
    }

    ((crowd + jitter as f64) as i64).clamp(MIN_CROWD_PERCENT, MAX_CROWD_PERCENT) as u32
}

#[inline]
pub fn crowd_tier(crowd_percent: u32) -> CrowdTier {
    match crowd_percent {
        0..=29 => CrowdTier::VeryFree,
        30..=49 => CrowdTier::ModeratelyFree,
        50..=69 => CrowdTier::Moderate,
        70..=84 => CrowdTier::Crowded,
        _ => CrowdTier::VeryCrowded,
    }
}

/// Decide the recommendation tier from score and estimated wait
#[inline]
pub fn classify(
    score: f64,
    wait_minutes: u32,
    max_wait_minutes: u32,
    thresholds: &TierThresholds,
) -> RecommendationTier {
    if score < thresholds.recommended_score || wait_minutes > max_wait_minutes {
        RecommendationTier::NotRecommended
    } else if score >= thresholds.strong_score {
        RecommendationTier::StronglyRecommended
    } else {
        RecommendationTier::Recommended
    }
}
