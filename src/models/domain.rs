use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of dining hall, fixed by the campus catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HallType {
    MassMarket,
    Regional,
    Halal,
    FastFood,
    Buffet,
    Staff,
    FoodCourt,
    LateNight,
}

impl HallType {
    pub const ALL: [HallType; 8] = [
        HallType::MassMarket,
        HallType::Regional,
        HallType::Halal,
        HallType::FastFood,
        HallType::Buffet,
        HallType::Staff,
        HallType::FoodCourt,
        HallType::LateNight,
    ];

    /// Every hall type, the default preference set
    pub fn all() -> BTreeSet<HallType> {
        Self::ALL.into_iter().collect()
    }
}

/// Inclusive price band in yuan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }

    /// True when the two bands share at least one price
    #[inline]
    pub fn overlaps(&self, other: &PriceRange) -> bool {
        !(self.min > other.max || self.max < other.min)
    }
}

/// One canteen in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningHallRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub hall_type: HallType,
    #[serde(rename = "priceRange")]
    pub price_range: PriceRange,
    #[serde(rename = "baseScore")]
    pub base_score: f64,
    pub location: String,
    pub specialty: String,
    #[serde(rename = "popularDishes", default)]
    pub popular_dishes: Vec<String>,
    #[serde(rename = "operatingHours")]
    pub operating_hours: String,
    #[serde(rename = "seatCount")]
    pub seat_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserType {
    Undergraduate,
    Graduate,
    Faculty,
    InternationalStudent,
    Visitor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiningPurpose {
    QuickMeal,
    GroupDining,
    StudyDiscussion,
    Treat,
    Date,
    HostGuests,
}

/// Per-request user preferences
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceProfile {
    pub user_type: UserType,
    pub dining_purpose: DiningPurpose,
    pub requested_time: NaiveTime,
    pub price_budget: PriceRange,
    pub max_wait_minutes: u32,
    pub preferred_types: BTreeSet<HallType>,
}

impl PreferenceProfile {
    /// Profile with every hall type preferred
    pub fn new(
        user_type: UserType,
        dining_purpose: DiningPurpose,
        requested_time: NaiveTime,
        price_budget: PriceRange,
        max_wait_minutes: u32,
    ) -> Self {
        Self {
            user_type,
            dining_purpose,
            requested_time,
            price_budget,
            max_wait_minutes,
            preferred_types: HallType::all(),
        }
    }

    pub fn with_preferred_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = HallType>,
    {
        self.preferred_types = types.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CrowdTier {
    VeryFree,
    ModeratelyFree,
    Moderate,
    Crowded,
    VeryCrowded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationTier {
    StronglyRecommended,
    Recommended,
    NotRecommended,
}

impl RecommendationTier {
    pub fn is_recommended(&self) -> bool {
        !matches!(self, RecommendationTier::NotRecommended)
    }
}

/// Scored estimate for one eligible hall
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult<'a> {
    pub hall: &'a DiningHallRecord,
    pub score: f64,
    #[serde(rename = "estimatedWaitMinutes")]
    pub estimated_wait_minutes: u32,
    #[serde(rename = "estimatedCrowdPercent")]
    pub estimated_crowd_percent: u32,
    #[serde(rename = "crowdTier")]
    pub crowd_tier: CrowdTier,
    #[serde(rename = "recommendationTier")]
    pub recommendation_tier: RecommendationTier,
}

/// Score adjustments applied on top of a hall's base score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub over_budget_penalty: f64,
    pub above_midpoint_penalty: f64,
    pub identity_bonus: f64,
    pub purpose_bonus: f64,
    pub quick_meal_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            over_budget_penalty: 1.5,
            above_midpoint_penalty: 0.5,
            identity_bonus: 1.0,
            purpose_bonus: 1.0,
            quick_meal_bonus: 0.8,
        }
    }
}

/// Score cut-offs for the recommendation tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub recommended_score: f64,
    pub strong_score: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            recommended_score: 6.5,
            strong_score: 8.0,
        }
    }
}
