use crate::core::{
    filters::exclusion_reason,
    scoring::{classify, crowd_tier, estimate_crowd, estimate_wait, score_hall},
    time::{is_peak_hour, meal_phase, peak_meal, Meal, MealPhase},
};
use crate::models::{
    DiningHallRecord, PreferenceProfile, RecommendationResult, ScoringWeights, TierThresholds,
};
use crate::services::Catalog;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wait jitter in minutes, half-open
const WAIT_JITTER: std::ops::Range<i32> = -2..5;

/// Crowd jitter in percentage points, half-open
const CROWD_JITTER: std::ops::Range<i32> = -10..15;

/// Errors raised for malformed preference profiles
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

/// How a recommendation pass turned out, for advisory messaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// No hall survived the type, budget and opening-hour filters
    NoEligibleHalls,
    /// Halls are eligible but none clears the score and wait thresholds
    NoneRecommended,
    Recommended,
}

/// Aggregate figures over an evaluated result set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "eligibleCount")]
    pub eligible_count: usize,
    #[serde(rename = "recommendedCount")]
    pub recommended_count: usize,
    #[serde(rename = "averageWaitMinutes")]
    pub average_wait_minutes: Option<f64>,
    #[serde(rename = "averageScore")]
    pub average_score: Option<f64>,
}

/// Output of one recommendation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations<'a> {
    /// Every eligible hall in catalog order, recommended or not
    pub results: Vec<RecommendationResult<'a>>,
    pub phase: MealPhase,
    pub time_factor: f64,
    pub is_peak_hour: bool,
    pub peak_meal: Option<Meal>,
}

impl<'a> Recommendations<'a> {
    /// Recommended halls by descending score, ties kept in catalog order
    pub fn ranked(&self) -> Vec<&RecommendationResult<'a>> {
        let mut ranked: Vec<&RecommendationResult<'a>> = self
            .results
            .iter()
            .filter(|r| r.recommendation_tier.is_recommended())
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
    }

    pub fn best_pick(&self) -> Option<&RecommendationResult<'a>> {
        self.ranked().into_iter().next()
    }

    pub fn outcome(&self) -> Outcome {
        if self.results.is_empty() {
            Outcome::NoEligibleHalls
        } else if self.results.iter().any(|r| r.recommendation_tier.is_recommended()) {
            Outcome::Recommended
        } else {
            Outcome::NoneRecommended
        }
    }

    pub fn summary(&self) -> Summary {
        let eligible_count = self.results.len();
        let recommended_count = self
            .results
            .iter()
            .filter(|r| r.recommendation_tier.is_recommended())
            .count();

        let (average_wait_minutes, average_score) = if eligible_count == 0 {
            (None, None)
        } else {
            let n = eligible_count as f64;
            let total_wait: u32 = self.results.iter().map(|r| r.estimated_wait_minutes).sum();
            let total_score: f64 = self.results.iter().map(|r| r.score).sum();
            (Some(total_wait as f64 / n), Some(total_score / n))
        };

        Summary {
            eligible_count,
            recommended_count,
            average_wait_minutes,
            average_score,
        }
    }
}

/// Recommendation orchestrator - implements the filter, score, classify pipeline
///
/// # Pipeline Stages
/// 1. Eligibility filtering (type, budget, opening hours)
/// 2. Time-factor adjusted scoring
/// 3. Wait and crowd estimation with injected jitter
/// 4. Tier classification
///
/// Holds no mutable state; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    weights: ScoringWeights,
    thresholds: TierThresholds,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, thresholds: TierThresholds) -> Self {
        Self { weights, thresholds }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    /// Evaluate every catalog hall against a preference profile
    ///
    /// Jitter is drawn from `rng` in catalog order, wait first then crowd,
    /// once per eligible hall, so a seeded generator gives reproducible output.
    ///
    /// # Arguments
    /// * `catalog` - The halls to evaluate
    /// * `profile` - The caller's preferences for this request
    /// * `rng` - Source of wait and crowd jitter
    ///
    /// # Returns
    /// Recommendations holding one result per eligible hall
    pub fn recommend<'c, R>(
        &self,
        catalog: &'c Catalog,
        profile: &PreferenceProfile,
        rng: &mut R,
    ) -> Result<Recommendations<'c>, EngineError>
    where
        R: Rng + ?Sized,
    {
        validate_profile(profile)?;

        let time = profile.requested_time;
        let phase = meal_phase(time);
        let time_factor = phase.time_factor();

        let results: Vec<RecommendationResult<'c>> = catalog
            .all()
            .iter()
            .filter(|hall| match exclusion_reason(hall, profile) {
                Some(reason) => {
                    tracing::trace!("Excluding {}: {}", hall.name, reason);
                    false
                }
                None => true,
            })
            .map(|hall| self.evaluate(hall, profile, time_factor, &mut *rng))
            .collect();

        tracing::debug!(
            "Evaluated {} of {} halls at {} (factor {})",
            results.len(),
            catalog.len(),
            time.format("%H:%M"),
            time_factor
        );

        Ok(Recommendations {
            results,
            phase,
            time_factor,
            is_peak_hour: is_peak_hour(time),
            peak_meal: peak_meal(time),
        })
    }

    fn evaluate<'c, R>(
        &self,
        hall: &'c DiningHallRecord,
        profile: &PreferenceProfile,
        time_factor: f64,
        rng: &mut R,
    ) -> RecommendationResult<'c>
    where
        R: Rng + ?Sized,
    {
        let score = score_hall(hall, profile, time_factor, &self.weights);
        let wait = estimate_wait(hall.hall_type, time_factor, rng.gen_range(WAIT_JITTER));
        let crowd = estimate_crowd(hall.hall_type, time_factor, rng.gen_range(CROWD_JITTER));

        RecommendationResult {
            hall,
            score,
            estimated_wait_minutes: wait,
            estimated_crowd_percent: crowd,
            crowd_tier: crowd_tier(crowd),
            recommendation_tier: classify(score, wait, profile.max_wait_minutes, &self.thresholds),
        }
    }
}

/// Reject profiles the pipeline cannot interpret
pub fn validate_profile(profile: &PreferenceProfile) -> Result<(), EngineError> {
    let budget = &profile.price_budget;
    if budget.min > budget.max {
        return Err(EngineError::InvalidProfile(format!(
            "price budget minimum {} exceeds maximum {}",
            budget.min, budget.max
        )));
    }

    if profile.max_wait_minutes == 0 {
        return Err(EngineError::InvalidProfile(
            "maximum wait must be at least one minute".to_string(),
        ));
    }

    Ok(())
}
