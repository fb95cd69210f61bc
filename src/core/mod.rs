// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod scoring;
pub mod time;

pub use engine::{EngineError, Outcome, Recommendations, Recommender, Summary};
pub use filters::{exclusion_reason, is_eligible, ExclusionReason};
pub use scoring::{classify, crowd_tier, estimate_crowd, estimate_wait, score_hall};
pub use time::{is_peak_hour, meal_phase, peak_meal, time_factor, Meal, MealPhase};
