use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

const LUNCH_PEAK: (u32, u32) = (11 * 60 + 40, 12 * 60 + 30);
const DINNER_PEAK: (u32, u32) = (17 * 60 + 40, 18 * 60 + 30);
const LUNCH_PRE_PEAK: (u32, u32) = (11 * 60, 11 * 60 + 40);
const DINNER_PRE_PEAK: (u32, u32) = (17 * 60, 17 * 60 + 40);
const LUNCH_POST_PEAK: (u32, u32) = (12 * 60 + 30, 13 * 60);
const DINNER_POST_PEAK: (u32, u32) = (18 * 60 + 30, 19 * 60);

/// Where a clock time falls relative to the meal rushes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealPhase {
    Peak,
    PrePeak,
    PostPeak,
    OffPeak,
}

impl MealPhase {
    /// Congestion multiplier for this phase
    pub fn time_factor(&self) -> f64 {
        match self {
            MealPhase::Peak => 1.8,
            MealPhase::PrePeak => 1.3,
            MealPhase::PostPeak => 1.1,
            MealPhase::OffPeak => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Meal {
    Lunch,
    Dinner,
}

impl Meal {
    /// Clock window of this meal's peak, for advisory text
    pub fn peak_window(&self) -> &'static str {
        match self {
            Meal::Lunch => "11:40-12:30",
            Meal::Dinner => "17:40-18:30",
        }
    }
}

#[inline]
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Fractional hour, so 13:30 is 13.5
#[inline]
pub fn fractional_hour(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

#[inline]
fn within(minutes: u32, window: (u32, u32)) -> bool {
    window.0 <= minutes && minutes <= window.1
}

/// Classify a clock time into a meal phase
///
/// Windows are closed on both ends and shared boundaries resolve
/// peak first, then pre-peak, then post-peak.
pub fn meal_phase(time: NaiveTime) -> MealPhase {
    let minutes = minutes_of_day(time);

    if within(minutes, LUNCH_PEAK) || within(minutes, DINNER_PEAK) {
        MealPhase::Peak
    } else if within(minutes, LUNCH_PRE_PEAK) || within(minutes, DINNER_PRE_PEAK) {
        MealPhase::PrePeak
    } else if within(minutes, LUNCH_POST_PEAK) || within(minutes, DINNER_POST_PEAK) {
        MealPhase::PostPeak
    } else {
        MealPhase::OffPeak
    }
}

#[inline]
pub fn time_factor(time: NaiveTime) -> f64 {
    meal_phase(time).time_factor()
}

#[inline]
pub fn is_peak_hour(time: NaiveTime) -> bool {
    peak_meal(time).is_some()
}

/// Which meal rush is underway, if any
pub fn peak_meal(time: NaiveTime) -> Option<Meal> {
    let minutes = minutes_of_day(time);
    if within(minutes, LUNCH_PEAK) {
        Some(Meal::Lunch)
    } else if within(minutes, DINNER_PEAK) {
        Some(Meal::Dinner)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_peak_boundaries_inclusive() {
        assert_eq!(meal_phase(at(11, 40)), MealPhase::Peak);
        assert_eq!(meal_phase(at(12, 30)), MealPhase::Peak);
        assert_eq!(meal_phase(at(17, 40)), MealPhase::Peak);
        assert_eq!(meal_phase(at(18, 30)), MealPhase::Peak);
    }

    #[test]
    fn test_pre_and_post_peak() {
        assert_eq!(meal_phase(at(11, 0)), MealPhase::PrePeak);
        assert_eq!(meal_phase(at(11, 39)), MealPhase::PrePeak);
        assert_eq!(meal_phase(at(17, 0)), MealPhase::PrePeak);
        assert_eq!(meal_phase(at(12, 31)), MealPhase::PostPeak);
        assert_eq!(meal_phase(at(13, 0)), MealPhase::PostPeak);
        assert_eq!(meal_phase(at(19, 0)), MealPhase::PostPeak);
    }

    #[test]
    fn test_off_peak() {
        assert_eq!(meal_phase(at(10, 59)), MealPhase::OffPeak);
        assert_eq!(meal_phase(at(13, 1)), MealPhase::OffPeak);
        assert_eq!(meal_phase(at(19, 1)), MealPhase::OffPeak);
        assert_eq!(meal_phase(at(0, 0)), MealPhase::OffPeak);
        assert_eq!(time_factor(at(15, 0)), 1.0);
    }

    #[test]
    fn test_peak_meal_label() {
        assert_eq!(peak_meal(at(12, 0)), Some(Meal::Lunch));
        assert_eq!(peak_meal(at(18, 0)), Some(Meal::Dinner));
        assert_eq!(peak_meal(at(11, 39)), None);
        assert!(is_peak_hour(at(12, 0)));
        assert!(!is_peak_hour(at(12, 31)));
        assert_eq!(Meal::Dinner.peak_window(), "17:40-18:30");
    }

    #[test]
    fn test_fractional_hour() {
        assert_eq!(fractional_hour(at(13, 30)), 13.5);
        assert_eq!(fractional_hour(at(11, 0)), 11.0);
    }
}
