use crate::core::time::fractional_hour;
use crate::models::{DiningHallRecord, HallType, PreferenceProfile};
use chrono::Timelike;
use std::fmt;

/// Hour from which the late-night hall is open
const LATE_NIGHT_OPENS_AT: u32 = 16;

/// Staff hall service windows as half-open fractional hours
const STAFF_SERVICE_WINDOWS: [(f64, f64); 2] = [(11.0, 13.5), (17.0, 19.0)];

/// Why a hall was dropped before scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    TypeNotPreferred,
    OutsideBudget,
    LateNightClosed,
    StaffClosed,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ExclusionReason::TypeNotPreferred => "type not preferred",
            ExclusionReason::OutsideBudget => "price outside budget",
            ExclusionReason::LateNightClosed => "late-night hall not open yet",
            ExclusionReason::StaffClosed => "staff hall outside service hours",
        };
        f.write_str(reason)
    }
}

/// Check a hall against the profile's type, budget and opening-hour gates
///
/// Returns the first failing gate, or `None` if the hall may be scored.
#[inline]
pub fn exclusion_reason(
    hall: &DiningHallRecord,
    profile: &PreferenceProfile,
) -> Option<ExclusionReason> {
    if !profile.preferred_types.contains(&hall.hall_type) {
        return Some(ExclusionReason::TypeNotPreferred);
    }

    if !hall.price_range.overlaps(&profile.price_budget) {
        return Some(ExclusionReason::OutsideBudget);
    }

    match hall.hall_type {
        HallType::LateNight if profile.requested_time.hour() < LATE_NIGHT_OPENS_AT => {
            Some(ExclusionReason::LateNightClosed)
        }
        HallType::Staff if !staff_hall_serving(profile) => Some(ExclusionReason::StaffClosed),
        _ => None,
    }
}

#[inline]
pub fn is_eligible(hall: &DiningHallRecord, profile: &PreferenceProfile) -> bool {
    exclusion_reason(hall, profile).is_none()
}

#[inline]
fn staff_hall_serving(profile: &PreferenceProfile) -> bool {
    let hour = fractional_hour(profile.requested_time);
    STAFF_SERVICE_WINDOWS
        .iter()
        .any(|&(open, close)| open <= hour && hour < close)
}
