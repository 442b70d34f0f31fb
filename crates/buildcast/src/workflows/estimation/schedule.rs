use chrono::{Duration, NaiveDate};

pub const BASE_DELAY_DAYS: f64 = 60.0;
pub const MIN_DELAY_DAYS: f64 = 15.0;
pub const MAX_DELAY_DAYS: f64 = 200.0;

const EFFICIENCY_FLOOR: f64 = 0.6;
const SHORTAGE_PENALTY_DAYS: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleEstimate {
    pub delay_days: f64,
    pub completion_date: NaiveDate,
}

pub fn clamp_delay(raw_days: f64) -> f64 {
    raw_days.clamp(MIN_DELAY_DAYS, MAX_DELAY_DAYS)
}

/// Fraction of the predicted cost the budget does not cover; zero when fully funded.
pub fn budget_shortage(predicted_cost: f64, budget: f64) -> f64 {
    if budget < predicted_cost {
        (predicted_cost - budget) / predicted_cost
    } else {
        0.0
    }
}

/// Adds the whole-day part of `delay_days` to the start date, saturating at the
/// last representable date.
pub fn completion_date(start_date: NaiveDate, delay_days: f64) -> NaiveDate {
    start_date
        .checked_add_signed(Duration::days(delay_days.trunc() as i64))
        .unwrap_or(NaiveDate::MAX)
}

/// Latest start date whose longest possible schedule still has a calendar date.
pub fn latest_start_date() -> NaiveDate {
    NaiveDate::MAX
        .checked_sub_signed(Duration::days(MAX_DELAY_DAYS as i64))
        .unwrap_or(NaiveDate::MAX)
}

pub fn estimate_schedule(
    efficiency_score: f64,
    predicted_cost: f64,
    budget: f64,
    start_date: NaiveDate,
) -> ScheduleEstimate {
    let mut delay = BASE_DELAY_DAYS / efficiency_score.max(EFFICIENCY_FLOOR);
    delay += budget_shortage(predicted_cost, budget) * SHORTAGE_PENALTY_DAYS;
    let delay_days = clamp_delay(delay);

    ScheduleEstimate {
        delay_days,
        completion_date: completion_date(start_date, delay_days),
    }
}
