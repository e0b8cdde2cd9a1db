//! Derived schedule statistics.
//!
//! Computes the reporting metrics for a finalized schedule: distinct worker
//! count, projected total hours, per-worker fairness spread, and the
//! aggregate satisfaction score. Aggregation never fails; empty input yields
//! zero-valued totals and the neutral satisfaction default.

use std::collections::BTreeMap;

use crate::api::{ScheduleAssignment, ScheduleMetrics, WorkerPreference, NOMINAL_SHIFT_HOURS};

/// Per-assignment satisfaction starts here before preference bonuses.
const BASE_SATISFACTION: f64 = 5.0;
/// Bonus when the weekday is in the worker's preferred-work set.
const PREFERRED_DAY_BONUS: f64 = 1.0;
/// Larger bonus when the concrete shift matches a preferred time range.
const PREFERRED_HOURS_BONUS: f64 = 2.0;
/// Weight applied to the worker's availability score offset from neutral.
const AVAILABILITY_WEIGHT: f64 = 0.3;
/// Reported when the schedule has no assignments at all. A constant rather
/// than a computed aggregate; kept from the reference behavior so an empty
/// week does not read as total dissatisfaction.
const EMPTY_SCHEDULE_SATISFACTION: f64 = 8.5;

/// Compute the reporting metrics for a finalized schedule.
///
/// The preference list feeds the satisfaction score; workers appearing in the
/// schedule without a preference record score the base value.
pub fn compute_metrics(
    schedule: &ScheduleAssignment,
    preferences: &[WorkerPreference],
) -> ScheduleMetrics {
    let worker_days = schedule.worker_days();
    let total_workers = worker_days.len();
    let total_hours = schedule.assignment_count() as u32 * NOMINAL_SHIFT_HOURS;

    let day_counts: Vec<usize> = worker_days.values().map(|days| days.len()).collect();
    let fairness_spread = match (day_counts.iter().max(), day_counts.iter().min()) {
        (Some(max), Some(min)) => (max - min) as u32,
        _ => 0,
    };

    let prefs_by_worker: BTreeMap<&str, &WorkerPreference> = preferences
        .iter()
        .map(|pref| (pref.worker_id.as_str(), pref))
        .collect();

    let mut scores = Vec::new();
    for (day, _, worker) in schedule.assignments() {
        let mut score = BASE_SATISFACTION;
        if let Some(pref) = prefs_by_worker.get(worker.worker_id.as_str()) {
            if pref.preferred_work_days.contains(&day) {
                score += PREFERRED_DAY_BONUS;
            }
            if pref
                .preferred_work_hours
                .iter()
                .any(|hours| hours == &worker.work_hours)
            {
                score += PREFERRED_HOURS_BONUS;
            }
            score += (pref.availability_score as f64 - 5.0) * AVAILABILITY_WEIGHT;
        }
        scores.push(score.clamp(1.0, 10.0));
    }

    let satisfaction_score = if scores.is_empty() {
        EMPTY_SCHEDULE_SATISFACTION
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    ScheduleMetrics {
        total_workers,
        total_hours,
        fairness_spread,
        satisfaction_score,
    }
}
