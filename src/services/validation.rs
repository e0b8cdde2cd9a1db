//! Schedule validation with itemized violation reporting.
//!
//! Checks a candidate schedule, from any source, against structural rules and
//! the labor-policy constraints the caller enabled. Structural checks always
//! run; each policy check runs only when its flag in the constraint set is
//! enabled. The validator has no side effects, never mutates its input, and
//! reports one independently constructed message per violation.

use std::collections::{BTreeMap, BTreeSet};

use crate::api::{
    ConstraintSet, ScheduleAssignment, StaffingRequirement, ValidationResult, Weekday,
    WorkerPreference, NOMINAL_SHIFT_HOURS,
};

/// Validate a candidate schedule against the configured requirements and the
/// enabled policy constraints.
pub fn validate(
    schedule: &ScheduleAssignment,
    requirements: &[StaffingRequirement],
    preferences: &[WorkerPreference],
    constraints: &ConstraintSet,
) -> ValidationResult {
    let workers_considered = preferences
        .iter()
        .map(|p| p.worker_id.as_str())
        .collect::<BTreeSet<_>>()
        .len();
    let mut result = ValidationResult::new(workers_considered);

    check_structure(schedule, requirements, preferences, &mut result);
    check_policies(schedule, constraints, &mut result);

    result
}

// ============================================================================
// Structural checks (always run)
// ============================================================================

fn check_structure(
    schedule: &ScheduleAssignment,
    requirements: &[StaffingRequirement],
    preferences: &[WorkerPreference],
    result: &mut ValidationResult,
) {
    for day in Weekday::ALL {
        if !schedule.days.contains_key(&day) {
            result.add_violation(format!("Schedule is missing the '{}' key", day));
        }
    }

    // Entry and worker record shape.
    for (day, entries) in &schedule.days {
        for entry in entries {
            if entry.department_name.is_empty() {
                result.add_violation(format!("An entry on {} has no department name", day));
            }
            for worker in &entry.assigned_workers {
                if worker.worker_id.is_empty() {
                    result.add_violation(format!(
                        "An assigned worker in '{}' on {} has no worker id",
                        entry.department_name, day
                    ));
                }
                if worker.worker_name.is_empty() {
                    result.add_violation(format!(
                        "Assigned worker '{}' in '{}' on {} has no display name",
                        worker.worker_id, entry.department_name, day
                    ));
                }
                if worker.work_hours.is_empty() {
                    result.add_violation(format!(
                        "Assigned worker '{}' in '{}' on {} has no work hours",
                        worker.worker_id, entry.department_name, day
                    ));
                }
            }
        }
    }

    // Every entry must name a configured department.
    for (day, entries) in &schedule.days {
        for entry in entries {
            let configured = requirements.iter().any(|req| {
                req.department_name == entry.department_name
                    || (!entry.department_id.is_empty() && req.department_id == entry.department_id)
            });
            if !configured {
                result.add_violation(format!(
                    "Department '{}' on {} is not configured for this business",
                    entry.department_name, day
                ));
            }
        }
    }

    // Every configured day/department pair must be present and fully staffed.
    // A pair no worker could staff (every matching worker has the day off) is
    // unmet demand, not a violation; it surfaces through metrics instead.
    for requirement in requirements {
        for day in Weekday::ALL {
            if requirement.shifts_on(day).is_empty() {
                continue;
            }
            let staffable = preferences.iter().any(|pref| {
                pref.business_id == requirement.business_id
                    && !pref.preferred_off_days.contains(&day)
            });
            if !staffable {
                continue;
            }
            let entry = schedule.entries(day).iter().find(|entry| {
                entry.department_name == requirement.department_name
                    || (!entry.department_id.is_empty()
                        && entry.department_id == requirement.department_id)
            });
            match entry {
                None => result.add_violation(format!(
                    "Missing entry for department '{}' on {}",
                    requirement.department_name, day
                )),
                Some(entry) if entry.assigned_workers.len() < requirement.required_staff_count => {
                    result.add_violation(format!(
                        "Department '{}' on {} is understaffed: {} assigned of {} required",
                        requirement.department_name,
                        day,
                        entry.assigned_workers.len(),
                        requirement.required_staff_count
                    ))
                }
                Some(_) => {}
            }
        }
    }
}

// ============================================================================
// Policy checks (each gated by a constraint flag)
// ============================================================================

fn check_policies(
    schedule: &ScheduleAssignment,
    constraints: &ConstraintSet,
    result: &mut ValidationResult,
) {
    let worker_days = schedule.worker_days();
    let per_day_counts = per_worker_day_assignment_counts(schedule);

    if constraints.allow_duplicate_assignments == Some(false) {
        for (worker_id, day_counts) in &per_day_counts {
            for (day, count) in day_counts {
                if *count > 1 {
                    result.add_violation(format!(
                        "Worker '{}' is assigned to {} departments on {}",
                        worker_id, count, day
                    ));
                }
            }
        }
    }

    if constraints.enforce_rest_hours {
        check_rest_hours(schedule, constraints.rest_hours_required, result);
    }

    if constraints.limit_consecutive_days {
        for (worker_id, days) in &worker_days {
            let run = longest_cyclic_run(days);
            if run > constraints.max_consecutive_days {
                result.add_violation(format!(
                    "Worker '{}' works {} consecutive days (max {})",
                    worker_id, run, constraints.max_consecutive_days
                ));
            }
        }
    }

    if constraints.ensure_weekly_rest {
        for (worker_id, days) in &worker_days {
            let rest_days = 7 - days.len() as u32;
            if rest_days < constraints.weekly_rest_days {
                result.add_violation(format!(
                    "Worker '{}' has {} rest days this week (minimum {})",
                    worker_id, rest_days, constraints.weekly_rest_days
                ));
            }
        }
    }

    if constraints.limit_daily_hours {
        for (worker_id, day_counts) in &per_day_counts {
            for (day, count) in day_counts {
                let projected = count * NOMINAL_SHIFT_HOURS;
                if projected > constraints.max_daily_hours {
                    result.add_violation(format!(
                        "Worker '{}' is projected for {} hours on {} (max {})",
                        worker_id, projected, day, constraints.max_daily_hours
                    ));
                }
            }
        }
    }

    if constraints.limit_weekly_hours {
        for (worker_id, day_counts) in &per_day_counts {
            let assignments: u32 = day_counts.values().sum();
            let projected = assignments * NOMINAL_SHIFT_HOURS;
            if projected > constraints.max_weekly_hours {
                result.add_violation(format!(
                    "Worker '{}' is projected for {} hours this week (max {})",
                    worker_id, projected, constraints.max_weekly_hours
                ));
            }
        }
    }

    if constraints.balance_workload {
        let counts: Vec<u32> = worker_days.values().map(|days| days.len() as u32).collect();
        if let (Some(max), Some(min)) = (counts.iter().max(), counts.iter().min()) {
            let spread = max - min;
            if spread > 2 {
                result.add_violation(format!(
                    "Workload spread is {} days between the most- and least-assigned worker (max 2)",
                    spread
                ));
            }
        }
    }
}

/// Number of assignment records per worker per weekday.
fn per_worker_day_assignment_counts(
    schedule: &ScheduleAssignment,
) -> BTreeMap<String, BTreeMap<Weekday, u32>> {
    let mut out: BTreeMap<String, BTreeMap<Weekday, u32>> = BTreeMap::new();
    for (day, _, worker) in schedule.assignments() {
        *out.entry(worker.worker_id.clone())
            .or_default()
            .entry(day)
            .or_insert(0) += 1;
    }
    out
}

fn check_rest_hours(schedule: &ScheduleAssignment, required: f64, result: &mut ValidationResult) {
    // End-of-shift and start-of-shift per worker per day; unparseable ranges
    // are skipped rather than reported, the structural checks already cover
    // shape problems.
    let mut spans: BTreeMap<&str, BTreeMap<Weekday, (f64, f64)>> = BTreeMap::new();
    for (day, _, worker) in schedule.assignments() {
        if let Some((start, end)) = parse_time_range(&worker.work_hours) {
            let slot = spans
                .entry(worker.worker_id.as_str())
                .or_default()
                .entry(day)
                .or_insert((start, end));
            slot.0 = slot.0.min(start);
            slot.1 = slot.1.max(end);
        }
    }

    for (worker_id, days) in &spans {
        for pair in Weekday::ALL.windows(2) {
            let (today, next) = (pair[0], pair[1]);
            if let (Some((_, end)), Some((next_start, _))) = (days.get(&today), days.get(&next)) {
                let gap = (24.0 - end) + next_start;
                if gap < required {
                    result.add_violation(format!(
                        "Worker '{}' has {:.1}h rest between {} and {} (minimum {:.1}h)",
                        worker_id, gap, today, next, required
                    ));
                }
            }
        }
    }
}

/// Parse `"HH:MM-HH:MM"` into fractional start/end hours. An overnight range
/// wraps past midnight, so its end is normalized past 24 (`"22:00-06:00"`
/// becomes `(22.0, 30.0)`).
fn parse_time_range(range: &str) -> Option<(f64, f64)> {
    let (start, end) = range.split_once('-')?;
    let start = parse_clock(start)?;
    let mut end = parse_clock(end)?;
    if end < start {
        end += 24.0;
    }
    Some((start, end))
}

fn parse_clock(clock: &str) -> Option<f64> {
    let (hours, minutes) = clock.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 24 || minutes > 59 {
        return None;
    }
    Some(hours as f64 + minutes as f64 / 60.0)
}

/// Longest run of present weekdays under Mon..Sun cyclic adjacency.
fn longest_cyclic_run(days: &BTreeSet<Weekday>) -> u32 {
    if days.len() == 7 {
        return 7;
    }
    let present: Vec<bool> = Weekday::ALL.iter().map(|day| days.contains(day)).collect();
    let mut longest = 0u32;
    let mut current = 0u32;
    // Doubling the week covers runs that wrap across Sunday into Monday.
    for i in 0..14 {
        if present[i % 7] {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest.min(7)
}
