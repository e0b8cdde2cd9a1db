//! Deterministic fallback scheduler.
//!
//! Builds a complete weekly assignment from staffing requirements and worker
//! preferences without any external proposal. Assignment is fairness-first
//! greedy: for each weekday and requirement, candidates are ranked by how few
//! days they already work this run, and ties are broken down to the worker id
//! so identical inputs always produce byte-identical output. No randomness,
//! no wall-clock reads.

use std::collections::BTreeMap;
use tracing::debug;

use crate::api::{
    AssignedWorker, DepartmentEntry, ScheduleAssignment, StaffingRequirement, WeekRange, Weekday,
    WorkerPreference,
};

/// Build a weekly assignment for the given requirements and preferences.
///
/// Iterates weekdays in the fixed Monday..Sunday order, then requirements in
/// list order. A weekday with no configured shift for a requirement gets no
/// entry; an empty candidate pool is unmet demand, not an error, and is
/// surfaced only through metrics and validation.
pub fn schedule(
    requirements: &[StaffingRequirement],
    preferences: &[WorkerPreference],
    week: &WeekRange,
) -> ScheduleAssignment {
    debug!(
        week_start = %week.start,
        week_end = %week.end,
        requirements = requirements.len(),
        preferences = preferences.len(),
        "running deterministic scheduler"
    );

    let mut assignment = ScheduleAssignment::empty();
    // Running count of assignments handed to each worker this run; the only
    // mutable state of the algorithm.
    let mut day_counts: BTreeMap<&str, u32> = BTreeMap::new();

    for day in Weekday::ALL {
        for requirement in requirements {
            let shifts = requirement.shifts_on(day);
            if shifts.is_empty() {
                continue;
            }

            let mut pool: Vec<&WorkerPreference> = preferences
                .iter()
                .filter(|pref| {
                    pref.business_id == requirement.business_id
                        && !pref.preferred_off_days.contains(&day)
                })
                .collect();
            if pool.is_empty() {
                continue;
            }

            pool.sort_by(|a, b| {
                let count_a = day_counts.get(a.worker_id.as_str()).copied().unwrap_or(0);
                let count_b = day_counts.get(b.worker_id.as_str()).copied().unwrap_or(0);
                count_a
                    .cmp(&count_b)
                    // Soft off-day tie-break; the hard filter above already
                    // removed off-day matches from this pool, but candidate
                    // pools built elsewhere may not.
                    .then_with(|| {
                        a.preferred_off_days
                            .contains(&day)
                            .cmp(&b.preferred_off_days.contains(&day))
                    })
                    .then_with(|| b.availability_score.cmp(&a.availability_score))
                    .then_with(|| a.worker_id.cmp(&b.worker_id))
            });

            let concrete_hours = shifts[0].clone();
            let mut assigned = Vec::new();
            for pref in pool.into_iter().take(requirement.required_staff_count) {
                assigned.push(AssignedWorker {
                    worker_id: pref.worker_id.clone(),
                    worker_name: pref.display_name().to_string(),
                    work_hours: concrete_hours.clone(),
                });
                *day_counts.entry(pref.worker_id.as_str()).or_insert(0) += 1;
            }

            if !assigned.is_empty() {
                assignment.push_entry(
                    day,
                    DepartmentEntry {
                        department_id: requirement.department_id.clone(),
                        department_name: requirement.department_name.clone(),
                        required_staff_count: requirement.required_staff_count,
                        assigned_workers: assigned,
                        work_hours: shifts.to_vec(),
                    },
                );
            }
        }
    }

    assignment
}
