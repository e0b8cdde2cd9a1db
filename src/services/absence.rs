//! Absence enforcement pass.
//!
//! Strips assignments that conflict with declared absences, independent of
//! how the schedule was produced. Removal is set-based, so the pass is
//! idempotent and insensitive to the order of the absence records. It never
//! adds entries and never deletes one: an entry whose worker list becomes
//! empty stays in place with an empty list, because downstream consumers key
//! off entry presence.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::api::{AbsenceRecord, ScheduleAssignment, WeekRange, Weekday};

/// Remove every assignment that conflicts with an in-week absence.
///
/// Absence dates outside `week` are ignored, not errors.
pub fn enforce_absences(
    schedule: &ScheduleAssignment,
    absences: &[AbsenceRecord],
    week: &WeekRange,
) -> ScheduleAssignment {
    let mut removals: BTreeMap<Weekday, BTreeSet<&str>> = BTreeMap::new();
    for absence in absences {
        match week.weekday_of(absence.date) {
            Some(day) => {
                removals
                    .entry(day)
                    .or_default()
                    .extend(absence.unavailable_workers.iter().map(String::as_str));
            }
            None => {
                debug!(date = %absence.date, "ignoring absence outside the scheduling week");
            }
        }
    }

    let mut result = schedule.clone();
    for (day, worker_ids) in &removals {
        if let Some(entries) = result.days.get_mut(day) {
            for entry in entries {
                entry
                    .assigned_workers
                    .retain(|worker| !worker_ids.contains(worker.worker_id.as_str()));
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AssignedWorker, DepartmentEntry};
    use chrono::NaiveDate;

    fn week() -> WeekRange {
        WeekRange::new(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
        )
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn absence(d: u32, workers: &[&str]) -> AbsenceRecord {
        AbsenceRecord {
            date: date(d),
            unavailable_workers: workers.iter().map(|w| w.to_string()).collect(),
            reasons: None,
        }
    }

    fn sample_schedule() -> ScheduleAssignment {
        let mut schedule = ScheduleAssignment::empty();
        schedule.push_entry(
            Weekday::Monday,
            DepartmentEntry {
                department_id: "d1".to_string(),
                department_name: "Morning".to_string(),
                required_staff_count: 2,
                assigned_workers: vec![
                    AssignedWorker {
                        worker_id: "w1".to_string(),
                        worker_name: "w1".to_string(),
                        work_hours: "09:00-18:00".to_string(),
                    },
                    AssignedWorker {
                        worker_id: "w2".to_string(),
                        worker_name: "w2".to_string(),
                        work_hours: "09:00-18:00".to_string(),
                    },
                ],
                work_hours: vec!["09:00-18:00".to_string()],
            },
        );
        schedule
    }

    #[test]
    fn test_removes_absent_worker_on_mapped_weekday() {
        // 2025-06-02 is the Monday of the week.
        let result = enforce_absences(&sample_schedule(), &[absence(2, &["w1"])], &week());
        let workers = &result.entries(Weekday::Monday)[0].assigned_workers;
        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].worker_id, "w2");
    }

    #[test]
    fn test_out_of_week_absence_is_ignored() {
        // 2025-06-09 is the Monday after the week ends.
        let result = enforce_absences(&sample_schedule(), &[absence(9, &["w1"])], &week());
        assert_eq!(result, sample_schedule());
    }

    #[test]
    fn test_emptied_entry_stays_present() {
        let result = enforce_absences(&sample_schedule(), &[absence(2, &["w1", "w2"])], &week());
        let entries = result.entries(Weekday::Monday);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].assigned_workers.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let absences = vec![absence(2, &["w1"])];
        let once = enforce_absences(&sample_schedule(), &absences, &week());
        let twice = enforce_absences(&once, &absences, &week());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_record_order_does_not_matter() {
        let forward = vec![absence(2, &["w1"]), absence(2, &["w2"])];
        let reversed = vec![absence(2, &["w2"]), absence(2, &["w1"])];
        let a = enforce_absences(&sample_schedule(), &forward, &week());
        let b = enforce_absences(&sample_schedule(), &reversed, &week());
        assert_eq!(a, b);
    }

    #[test]
    fn test_unlisted_days_untouched() {
        let mut schedule = sample_schedule();
        schedule.push_entry(
            Weekday::Tuesday,
            DepartmentEntry {
                department_id: "d1".to_string(),
                department_name: "Morning".to_string(),
                required_staff_count: 1,
                assigned_workers: vec![AssignedWorker {
                    worker_id: "w1".to_string(),
                    worker_name: "w1".to_string(),
                    work_hours: "09:00-18:00".to_string(),
                }],
                work_hours: vec!["09:00-18:00".to_string()],
            },
        );
        let result = enforce_absences(&schedule, &[absence(2, &["w1"])], &week());
        // Monday's w1 is gone, Tuesday's stays.
        let monday = &result.entries(Weekday::Monday)[0].assigned_workers;
        assert!(monday.iter().all(|w| w.worker_id != "w1"));
        assert_eq!(result.entries(Weekday::Tuesday)[0].assigned_workers.len(), 1);
    }
}
