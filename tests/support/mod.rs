//! Shared fixture builders for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use shift_engine::api::{
    AbsenceRecord, ConstraintSet, ScheduleRequest, StaffingRequirement, WeekRange, Weekday,
    WorkerPreference,
};
use std::collections::{BTreeMap, BTreeSet};

/// The week of Monday 2025-06-02 through Sunday 2025-06-08.
pub fn june_week() -> WeekRange {
    WeekRange::new(
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
    )
}

/// A date inside the June fixture week (2 = Monday .. 8 = Sunday).
pub fn june_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

pub fn requirement(dept: &str, count: usize, days: &[Weekday]) -> StaffingRequirement {
    let mut work_hours = BTreeMap::new();
    for day in days {
        work_hours.insert(*day, vec!["09:00-18:00".to_string()]);
    }
    StaffingRequirement {
        business_id: "b1".to_string(),
        department_id: format!("dept-{dept}"),
        department_name: dept.to_string(),
        required_staff_count: count,
        work_hours,
        priority_level: 3,
    }
}

pub fn preference(worker: &str) -> WorkerPreference {
    WorkerPreference {
        worker_id: worker.to_string(),
        worker_name: String::new(),
        business_id: "b1".to_string(),
        department_id: "dept-Morning".to_string(),
        work_fields: vec![],
        preferred_off_days: BTreeSet::new(),
        preferred_work_days: BTreeSet::new(),
        preferred_work_hours: vec![],
        min_work_hours: 4,
        max_work_hours: 8,
        availability_score: 5,
        priority_level: 3,
    }
}

pub fn preference_off(worker: &str, off_days: &[Weekday]) -> WorkerPreference {
    let mut pref = preference(worker);
    pref.preferred_off_days = off_days.iter().copied().collect();
    pref
}

pub fn absence(date: NaiveDate, workers: &[&str]) -> AbsenceRecord {
    AbsenceRecord {
        date,
        unavailable_workers: workers.iter().map(|w| w.to_string()).collect(),
        reasons: None,
    }
}

pub fn request(
    requirements: Vec<StaffingRequirement>,
    preferences: Vec<WorkerPreference>,
) -> ScheduleRequest {
    ScheduleRequest {
        business_id: "b1".to_string(),
        week: june_week(),
        requirements,
        preferences,
        constraints: ConstraintSet::default(),
        absences: vec![],
        external_candidate: None,
    }
}
