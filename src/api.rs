//! Public API surface for the scheduling engine.
//!
//! This file consolidates the value objects exchanged with the engine: the
//! staffing/preference/absence inputs, the weekly schedule assignment output,
//! and the validation/metrics diagnostics. All types derive
//! Serialize/Deserialize for JSON serialization and are passed by value; the
//! engine holds no state beyond a single scheduling call.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub use crate::models::week::{Weekday, WeekRange};

/// Nominal length of one shift in hours, used for projected-hour checks and
/// the total-hours metric.
pub const NOMINAL_SHIFT_HOURS: u32 = 8;

// ============================================================================
// Inputs
// ============================================================================

/// A department's declared staffing demand for the week.
///
/// `work_hours` maps each weekday to its configured shift time ranges
/// (strings like `"09:00-18:00"`). A missing or empty list means the
/// department has no shift that day. Immutable during a scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingRequirement {
    pub business_id: String,
    pub department_id: String,
    pub department_name: String,
    #[serde(default = "default_required_staff")]
    pub required_staff_count: usize,
    #[serde(default)]
    pub work_hours: BTreeMap<Weekday, Vec<String>>,
    #[serde(default = "default_priority")]
    pub priority_level: u8,
}

fn default_required_staff() -> usize {
    1
}

fn default_priority() -> u8 {
    3
}

impl StaffingRequirement {
    /// Configured shift ranges for a weekday; empty slice when no shift is
    /// configured that day.
    pub fn shifts_on(&self, day: Weekday) -> &[String] {
        self.work_hours.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A worker's declared availability and desirability constraints.
///
/// The preferred-off and preferred-work sets may overlap in source data; the
/// engine tolerates the overlap rather than rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerPreference {
    pub worker_id: String,
    /// Display name carried into assignment entries. Falls back to the worker
    /// id when empty.
    #[serde(default)]
    pub worker_name: String,
    pub business_id: String,
    pub department_id: String,
    #[serde(default)]
    pub work_fields: Vec<String>,
    #[serde(default)]
    pub preferred_off_days: BTreeSet<Weekday>,
    #[serde(default)]
    pub preferred_work_days: BTreeSet<Weekday>,
    #[serde(default)]
    pub preferred_work_hours: Vec<String>,
    #[serde(default = "default_min_work_hours")]
    pub min_work_hours: u32,
    #[serde(default = "default_max_work_hours")]
    pub max_work_hours: u32,
    #[serde(default = "default_availability")]
    pub availability_score: u8,
    #[serde(default = "default_priority")]
    pub priority_level: u8,
}

fn default_min_work_hours() -> u32 {
    4
}

fn default_max_work_hours() -> u32 {
    8
}

fn default_availability() -> u8 {
    5
}

impl WorkerPreference {
    /// Display name for assignment entries.
    pub fn display_name(&self) -> &str {
        if self.worker_name.is_empty() {
            &self.worker_id
        } else {
            &self.worker_name
        }
    }
}

/// A hard exclusion of workers from assignment on one calendar date.
///
/// Dates outside the scheduling week are ignored, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    pub date: chrono::NaiveDate,
    #[serde(alias = "unavailable_employees")]
    pub unavailable_workers: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<String>>,
}

// ============================================================================
// Constraint options
// ============================================================================

/// Named labor-policy options recognized by the validator.
///
/// Each policy check is gated by its own flag; a flag that is absent (false)
/// means the check is skipped, never defaulted to strict. The numeric options
/// carry the thresholds applied when the matching flag is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSet {
    /// Enable the rest-hours check between consecutive working days.
    pub enforce_rest_hours: bool,
    /// Minimum rest between end-of-shift and the next day's start, in hours.
    pub rest_hours_required: f64,

    /// Enable the consecutive-working-days cap.
    pub limit_consecutive_days: bool,
    pub max_consecutive_days: u32,

    /// Enable the weekly free-day floor.
    pub ensure_weekly_rest: bool,
    #[serde(alias = "weekly_rest_required")]
    pub weekly_rest_days: u32,

    /// Enable the projected daily-hours cap.
    pub limit_daily_hours: bool,
    pub max_daily_hours: u32,

    /// Enable the projected weekly-hours cap.
    pub limit_weekly_hours: bool,
    pub max_weekly_hours: u32,

    /// Whether one worker may appear in multiple department entries on the
    /// same day. Absent means the duplicate check is skipped entirely;
    /// `Some(false)` enables it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_duplicate_assignments: Option<bool>,

    /// Enable the fairness-spread check on per-worker day counts.
    #[serde(alias = "limit_employee_assignments")]
    pub balance_workload: bool,

    /// Informational weighting hint only; never gates a check.
    pub prioritize_preferences: bool,

    /// Absence records may also arrive inside the constraint map (the request
    /// shape the original callers use); the orchestrator merges these with the
    /// request-level list.
    pub absences: Vec<AbsenceRecord>,
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            enforce_rest_hours: false,
            rest_hours_required: 11.0,
            limit_consecutive_days: false,
            max_consecutive_days: 6,
            ensure_weekly_rest: false,
            weekly_rest_days: 1,
            limit_daily_hours: false,
            max_daily_hours: NOMINAL_SHIFT_HOURS,
            limit_weekly_hours: false,
            max_weekly_hours: 40,
            allow_duplicate_assignments: None,
            balance_workload: false,
            prioritize_preferences: false,
            absences: Vec::new(),
        }
    }
}

// ============================================================================
// Schedule output
// ============================================================================

/// One worker assigned to a department shift.
///
/// Fields default to empty on deserialization so an untrusted candidate
/// parses leniently; the validator flags the missing pieces one by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedWorker {
    #[serde(default)]
    pub worker_id: String,
    #[serde(default)]
    pub worker_name: String,
    /// Concrete shift for this assignment, e.g. `"09:00-18:00"`.
    #[serde(default)]
    pub work_hours: String,
}

/// A department's staffing for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentEntry {
    #[serde(default)]
    pub department_id: String,
    #[serde(default)]
    pub department_name: String,
    #[serde(default = "default_required_staff")]
    pub required_staff_count: usize,
    #[serde(default)]
    pub assigned_workers: Vec<AssignedWorker>,
    /// The configured shift ranges the assignment was drawn from.
    #[serde(default)]
    pub work_hours: Vec<String>,
}

/// The weekly assignment: an ordered list of department entries per weekday.
///
/// All seven weekday keys are always present, even when a day's list is
/// empty. A department with no configured shift on a day contributes no entry
/// for that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleAssignment {
    pub days: BTreeMap<Weekday, Vec<DepartmentEntry>>,
}

impl ScheduleAssignment {
    /// An empty schedule with all seven weekday keys present.
    pub fn empty() -> Self {
        let mut days = BTreeMap::new();
        for day in Weekday::ALL {
            days.insert(day, Vec::new());
        }
        Self { days }
    }

    /// Department entries for a weekday.
    pub fn entries(&self, day: Weekday) -> &[DepartmentEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append an entry to a weekday's list.
    pub fn push_entry(&mut self, day: Weekday, entry: DepartmentEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    /// Iterate every individual assignment as (weekday, entry, worker).
    pub fn assignments(&self) -> impl Iterator<Item = (Weekday, &DepartmentEntry, &AssignedWorker)> {
        self.days.iter().flat_map(|(day, entries)| {
            entries.iter().flat_map(move |entry| {
                entry
                    .assigned_workers
                    .iter()
                    .map(move |worker| (*day, entry, worker))
            })
        })
    }

    /// Distinct weekdays on which each worker appears.
    pub fn worker_days(&self) -> BTreeMap<String, BTreeSet<Weekday>> {
        let mut out: BTreeMap<String, BTreeSet<Weekday>> = BTreeMap::new();
        for (day, _, worker) in self.assignments() {
            out.entry(worker.worker_id.clone()).or_default().insert(day);
        }
        out
    }

    /// Total count of individual assignment records.
    pub fn assignment_count(&self) -> usize {
        self.assignments().count()
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Outcome of validating one candidate schedule.
///
/// Ephemeral: produced per validation call, never persisted. `is_valid` is
/// true iff the violation list is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<String>,
    /// Count of distinct workers considered during validation.
    pub workers_considered: usize,
}

impl ValidationResult {
    /// A passing result with no violations.
    pub fn new(workers_considered: usize) -> Self {
        Self {
            is_valid: true,
            violations: Vec::new(),
            workers_considered,
        }
    }

    /// Record a violation and mark the result invalid.
    pub fn add_violation(&mut self, violation: impl Into<String>) {
        self.is_valid = false;
        self.violations.push(violation.into());
    }
}

/// Derived statistics for a finalized schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Distinct workers appearing anywhere in the schedule.
    pub total_workers: usize,
    /// Assignment count times the nominal shift length.
    pub total_hours: u32,
    /// Max minus min per-worker day count, over workers with at least one
    /// assignment.
    pub fairness_spread: u32,
    /// Aggregate satisfaction, bounded to [1, 10].
    pub satisfaction_score: f64,
}

// ============================================================================
// Orchestrator request/response
// ============================================================================

/// A complete scheduling request for one business and one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub business_id: String,
    pub week: WeekRange,
    #[serde(alias = "department_staffing")]
    pub requirements: Vec<StaffingRequirement>,
    #[serde(default, alias = "employee_preferences")]
    pub preferences: Vec<WorkerPreference>,
    #[serde(default, alias = "schedule_constraints")]
    pub constraints: ConstraintSet,
    #[serde(default)]
    pub absences: Vec<AbsenceRecord>,
    /// Untrusted externally produced candidate in the `ScheduleAssignment`
    /// shape; fully validated before acceptance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_candidate: Option<serde_json::Value>,
}

/// The finalized schedule record returned by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    pub schedule_id: String,
    pub business_id: String,
    pub week: WeekRange,
    pub schedule: ScheduleAssignment,
    pub metrics: ScheduleMetrics,
    /// The validation result used to accept or reject the external candidate;
    /// a passing empty result when no candidate was supplied.
    pub validation: ValidationResult,
    /// True when the deterministic scheduler produced the returned schedule
    /// (no candidate supplied, or the candidate failed validation).
    pub used_fallback: bool,
    /// Content fingerprint of the finalized assignment.
    pub checksum: String,
    /// Lifecycle state of the stored record. The orchestrator only returns
    /// finished schedules, so this is always `"completed"` here; revision
    /// flows downstream may overwrite it.
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
