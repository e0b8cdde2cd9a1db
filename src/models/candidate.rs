//! External candidate schedule parsing.
//!
//! An externally produced candidate (e.g. from a generative model) arrives as
//! untrusted JSON in the `ScheduleAssignment` shape. This module performs the
//! structural parse only; a candidate that parses still goes through full
//! policy validation before it can be accepted. A candidate that fails to
//! parse is treated the same as one that fails validation: the orchestrator
//! falls back to the deterministic scheduler instead of propagating an error.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::api::{DepartmentEntry, ScheduleAssignment, Weekday};

/// Parse an external candidate payload into a `ScheduleAssignment`.
///
/// Accepts either a wrapper object `{"days": { "monday": [...], ... }}` (also
/// under a `"schedule"` key) or the direct weekday-keyed map. All seven
/// weekday keys must be present and every day's value must be a list of
/// department entries.
pub fn parse_candidate(value: &Value) -> Result<ScheduleAssignment> {
    let root = value
        .as_object()
        .context("external candidate must be a JSON object")?;

    // Try wrapper form first, then fall back to the direct map form.
    let day_map = match root.get("days").or_else(|| root.get("schedule")) {
        Some(inner) => inner
            .as_object()
            .context("candidate 'days' wrapper must be a JSON object")?,
        None => root,
    };

    let mut days: BTreeMap<Weekday, Vec<DepartmentEntry>> = BTreeMap::new();
    for day in Weekday::ALL {
        let day_value = match day_map.get(day.label()) {
            Some(v) => v,
            None => bail!("candidate is missing weekday key '{}'", day.label()),
        };
        if !day_value.is_array() {
            bail!("candidate value for '{}' is not a list", day.label());
        }
        let entries: Vec<DepartmentEntry> = serde_json::from_value(day_value.clone())
            .with_context(|| format!("invalid department entries for '{}'", day.label()))?;
        days.insert(day, entries);
    }

    Ok(ScheduleAssignment { days })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_week(monday: Value) -> Value {
        json!({
            "monday": monday,
            "tuesday": [],
            "wednesday": [],
            "thursday": [],
            "friday": [],
            "saturday": [],
            "sunday": []
        })
    }

    #[test]
    fn test_parse_direct_map() {
        let candidate = full_week(json!([
            {
                "department_id": "d1",
                "department_name": "Morning",
                "required_staff_count": 2,
                "assigned_workers": [
                    { "worker_id": "w1", "worker_name": "Ana", "work_hours": "09:00-18:00" }
                ],
                "work_hours": ["09:00-18:00"]
            }
        ]));

        let schedule = parse_candidate(&candidate).unwrap();
        let entries = schedule.entries(Weekday::Monday);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].department_name, "Morning");
        assert_eq!(entries[0].assigned_workers[0].worker_id, "w1");
        assert!(schedule.entries(Weekday::Sunday).is_empty());
    }

    #[test]
    fn test_parse_days_wrapper() {
        let candidate = json!({ "days": full_week(json!([])) });
        let schedule = parse_candidate(&candidate).unwrap();
        assert_eq!(schedule.days.len(), 7);
    }

    #[test]
    fn test_missing_weekday_key_fails() {
        let mut candidate = full_week(json!([]));
        candidate.as_object_mut().unwrap().remove("friday");
        let err = parse_candidate(&candidate).unwrap_err();
        assert!(err.to_string().contains("friday"));
    }

    #[test]
    fn test_non_list_day_value_fails() {
        let mut candidate = full_week(json!([]));
        candidate["tuesday"] = json!("09:00-18:00");
        let err = parse_candidate(&candidate).unwrap_err();
        assert!(err.to_string().contains("tuesday"));
    }

    #[test]
    fn test_non_object_candidate_fails() {
        assert!(parse_candidate(&json!([1, 2, 3])).is_err());
        assert!(parse_candidate(&json!("schedule")).is_err());
    }

    #[test]
    fn test_sparse_entries_parse_leniently() {
        // Missing fields default to empty; the validator flags them later.
        let candidate = full_week(json!([{ "department_name": "Morning" }]));
        let schedule = parse_candidate(&candidate).unwrap();
        let entries = schedule.entries(Weekday::Monday);
        assert_eq!(entries[0].required_staff_count, 1);
        assert!(entries[0].assigned_workers.is_empty());
    }
}
