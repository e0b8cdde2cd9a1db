//! Content fingerprint for finalized schedules.
//!
//! The deterministic scheduler guarantees byte-identical output for identical
//! inputs; the fingerprint makes that comparable without hauling the whole
//! structure around. `ScheduleAssignment` is backed by ordered maps, so its
//! JSON encoding is canonical.

use sha2::{Digest, Sha256};

use crate::api::ScheduleAssignment;

/// Compute a sha256 fingerprint over the canonical JSON encoding.
pub fn schedule_checksum(schedule: &ScheduleAssignment) -> String {
    // Serialization of the plain value types cannot fail.
    let canonical = serde_json::to_vec(schedule).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AssignedWorker, DepartmentEntry, Weekday};

    fn one_entry_schedule(worker_id: &str) -> ScheduleAssignment {
        let mut schedule = ScheduleAssignment::empty();
        schedule.push_entry(
            Weekday::Monday,
            DepartmentEntry {
                department_id: "d1".to_string(),
                department_name: "Morning".to_string(),
                required_staff_count: 1,
                assigned_workers: vec![AssignedWorker {
                    worker_id: worker_id.to_string(),
                    worker_name: worker_id.to_string(),
                    work_hours: "09:00-18:00".to_string(),
                }],
                work_hours: vec!["09:00-18:00".to_string()],
            },
        );
        schedule
    }

    #[test]
    fn test_checksum_is_stable() {
        let a = one_entry_schedule("w1");
        let b = one_entry_schedule("w1");
        assert_eq!(schedule_checksum(&a), schedule_checksum(&b));
    }

    #[test]
    fn test_checksum_differs_for_different_schedules() {
        let a = one_entry_schedule("w1");
        let b = one_entry_schedule("w2");
        assert_ne!(schedule_checksum(&a), schedule_checksum(&b));
    }

    #[test]
    fn test_checksum_is_hex_sha256() {
        let checksum = schedule_checksum(&ScheduleAssignment::empty());
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
