//! Schedule generation orchestrator.
//!
//! Ties the pipeline together: request validation, the external-candidate
//! validate-or-fallback decision, absence enforcement, metrics, and the final
//! record assembly. The flow is fixed; there is no retry and no partial
//! output. A malformed or invalid candidate is never an error, only a reason
//! to fall back to the deterministic scheduler.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::{GeneratedSchedule, ScheduleRequest, ValidationResult};
use crate::error::{EngineError, EngineResult};
use crate::models::{parse_candidate, schedule_checksum};
use crate::scheduler;
use crate::services::absence::enforce_absences;
use crate::services::metrics::compute_metrics;
use crate::services::validation::validate;

/// Run the full generation pipeline for one request.
///
/// Fails only on an unusable request; candidate problems degrade to the
/// fallback path and are reported through `validation` and `used_fallback`.
pub fn generate(request: &ScheduleRequest) -> EngineResult<GeneratedSchedule> {
    validate_request(request)?;

    info!(
        business_id = %request.business_id,
        week_start = %request.week.start,
        has_candidate = request.external_candidate.is_some(),
        "generating schedule"
    );

    // Absences arrive either at the top level or embedded in the constraint
    // block; both feed the same enforcement pass.
    let mut absences = request.absences.clone();
    absences.extend(request.constraints.absences.iter().cloned());

    let workers_considered = request
        .preferences
        .iter()
        .map(|pref| pref.worker_id.as_str())
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    let (schedule, validation, used_fallback) = match &request.external_candidate {
        Some(raw) => match parse_candidate(raw) {
            Ok(candidate) => {
                let result = validate(
                    &candidate,
                    &request.requirements,
                    &request.preferences,
                    &request.constraints,
                );
                if result.is_valid {
                    (candidate, result, false)
                } else {
                    warn!(
                        business_id = %request.business_id,
                        violations = result.violations.len(),
                        "external candidate rejected, using fallback scheduler"
                    );
                    let fallback =
                        scheduler::schedule(&request.requirements, &request.preferences, &request.week);
                    (fallback, result, true)
                }
            }
            Err(err) => {
                warn!(
                    business_id = %request.business_id,
                    error = %err,
                    "external candidate unparseable, using fallback scheduler"
                );
                let mut result = ValidationResult::new(workers_considered);
                result.add_violation(format!("External candidate is malformed: {err:#}"));
                let fallback =
                    scheduler::schedule(&request.requirements, &request.preferences, &request.week);
                (fallback, result, true)
            }
        },
        None => {
            let fallback =
                scheduler::schedule(&request.requirements, &request.preferences, &request.week);
            (fallback, ValidationResult::new(workers_considered), true)
        }
    };

    // Absence enforcement runs on both paths: a candidate that passed
    // validation may still conflict with late-arriving absences.
    let schedule = enforce_absences(&schedule, &absences, &request.week);
    let metrics = compute_metrics(&schedule, &request.preferences);
    let checksum = schedule_checksum(&schedule);

    info!(
        business_id = %request.business_id,
        used_fallback,
        total_workers = metrics.total_workers,
        checksum = %checksum,
        "schedule generated"
    );

    Ok(GeneratedSchedule {
        schedule_id: Uuid::new_v4().to_string(),
        business_id: request.business_id.clone(),
        week: request.week.clone(),
        schedule,
        metrics,
        validation,
        used_fallback,
        checksum,
        status: "completed".to_string(),
        created_at: Utc::now(),
    })
}

fn validate_request(request: &ScheduleRequest) -> EngineResult<()> {
    if request.business_id.trim().is_empty() {
        return Err(EngineError::invalid_request("business_id must not be empty"));
    }
    if !request.week.is_valid() {
        return Err(EngineError::invalid_request(format!(
            "week must span exactly Monday {} through the following Sunday",
            request.week.start
        )));
    }
    if request.requirements.is_empty() {
        return Err(EngineError::invalid_request(
            "at least one staffing requirement is required",
        ));
    }
    for requirement in &request.requirements {
        if requirement.required_staff_count == 0 {
            return Err(EngineError::invalid_request(format!(
                "required_staff_count must be positive for department '{}'",
                requirement.department_name
            )));
        }
    }
    Ok(())
}
