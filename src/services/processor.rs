//! Background schedule processing.
//!
//! Runs the generation pipeline on a blocking worker thread while reporting
//! progress through the job tracker, so async callers can poll the job record
//! instead of awaiting the pipeline directly.

use tracing::{error, info};

use crate::api::{GeneratedSchedule, ScheduleRequest};
use crate::services::generator;
use crate::services::job_tracker::{JobTracker, LogLevel};

/// Process a schedule generation request under an existing job record.
///
/// The job must have been created with [`JobTracker::create_job`]. On
/// success the job completes with a summary payload; on failure it is marked
/// failed with the error message. Either way the outcome is also returned to
/// the caller.
pub async fn process_schedule_async(
    job_id: String,
    tracker: JobTracker,
    request: ScheduleRequest,
) -> Result<GeneratedSchedule, String> {
    tracker.start_job(&job_id);
    tracker.set_progress(&job_id, 5, "Validating request");
    tracker.log(
        &job_id,
        LogLevel::Info,
        format!(
            "Generating schedule for business {} ({} requirements, {} workers)",
            request.business_id,
            request.requirements.len(),
            request.preferences.len()
        ),
    );

    tracker.set_progress(&job_id, 25, "Running scheduling pipeline");
    let outcome = tokio::task::spawn_blocking(move || generator::generate(&request)).await;

    let generated = match outcome {
        Ok(Ok(generated)) => generated,
        Ok(Err(err)) => {
            let message = format!("Schedule generation failed: {err}");
            error!(job_id = %job_id, error = %err, "schedule job failed");
            tracker.fail_job(&job_id, &message);
            return Err(message);
        }
        Err(join_err) => {
            let message = format!("Schedule generation task panicked: {join_err}");
            error!(job_id = %job_id, "schedule job panicked");
            tracker.fail_job(&job_id, &message);
            return Err(message);
        }
    };

    tracker.set_progress(&job_id, 90, "Finalizing schedule");
    if generated.used_fallback && !generated.validation.is_valid {
        tracker.log(
            &job_id,
            LogLevel::Warning,
            format!(
                "External candidate rejected with {} violation(s); deterministic fallback used",
                generated.validation.violations.len()
            ),
        );
    }
    tracker.log(
        &job_id,
        LogLevel::Success,
        format!("Schedule {} generated", generated.schedule_id),
    );

    let summary = serde_json::json!({
        "schedule_id": generated.schedule_id,
        "business_id": generated.business_id,
        "checksum": generated.checksum,
        "used_fallback": generated.used_fallback,
        "is_valid": generated.validation.is_valid,
        "total_workers": generated.metrics.total_workers,
        "total_hours": generated.metrics.total_hours,
    });
    tracker.complete_job(&job_id, Some(summary));
    info!(job_id = %job_id, schedule_id = %generated.schedule_id, "schedule job completed");

    Ok(generated)
}
