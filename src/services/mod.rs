//! Service layer for schedule generation and validation.
//!
//! Services orchestrate the scheduling pipeline: candidate validation,
//! absence enforcement, metrics aggregation, and asynchronous job tracking
//! for callers that poll rather than await.

pub mod absence;
pub mod generator;
pub mod job_tracker;
pub mod metrics;
pub mod processor;
pub mod validation;

pub use absence::enforce_absences;
pub use generator::generate;
pub use job_tracker::{Job, JobStatus, JobTracker, LogEntry, LogLevel};
pub use metrics::compute_metrics;
pub use processor::process_schedule_async;
pub use validation::validate;
