//! # Shift Engine
//!
//! Weekly shift roster assignment and validation engine.
//!
//! Given a business's declared staffing requirements and its workers'
//! preference records, this crate produces a day-by-department-by-worker
//! assignment for one week, validates candidate schedules against labor-policy
//! constraints, and deterministically falls back to its own scheduler when an
//! externally produced candidate fails validation.
//!
//! The engine is a pure function-call surface: it consumes plain data
//! structures (requirements, preferences, constraint flags, absence records)
//! and returns a schedule plus diagnostics. HTTP routing, authentication, and
//! persistence are external collaborators and never appear here.
//!
//! ## Architecture
//!
//! - [`api`]: domain value objects shared across the engine
//! - [`models`]: weekday/week handling, candidate parsing, fingerprints
//! - [`scheduler`]: the deterministic fairness-first scheduler
//! - [`services`]: validation, absence enforcement, metrics, orchestration,
//!   and the background job tracker
//! - [`config`]: TOML-backed defaults for labor-policy thresholds
//! - [`error`]: the engine error taxonomy

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod services;
