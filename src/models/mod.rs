//! Data models: weekday/week handling, candidate parsing, and fingerprints.

pub mod candidate;
pub mod checksum;
pub mod week;

pub use candidate::parse_candidate;
pub use checksum::schedule_checksum;
pub use week::{WeekRange, Weekday};
