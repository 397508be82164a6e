//! Service layer: business logic orchestration.
//!
//! [`ScheduleService`] validates input, checks event existence, and runs
//! the cascading delete inside a transaction.

pub mod schedule_service;

pub use schedule_service::{EventDetail, ScheduleService};
