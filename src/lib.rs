//! # availability-board
//!
//! Scheduling-coordination service: an organizer creates an event, shares
//! the invite link, and collaborators submit availability windows with a
//! free-text note. The organizer sees every submission on one page.
//!
//! There is no optimal-time computation and no authentication; the store
//! is the only shared state.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP forms, JSON pages)
//!     │
//!     ├── Handlers (api/)
//!     │
//!     ├── ScheduleService (service/)
//!     │
//!     ├── EventRepository / ResponseRepository (persistence/)
//!     │
//!     └── Storage: SQLite via sqlx
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
