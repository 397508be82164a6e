//! Domain layer: event identity, records, and calendar grouping.
//!
//! These types carry no storage logic. Rows decode into [`Event`] and
//! [`Availability`] by column name; creation inputs are [`NewEvent`] and
//! [`NewAvailability`].

pub mod availability;
pub mod calendar;
pub mod event;
pub mod event_id;

pub use availability::{Availability, NewAvailability};
pub use calendar::{CalendarDay, group_by_day};
pub use event::{Event, NewEvent};
pub use event_id::EventId;
