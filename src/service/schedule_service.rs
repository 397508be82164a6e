//! Schedule service: composes the repositories into use cases.

use crate::domain::{
    Availability, CalendarDay, Event, EventId, NewAvailability, NewEvent, group_by_day,
};
use crate::error::BoardError;
use crate::persistence::{EventRepository, ResponseRepository, Storage};

/// An event together with every availability submitted for it.
#[derive(Debug, Clone)]
pub struct EventDetail {
    /// The event.
    pub event: Event,
    /// Submissions in submission order.
    pub responses: Vec<Availability>,
}

/// Orchestration layer for all board operations.
///
/// Stateless coordinator over [`Storage`]: every method leases pooled
/// connections through the repositories and holds nothing between calls.
#[derive(Debug, Clone)]
pub struct ScheduleService {
    storage: Storage,
    events: EventRepository,
    responses: ResponseRepository,
}

impl ScheduleService {
    /// Creates a service over an opened store.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        let events = EventRepository::new(storage.pool().clone());
        let responses = ResponseRepository::new(storage.pool().clone());
        Self {
            storage,
            events,
            responses,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// All events in `datetime` order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn list_events(&self) -> Result<Vec<Event>, BoardError> {
        self.events.list_all().await
    }

    /// All events grouped into calendar days.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn calendar(&self) -> Result<Vec<CalendarDay>, BoardError> {
        Ok(group_by_day(self.events.list_all().await?))
    }

    /// Creates an event and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when `title` or `datetime` is empty
    /// (nothing is written), or [`BoardError::StorageUnavailable`].
    pub async fn create_event(&self, new_event: &NewEvent) -> Result<EventId, BoardError> {
        let event_id = self.events.create(new_event).await?;
        tracing::info!(%event_id, title = %new_event.title, "event created");
        Ok(event_id)
    }

    /// Looks up an event.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EventNotFound`] if no such event exists.
    pub async fn find_event(&self, event_id: &EventId) -> Result<Event, BoardError> {
        self.events
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| BoardError::EventNotFound(event_id.clone()))
    }

    /// The event and its submissions.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EventNotFound`] if no such event exists.
    pub async fn event_detail(&self, event_id: &EventId) -> Result<EventDetail, BoardError> {
        let event = self.find_event(event_id).await?;
        let responses = self.responses.list_for_event(event_id).await?;
        Ok(EventDetail { event, responses })
    }

    /// Records a collaborator's availability for an existing event and
    /// returns that event.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EventNotFound`] (and writes nothing) if the
    /// event does not exist.
    pub async fn submit_availability(
        &self,
        event_id: &EventId,
        submission: &NewAvailability,
    ) -> Result<Event, BoardError> {
        let event = self.find_event(event_id).await?;
        let response_id = self.responses.create(event_id, submission).await?;
        tracing::info!(%event_id, response_id, name = %submission.name, "availability submitted");
        Ok(event)
    }

    /// Deletes an event and all of its submissions atomically, returning
    /// the deleted event.
    ///
    /// Both deletes run in one transaction; if either fails the
    /// transaction is dropped uncommitted and rolls back.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EventNotFound`] if the event does not exist, or
    /// [`BoardError::StorageUnavailable`] on database failure.
    pub async fn delete_event(&self, event_id: &EventId) -> Result<Event, BoardError> {
        let event = self.find_event(event_id).await?;

        let mut tx = self.storage.begin().await?;
        let responses_removed = self.responses.delete_for_event(&mut tx, event_id).await?;
        self.events.delete(&mut tx, event_id).await?;
        tx.commit().await?;

        tracing::info!(%event_id, responses_removed, "event deleted");
        Ok(event)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::testing::schema_ready_storage;

    async fn make_service() -> ScheduleService {
        ScheduleService::new(schema_ready_storage().await)
    }

    fn standup() -> NewEvent {
        NewEvent {
            title: "Standup".to_string(),
            description: None,
            datetime: "2024-01-10T09:00".to_string(),
        }
    }

    fn ann() -> NewAvailability {
        NewAvailability {
            name: "Ann".to_string(),
            start: "09:00".to_string(),
            end: "09:30".to_string(),
            description: "ok".to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let service = make_service().await;
        let result = service
            .create_event(&NewEvent {
                title: String::new(),
                ..standup()
            })
            .await;
        assert!(matches!(result, Err(BoardError::Validation(_))));
        assert_eq!(service.list_events().await.map(|e| e.len()).ok(), Some(0));
    }

    #[tokio::test]
    async fn detail_lists_submissions_in_order() {
        let service = make_service().await;
        let Ok(id) = service.create_event(&standup()).await else {
            panic!("create failed");
        };
        let bob = NewAvailability {
            name: "Bob".to_string(),
            ..ann()
        };
        assert!(service.submit_availability(&id, &ann()).await.is_ok());
        assert!(service.submit_availability(&id, &bob).await.is_ok());

        let Ok(detail) = service.event_detail(&id).await else {
            panic!("detail failed");
        };
        assert_eq!(detail.event.title, "Standup");
        let names: Vec<&str> = detail.responses.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[tokio::test]
    async fn submit_to_unknown_event_writes_nothing() {
        let service = make_service().await;
        let ghost = EventId::from("ghost");

        let result = service.submit_availability(&ghost, &ann()).await;
        assert!(matches!(result, Err(BoardError::EventNotFound(_))));

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM responses")
            .fetch_one(service.storage().pool())
            .await;
        assert_eq!(count.ok(), Some(0));
    }

    #[tokio::test]
    async fn delete_cascades_to_responses() {
        let service = make_service().await;
        let Ok(id) = service.create_event(&standup()).await else {
            panic!("create failed");
        };
        let Ok(other) = service.create_event(&standup()).await else {
            panic!("create failed");
        };
        let _ = service.submit_availability(&id, &ann()).await;
        let _ = service.submit_availability(&other, &ann()).await;

        let Ok(deleted) = service.delete_event(&id).await else {
            panic!("delete failed");
        };
        assert_eq!(deleted.id, id);

        assert!(matches!(service.find_event(&id).await, Err(BoardError::EventNotFound(_))));
        let Ok(events) = service.list_events().await else {
            panic!("list failed");
        };
        assert_eq!(events.len(), 1);

        let repo = ResponseRepository::new(service.storage().pool().clone());
        assert_eq!(repo.list_for_event(&id).await.map(|r| r.len()).ok(), Some(0));
        assert_eq!(repo.list_for_event(&other).await.map(|r| r.len()).ok(), Some(1));
    }

    #[tokio::test]
    async fn delete_unknown_event_is_not_found() {
        let service = make_service().await;
        let result = service.delete_event(&EventId::from("ghost")).await;
        assert!(matches!(result, Err(BoardError::EventNotFound(_))));
    }

    #[tokio::test]
    async fn calendar_groups_by_day() {
        let service = make_service().await;
        for datetime in ["2024-01-11T10:00", "2024-01-10T16:00", "2024-01-10T09:00"] {
            let _ = service
                .create_event(&NewEvent {
                    datetime: datetime.to_string(),
                    ..standup()
                })
                .await;
        }

        let Ok(days) = service.calendar().await else {
            panic!("calendar failed");
        };
        let shape: Vec<(&str, usize)> = days
            .iter()
            .map(|d| (d.day.as_str(), d.events.len()))
            .collect();
        assert_eq!(shape, vec![("2024-01-10", 2), ("2024-01-11", 1)]);
    }
}
