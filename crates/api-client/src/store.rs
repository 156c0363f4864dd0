use bitsa_events::{Event, EventListResponse};
use bitsa_http::HttpClient;
use tokio::sync::RwLock;

use crate::client::BitsaApiClient;
use crate::error::Error;
use crate::types::{EventListQuery, EventPatch, NewEvent};

/// Cached view of the backend's event list.
///
/// Reads come from the last good snapshot. Admin mutations go straight to
/// the backend and then refetch the whole list instead of patching the
/// snapshot locally, so the cache never drifts from what the backend would
/// serve next. A failed fetch leaves the previous snapshot in place.
pub struct EventStore<C: HttpClient> {
    client: BitsaApiClient<C>,
    query: RwLock<EventListQuery>,
    snapshot: RwLock<EventListResponse>,
}

impl<C: HttpClient> EventStore<C> {
    pub fn new(client: BitsaApiClient<C>) -> Self {
        Self {
            client,
            query: RwLock::new(EventListQuery::default()),
            snapshot: RwLock::new(EventListResponse::default()),
        }
    }

    /// The last successfully fetched response. Empty until the first
    /// [`refresh`](Self::refresh).
    pub async fn snapshot(&self) -> EventListResponse {
        self.snapshot.read().await.clone()
    }

    pub async fn events(&self) -> Vec<Event> {
        self.snapshot.read().await.data.events.clone()
    }

    pub async fn query(&self) -> EventListQuery {
        self.query.read().await.clone()
    }

    /// Replaces the list query and refetches under it.
    pub async fn set_query(&self, query: EventListQuery) -> Result<(), Error> {
        *self.query.write().await = query;
        self.refresh().await
    }

    /// Refetches the list with the current query and swaps the snapshot.
    pub async fn refresh(&self) -> Result<(), Error> {
        let query = self.query.read().await.clone();
        let response = self.client.list_events(query).await?;
        tracing::debug!(events = response.data.events.len(), "refreshed event list");
        *self.snapshot.write().await = response;
        Ok(())
    }

    /// Creates an event and refetches the list. A refetch failure after the
    /// backend accepted the event is logged, not returned; the created event
    /// is already real.
    pub async fn create_event(&self, event: NewEvent) -> Result<Event, Error> {
        let created = self.client.create_event(event).await?;
        if let Err(e) = self.refresh().await {
            tracing::warn!("refetch_after_create: {:?}", e);
        }
        Ok(created)
    }

    pub async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event, Error> {
        let updated = self.client.update_event(id, patch).await?;
        if let Err(e) = self.refresh().await {
            tracing::warn!("refetch_after_update: {:?}", e);
        }
        Ok(updated)
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), Error> {
        self.client.delete_event(id).await?;
        if let Err(e) = self.refresh().await {
            tracing::warn!("refetch_after_delete: {:?}", e);
        }
        Ok(())
    }
}
