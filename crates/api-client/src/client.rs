use bitsa_events::{
    Event, EventListResponse, GalleryImage, GalleryListResponse, normalize_event_detail_response,
    normalize_gallery_image_response,
};
use bitsa_http::HttpClient;

use crate::error::Error;
use crate::types::{EventListQuery, EventPatch, NewEvent, NewGalleryImage};

pub struct BitsaApiClient<C> {
    http: C,
}

impl<C: HttpClient> BitsaApiClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// `GET /events`. The response is canonical regardless of which envelope
    /// shape the backend chose.
    pub async fn list_events(&self, query: EventListQuery) -> Result<EventListResponse, Error> {
        let mut query_parts: Vec<String> = Vec::new();

        if let Some(page) = query.page {
            query_parts.push(format!("page={page}"));
        }
        if let Some(limit) = query.limit {
            query_parts.push(format!("limit={limit}"));
        }
        if let Some(ref search) = query.search {
            query_parts.push(format!("search={}", urlencoding::encode(search)));
        }
        if let Some(ref category) = query.category {
            query_parts.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(status) = query.status {
            query_parts.push(format!("status={}", status.as_str()));
        }
        if let Some(ref sort_by) = query.sort_by {
            query_parts.push(format!("sortBy={}", urlencoding::encode(sort_by)));
        }

        let path = if query_parts.is_empty() {
            "/events".to_string()
        } else {
            format!("/events?{}", query_parts.join("&"))
        };

        self.fetch_event_list(&path).await
    }

    pub async fn upcoming_events(&self, limit: Option<u32>) -> Result<EventListResponse, Error> {
        let path = match limit {
            Some(limit) => format!("/events/upcoming?limit={limit}"),
            None => "/events/upcoming".to_string(),
        };
        self.fetch_event_list(&path).await
    }

    pub async fn past_events(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<EventListResponse, Error> {
        let mut query_parts: Vec<String> = Vec::new();
        if let Some(page) = page {
            query_parts.push(format!("page={page}"));
        }
        if let Some(limit) = limit {
            query_parts.push(format!("limit={limit}"));
        }

        let path = if query_parts.is_empty() {
            "/events/past".to_string()
        } else {
            format!("/events/past?{}", query_parts.join("&"))
        };
        self.fetch_event_list(&path).await
    }

    /// `GET /events/{id}`. An unknown id surfaces as [`Error::NotFound`].
    pub async fn get_event(&self, id: &str) -> Result<Event, Error> {
        let path = format!("/events/{}", urlencoding::encode(id));
        let bytes = self.http.get(&path).await.map_err(Error::from_transport)?;
        decode_event(&bytes)
    }

    pub async fn event_gallery(&self, id: &str) -> Result<GalleryListResponse, Error> {
        let path = format!("/events/{}/gallery", urlencoding::encode(id));
        self.fetch_gallery_list(&path).await
    }

    pub async fn all_gallery(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<GalleryListResponse, Error> {
        let mut query_parts: Vec<String> = Vec::new();
        if let Some(page) = page {
            query_parts.push(format!("page={page}"));
        }
        if let Some(limit) = limit {
            query_parts.push(format!("limit={limit}"));
        }

        let path = if query_parts.is_empty() {
            "/events/gallery/all".to_string()
        } else {
            format!("/events/gallery/all?{}", query_parts.join("&"))
        };
        self.fetch_gallery_list(&path).await
    }

    pub async fn create_event(&self, event: NewEvent) -> Result<Event, Error> {
        let body = serde_json::to_vec(&event)?;
        let bytes = self
            .http
            .post("/events/admin", body, "application/json")
            .await
            .map_err(Error::from_transport)?;
        decode_event(&bytes)
    }

    pub async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event, Error> {
        let path = format!("/events/admin/{}", urlencoding::encode(id));
        let body = serde_json::to_vec(&patch)?;
        let bytes = self
            .http
            .put(&path, body, "application/json")
            .await
            .map_err(Error::from_transport)?;
        decode_event(&bytes)
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), Error> {
        let path = format!("/events/admin/{}", urlencoding::encode(id));
        self.http.delete(&path).await.map_err(Error::from_transport)?;
        Ok(())
    }

    pub async fn add_gallery_image(
        &self,
        event_id: &str,
        image: NewGalleryImage,
    ) -> Result<GalleryImage, Error> {
        let path = format!("/events/admin/{}/gallery", urlencoding::encode(event_id));
        let body = serde_json::to_vec(&image)?;
        let bytes = self
            .http
            .post(&path, body, "application/json")
            .await
            .map_err(Error::from_transport)?;

        let raw: serde_json::Value = serde_json::from_slice(&bytes)?;
        let image: GalleryImage = serde_json::from_value(normalize_gallery_image_response(raw))?;
        Ok(image)
    }

    pub async fn delete_gallery_image(&self, event_id: &str, image_id: &str) -> Result<(), Error> {
        let path = format!(
            "/events/admin/{}/gallery/{}",
            urlencoding::encode(event_id),
            urlencoding::encode(image_id),
        );
        self.http.delete(&path).await.map_err(Error::from_transport)?;
        Ok(())
    }

    async fn fetch_event_list(&self, path: &str) -> Result<EventListResponse, Error> {
        let bytes = self.http.get(path).await.map_err(Error::from_transport)?;
        let raw: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(EventListResponse::from_raw(raw))
    }

    async fn fetch_gallery_list(&self, path: &str) -> Result<GalleryListResponse, Error> {
        let bytes = self.http.get(path).await.map_err(Error::from_transport)?;
        let raw: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(GalleryListResponse::from_raw(raw))
    }
}

fn decode_event(bytes: &[u8]) -> Result<Event, Error> {
    let raw: serde_json::Value = serde_json::from_slice(bytes)?;
    let event: Event = serde_json::from_value(normalize_event_detail_response(raw))?;
    Ok(event)
}
