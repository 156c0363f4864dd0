use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single event as the backend reports it. Dates stay raw strings here;
/// [`crate::classify`] owns turning them into instants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

impl Pagination {
    /// Pagination for a list that was never paginated by the backend.
    pub fn single_page(len: usize) -> Self {
        Self {
            page: 1,
            limit: len as u32,
            total: len as u32,
            total_pages: 1,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::single_page(0)
    }
}

fn default_page() -> u32 {
    1
}

fn default_total_pages() -> u32 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct EventListData {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct EventListResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub data: EventListData,
}

impl EventListResponse {
    /// Decodes any of the envelope shapes the backend is known to emit.
    ///
    /// The raw body is first normalized with
    /// [`crate::normalize::normalize_event_list_response`]; a body that still
    /// does not decode afterwards yields [`EventListResponse::failed`] rather
    /// than an error, so callers can always render something.
    pub fn from_raw(raw: Value) -> Self {
        let normalized = crate::normalize::normalize_event_list_response(raw);
        serde_json::from_value(normalized).unwrap_or_else(|_| Self::failed())
    }

    /// An empty, unsuccessful response. Used when the backend body could not
    /// be interpreted at all.
    pub fn failed() -> Self {
        Self {
            success: false,
            data: EventListData::default(),
        }
    }
}

impl Default for EventListResponse {
    fn default() -> Self {
        Self {
            success: true,
            data: EventListData::default(),
        }
    }
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct GalleryListData {
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct GalleryListResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub data: GalleryListData,
}

impl GalleryListResponse {
    /// Gallery counterpart of [`EventListResponse::from_raw`].
    pub fn from_raw(raw: Value) -> Self {
        let normalized = crate::normalize::normalize_gallery_list_response(raw);
        serde_json::from_value(normalized).unwrap_or_else(|_| Self {
            success: false,
            data: GalleryListData::default(),
        })
    }
}

impl Default for GalleryListResponse {
    fn default() -> Self {
        Self {
            success: true,
            data: GalleryListData::default(),
        }
    }
}
