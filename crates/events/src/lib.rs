//! Event domain logic for the BITSA site: envelope normalization, date
//! bucketing, the calendar month grid, and list filtering/pagination.
//!
//! Everything here is pure and total. Malformed input degrades to empty
//! values instead of errors; the API client in `bitsa-api-client` is the
//! layer that talks to the network and can fail.

pub mod calendar;
pub mod classify;
pub mod filter;
pub mod normalize;
pub mod types;
pub mod view;

pub use calendar::{Month, MonthGrid, build_month_grid};
pub use classify::{EventBucket, classify_event, parse_event_datetime, partition_events};
pub use filter::{EventFilter, Page, filter_events, paginate};
pub use normalize::{
    normalize_event_detail_response, normalize_event_list_response,
    normalize_gallery_image_response, normalize_gallery_list_response,
};
pub use types::{
    Event, EventListData, EventListResponse, GalleryImage, GalleryListData, GalleryListResponse,
    Pagination,
};
pub use view::{CalendarState, DEFAULT_PAGE_SIZE, EventListState};
