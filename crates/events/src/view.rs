use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{Month, MonthGrid, build_month_grid};
use crate::classify::EventBucket;
use crate::filter::{EventFilter, Page, filter_events, paginate};
use crate::types::Event;

/// Page size the events listing uses unless told otherwise; a 3x3 card grid.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Filter and pagination state behind the paged events listing.
///
/// Changing any filter dimension snaps back to page 1 so the view never sits
/// on a page that no longer exists for the narrowed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct EventListState {
    pub filter: EventFilter,
    pub page: u32,
    pub page_size: u32,
}

impl EventListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            filter: EventFilter::default(),
            page: 1,
            page_size,
        }
    }

    /// Sets the search term. Blank input clears it. Resets to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.filter.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self.page = 1;
    }

    /// Sets or clears the category filter. Resets to page 1.
    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.page = 1;
    }

    /// Sets or clears the upcoming/past filter. Resets to page 1.
    pub fn set_bucket(&mut self, bucket: Option<EventBucket>) {
        self.filter.bucket = bucket;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// The page of `events` this state currently shows: filtered, then
    /// sliced. An out-of-range `page` is clamped by [`paginate`].
    pub fn visible(&self, events: &[Event], now: DateTime<Utc>) -> Page {
        let filtered = filter_events(events, &self.filter, now);
        paginate(&filtered, self.page, self.page_size)
    }
}

impl Default for EventListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Month navigation and day selection for the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct CalendarState {
    pub month: Month,
    pub selected_day: Option<u32>,
}

impl CalendarState {
    pub fn new(month: Month) -> Self {
        Self {
            month,
            selected_day: None,
        }
    }

    /// Moves to the next month and drops any day selection.
    pub fn goto_next_month(&mut self) {
        self.month = self.month.next();
        self.selected_day = None;
    }

    /// Moves to the previous month and drops any day selection.
    pub fn goto_prev_month(&mut self) {
        self.month = self.month.prev();
        self.selected_day = None;
    }

    /// Jumps straight to `month`. Selection survives only when the month does
    /// not actually change.
    pub fn goto_month(&mut self, month: Month) {
        if month != self.month {
            self.month = month;
            self.selected_day = None;
        }
    }

    /// Selects a day of the current month; selecting it again deselects.
    /// Days outside the month are ignored.
    pub fn select_day(&mut self, day: u32) {
        if day < 1 || day > self.month.days_in_month() {
            return;
        }
        self.selected_day = if self.selected_day == Some(day) {
            None
        } else {
            Some(day)
        };
    }

    pub fn is_selected(&self, day: u32) -> bool {
        self.selected_day == Some(day)
    }

    /// The current month laid out with `events` placed on their days.
    pub fn grid(&self, events: &[Event]) -> MonthGrid {
        build_month_grid(self.month, events)
    }
}
