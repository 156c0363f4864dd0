use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{EventBucket, classify_event};
use crate::types::Event;

/// Client-side filter over an already-fetched event list.
///
/// Every field is optional; an unset field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct EventFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub bucket: Option<EventBucket>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event, now: DateTime<Utc>) -> bool {
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let in_title = event.title.to_lowercase().contains(&needle);
            let in_description = event
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if event.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(bucket) = self.bucket {
            if classify_event(event, now) != Some(bucket) {
                return false;
            }
        }

        true
    }
}

/// Applies `filter` to `events`, keeping the input order. The search term is
/// a case-insensitive substring match over title and description.
pub fn filter_events(events: &[Event], filter: &EventFilter, now: DateTime<Utc>) -> Vec<Event> {
    events
        .iter()
        .filter(|event| filter.matches(event, now))
        .cloned()
        .collect()
}

/// One page of a sliced event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct Page {
    pub items: Vec<Event>,
    pub page: u32,
    pub page_size: u32,
    pub total: u32,
    pub total_pages: u32,
}

/// Slices `events` into the requested page.
///
/// `total_pages` is never below 1, even for an empty list, and `page` is
/// clamped into `1..=total_pages`. A `page_size` of zero degrades to a single
/// page holding everything.
pub fn paginate(events: &[Event], page: u32, page_size: u32) -> Page {
    let total = events.len();

    if page_size == 0 {
        return Page {
            items: events.to_vec(),
            page: 1,
            page_size,
            total: total as u32,
            total_pages: 1,
        };
    }

    let total_pages = total.div_ceil(page_size as usize).max(1);
    let page = (page.max(1) as usize).min(total_pages);

    let start = (page - 1) * page_size as usize;
    let end = (start + page_size as usize).min(total);
    let items = events
        .get(start..end)
        .map(|window| window.to_vec())
        .unwrap_or_default();

    Page {
        items,
        page: page as u32,
        page_size,
        total: total as u32,
        total_pages: total_pages as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::parse_event_datetime;

    fn now() -> DateTime<Utc> {
        parse_event_datetime("2025-01-15T00:00:00Z").expect("valid test datetime")
    }

    fn event(id: &str, title: &str, description: Option<&str>) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
            start_date: Some("2025-02-01".to_string()),
            ..Default::default()
        }
    }

    fn events(count: usize) -> Vec<Event> {
        (0..count)
            .map(|i| event(&format!("e{i}"), &format!("Event {i}"), None))
            .collect()
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let list = vec![
            event("a", "Annual Hackathon", None),
            event("b", "BBQ", Some("The hackathon afterparty")),
            event("c", "Careers Fair", None),
        ];
        let filter = EventFilter {
            search: Some("HACKATHON".to_string()),
            ..Default::default()
        };

        let matched = filter_events(&list, &filter, now());
        let ids: Vec<_> = matched.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn category_must_match_exactly() {
        let mut social = event("a", "BBQ", None);
        social.category = Some("social".to_string());
        let mut technical = event("b", "Workshop", None);
        technical.category = Some("technical".to_string());

        let filter = EventFilter {
            category: Some("social".to_string()),
            ..Default::default()
        };

        let matched = filter_events(&[social, technical], &filter, now());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "a");
    }

    #[test]
    fn bucket_filter_drops_unclassifiable_events() {
        let upcoming = event("a", "Soon", None);
        let mut past = event("b", "Done", None);
        past.start_date = Some("2024-12-01".to_string());
        let mut broken = event("c", "???", None);
        broken.start_date = Some("not-a-date".to_string());

        let filter = EventFilter {
            bucket: Some(EventBucket::Upcoming),
            ..Default::default()
        };

        let matched = filter_events(&[upcoming, past, broken], &filter, now());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "a");
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let page = paginate(&[], 1, 10);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn pages_split_with_a_short_tail() {
        let list = events(10);

        let first = paginate(&list, 1, 3);
        assert_eq!(first.total_pages, 4);
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.items[0].id, "e0");

        let last = paginate(&list, 4, 3);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].id, "e9");
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let list = events(5);

        let beyond = paginate(&list, 99, 2);
        assert_eq!(beyond.page, 3);
        assert_eq!(beyond.items.len(), 1);

        let below = paginate(&list, 0, 2);
        assert_eq!(below.page, 1);
        assert_eq!(below.items.len(), 2);
    }

    #[test]
    fn zero_page_size_returns_everything_at_once() {
        let list = events(7);
        let page = paginate(&list, 3, 0);

        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 7);
    }
}
