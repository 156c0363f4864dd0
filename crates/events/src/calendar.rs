use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::Event;

/// A calendar month. `month` is 1-based, January = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following month, rolling the year over after December.
    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling the year back before January.
    pub fn prev(self) -> Self {
        if self.month <= 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        let next_first = self.next().first_day();
        next_first
            .pred_opt()
            .map(|last| last.day())
            .unwrap_or(31)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// One month laid out for a seven-column, Sunday-first calendar.
///
/// `cells` starts with one `None` per weekday before the 1st, then
/// `Some(day)` for every day of the month. `events_by_day` maps a day number
/// to the events that touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct MonthGrid {
    pub month: Month,
    pub cells: Vec<Option<u32>>,
    pub events_by_day: BTreeMap<u32, Vec<Event>>,
}

impl MonthGrid {
    /// The cells split into rows of seven, the last row padded with `None`.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let mut weeks = Vec::with_capacity(self.cells.len().div_ceil(7));
        for chunk in self.cells.chunks(7) {
            let mut week = [None; 7];
            week[..chunk.len()].copy_from_slice(chunk);
            weeks.push(week);
        }
        weeks
    }

    /// Events touching the given day of the month, possibly none.
    pub fn events_on(&self, day: u32) -> &[Event] {
        self.events_by_day
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Lays out `month` as a Sunday-first grid and indexes `events` by the days
/// they touch.
///
/// An event touches a day when the day matches its start date, matches its
/// end date, or falls strictly between the two. Comparisons are on UTC
/// calendar days. Events whose start date does not parse are left out.
pub fn build_month_grid(month: Month, events: &[Event]) -> MonthGrid {
    let first_day = month.first_day();
    let leading_blanks = first_day.weekday().num_days_from_sunday();
    let days = month.days_in_month();

    let mut cells = Vec::with_capacity((leading_blanks + days) as usize);
    cells.extend(std::iter::repeat(None).take(leading_blanks as usize));
    cells.extend((1..=days).map(Some));

    let mut events_by_day: BTreeMap<u32, Vec<Event>> = BTreeMap::new();
    for event in events {
        let Some(start) = event.start_instant() else {
            continue;
        };
        let start_day = start.date_naive();
        let end_day = event.end_instant().map(|end| end.date_naive());

        for day in 1..=days {
            let Some(date) = NaiveDate::from_ymd_opt(month.year, month.month, day) else {
                continue;
            };
            if event_touches(start_day, end_day, date) {
                events_by_day.entry(day).or_default().push(event.clone());
            }
        }
    }

    MonthGrid {
        month,
        cells,
        events_by_day,
    }
}

fn event_touches(start: NaiveDate, end: Option<NaiveDate>, date: NaiveDate) -> bool {
    if date == start {
        return true;
    }
    match end {
        Some(end) => date == end || (date > start && date < end),
        None => false,
    }
}
