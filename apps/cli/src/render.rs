use chrono::{Datelike, NaiveDate};

use bitsa_events::{Event, EventListResponse, GalleryListResponse, Month, build_month_grid};

pub fn event_list(response: &EventListResponse) {
    event_lines(&response.data.events);
    let pagination = &response.data.pagination;
    println!(
        "page {}/{} ({} events)",
        pagination.page, pagination.total_pages, pagination.total
    );
}

pub fn event_lines(events: &[Event]) {
    if events.is_empty() {
        println!("no events");
        return;
    }
    for event in events {
        let mut line = format!("{:<17} {}", when(event), event.title);
        if let Some(location) = &event.location_name {
            line.push_str(&format!("  @ {location}"));
        }
        println!("{line}");
    }
}

pub fn event_detail(event: &Event) {
    println!("{}", event.title);
    println!("  id:       {}", event.id);
    println!("  when:     {}", when(event));
    if let Some(end) = &event.end_date {
        println!("  until:    {end}");
    }
    if let Some(location) = &event.location_name {
        println!("  where:    {location}");
    }
    if let Some(category) = &event.category {
        println!("  category: {category}");
    }
    if let Some(capacity) = event.capacity {
        println!("  capacity: {capacity}");
    }
    if let Some(description) = &event.description {
        println!();
        println!("{description}");
    }
}

pub fn calendar(month: Month, events: &[Event], today: NaiveDate) {
    let grid = build_month_grid(month, events);
    let today_day = month.contains(today).then(|| today.day());

    println!("{:^28}", format!("{} {}", month_name(month.month), month.year));
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");
    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                Some(day) => {
                    let mark = if grid.events_on(*day).is_empty() { ' ' } else { '*' };
                    if today_day == Some(*day) {
                        format!(">{day:>2}{mark}")
                    } else {
                        format!("{day:>3}{mark}")
                    }
                }
                None => "    ".to_string(),
            })
            .collect();
        println!("{row}");
    }

    if !grid.events_by_day.is_empty() {
        println!();
        for (day, on_day) in &grid.events_by_day {
            for event in on_day {
                println!("{day:>3}: {}", event.title);
            }
        }
    }
}

pub fn gallery(response: &GalleryListResponse) {
    let images = &response.data.images;
    if images.is_empty() {
        println!("no images");
        return;
    }
    for image in images {
        let mut line = format!("{:<12} {}", image.id, image.image_url);
        if let Some(caption) = &image.caption {
            line.push_str(&format!("  ({caption})"));
        }
        println!("{line}");
    }
}

fn when(event: &Event) -> String {
    event
        .start_instant()
        .map(|start| start.format("%Y-%m-%d %H:%M").to_string())
        .or_else(|| event.start_date.clone())
        .unwrap_or_else(|| "unscheduled".to_string())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
