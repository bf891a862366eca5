//! Test fixtures
//!
//! Helpers that build feed lines and records.

use serde_json::json;

use crate::domain::entities::Record;

/// A single NDJSON line in the feed's shape
pub fn record_line(title: &str, date: &str, location: &str, url: &str) -> String {
    json!({
        "title": title,
        "date_range": { "date_raw": date },
        "location": { "location_raw": location },
        "url": url,
    })
    .to_string()
}

/// `count` valid lines titled "Event 1" .. "Event N"
pub fn numbered_lines(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| {
            record_line(
                &format!("Event {}", i),
                &format!("{:02}/06", i),
                "Curitiba - PR",
                &format!("https://events.example/{}", i),
            )
        })
        .collect()
}

pub fn test_record(title: &str, date: &str, location: &str, url: &str) -> Record {
    serde_json::from_str(&record_line(title, date, location, url)).unwrap()
}
