use super::event::CalendarEvent;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Drops events whose UID was already seen, keeping the first occurrence and
/// the original order. Events with an empty UID are dropped as malformed.
pub fn dedupe_by_uid(events: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(events.len());

    for event in events {
        if event.uid.is_empty() {
            warn!("Dropping event without UID: {}", event.summary);
            continue;
        }
        if !seen.insert(event.uid.clone()) {
            debug!("Dropping duplicate event {}", event.uid);
            continue;
        }
        unique.push(event);
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_event(uid: &str, summary: &str) -> CalendarEvent {
        let at = Utc.with_ymd_and_hms(2024, 9, 14, 19, 0, 0).unwrap();
        CalendarEvent {
            uid: uid.to_string(),
            stamp: at,
            start: at,
            summary: summary.to_string(),
            description: String::new(),
            alarm: None,
        }
    }

    #[test]
    fn test_dedupe_first_occurrence_wins() {
        let events = vec![
            create_event("A", "first A"),
            create_event("B", "B"),
            create_event("A", "second A"),
            create_event("C", "C"),
        ];

        let unique = dedupe_by_uid(events);
        let uids: Vec<_> = unique.iter().map(|e| e.uid.as_str()).collect();
        assert_eq!(uids, vec!["A", "B", "C"]);
        assert_eq!(unique[0].summary, "first A");
    }

    #[test]
    fn test_dedupe_drops_events_without_uid() {
        let events = vec![create_event("", "broken"), create_event("A", "A")];
        let unique = dedupe_by_uid(events);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].uid, "A");
    }

    #[test]
    fn test_dedupe_empty_input() {
        assert!(dedupe_by_uid(Vec::new()).is_empty());
    }
}
