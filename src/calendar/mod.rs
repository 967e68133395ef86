//! iCalendar rendering: fixtures become `VEVENT` blocks, get deduplicated by
//! UID and are wrapped in a single `VCALENDAR` document.

pub mod dedupe;
pub mod document;
pub mod event;
pub mod formatting;

pub use dedupe::dedupe_by_uid;
pub use document::{Calendar, CalendarHeader};
pub use event::{Alarm, CalendarEvent};
pub use formatting::format_utc;
