use crate::constants::calendar::UTC_DATE_TIME_FORMAT;
use chrono::{DateTime, Utc};
use ical::property::Property;

/// Formats an instant as an iCalendar UTC date-time, e.g. `20240914T190000Z`.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format(UTC_DATE_TIME_FORMAT).to_string()
}

/// A parameterless content line. The value is emitted as given.
pub(crate) fn property(name: &str, value: impl Into<String>) -> Property {
    Property {
        name: name.to_string(),
        params: None,
        value: Some(value.into()),
    }
}
