use super::event::CalendarEvent;
use super::formatting::property;
use crate::constants::calendar::{DEFAULT_NAME, DEFAULT_TIMEZONE, PRODUCT_ID};
use ical::generator::Emitter;
use ical::parser::ical::component::IcalCalendar;
use ical::property::Property;

/// Calendar-level properties written before the first event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarHeader {
    pub product_id: String,
    /// `X-WR-CALNAME`, the name subscribers see
    pub name: String,
    /// `X-WR-TIMEZONE`, only a display hint; all event times are UTC
    pub timezone: String,
}

impl Default for CalendarHeader {
    fn default() -> Self {
        Self {
            product_id: PRODUCT_ID.to_string(),
            name: DEFAULT_NAME.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl CalendarHeader {
    fn properties(&self) -> Vec<Property> {
        vec![
            property("VERSION", "2.0"),
            property("PRODID", self.product_id.as_str()),
            property("CALSCALE", "GREGORIAN"),
            property("METHOD", "PUBLISH"),
            property("X-WR-CALNAME", self.name.as_str()),
            property("X-WR-TIMEZONE", self.timezone.as_str()),
        ]
    }
}

/// A complete `VCALENDAR` document. Events are kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    pub header: CalendarHeader,
    pub events: Vec<CalendarEvent>,
}

impl Calendar {
    pub fn new(header: CalendarHeader, events: Vec<CalendarEvent>) -> Self {
        Self { header, events }
    }

    pub fn to_ical(&self) -> IcalCalendar {
        let mut calendar = IcalCalendar::new();
        calendar.properties = self.header.properties();
        calendar.events = self.events.iter().map(CalendarEvent::to_ical).collect();
        calendar
    }

    /// Serializes the document with CRLF line endings, ending in a line break
    /// after `END:VCALENDAR`.
    pub fn to_ics_string(&self) -> String {
        self.to_ical().generate()
    }
}
