use super::formatting::{format_utc, property};
use crate::constants::calendar::{REMINDER_MESSAGE, REMINDER_MINUTES, SOURCE_ATTRIBUTION};
use crate::data_fetcher::processors::{Fixture, classify};
use chrono::{DateTime, Utc};
use ical::parser::ical::component::{IcalAlarm, IcalEvent};

/// A `VALARM` nested inside an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    /// How long before the event start the alarm fires
    pub minutes_before: u32,
    pub description: String,
}

impl Alarm {
    /// The standard pre-match reminder
    pub fn reminder() -> Self {
        Self {
            minutes_before: REMINDER_MINUTES,
            description: REMINDER_MESSAGE.to_string(),
        }
    }

    pub fn to_ical(&self) -> IcalAlarm {
        let mut alarm = IcalAlarm::new();
        alarm.properties = vec![
            property("TRIGGER", format!("-PT{}M", self.minutes_before)),
            property("ACTION", "DISPLAY"),
            property("DESCRIPTION", self.description.as_str()),
        ];
        alarm
    }
}

/// One `VEVENT`, kept structured until serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    /// When the feed was generated, not when the match is played
    pub stamp: DateTime<Utc>,
    pub start: DateTime<Utc>,
    pub summary: String,
    /// Already escaped iCalendar text
    pub description: String,
    pub alarm: Option<Alarm>,
}

impl CalendarEvent {
    /// Renders a fixture into an event with the broadcaster description and
    /// the pre-match reminder.
    pub fn from_fixture(fixture: &Fixture, emoji: &str, generated_at: DateTime<Utc>) -> Self {
        let channel = classify(fixture.sport, &fixture.tournament);

        let mut event = Self {
            uid: fixture.uid.clone(),
            stamp: generated_at,
            start: fixture.start,
            summary: format!(
                "{emoji} {} - {} ({})",
                fixture.home_team, fixture.away_team, fixture.tournament
            ),
            description: format!("{}\\n{SOURCE_ATTRIBUTION}", channel.label()),
            alarm: None,
        };
        event.ensure_reminder();
        event
    }

    /// Attaches the standard reminder unless the event already has an alarm.
    pub fn ensure_reminder(&mut self) {
        if self.alarm.is_none() {
            self.alarm = Some(Alarm::reminder());
        }
    }

    /// Builds the `VEVENT` component. Properties keep their order and the
    /// alarm is emitted after them, right before `END:VEVENT`.
    pub fn to_ical(&self) -> IcalEvent {
        let mut event = IcalEvent::new();
        event.properties = vec![
            property("UID", self.uid.as_str()),
            property("DTSTAMP", format_utc(&self.stamp)),
            property("DTSTART", format_utc(&self.start)),
            property("SUMMARY", self.summary.as_str()),
            property("DESCRIPTION", self.description.as_str()),
        ];
        event.alarms = self.alarm.iter().map(Alarm::to_ical).collect();
        event
    }
}
