pub mod events;
pub mod team;

pub use events::{EventsPage, NamedEntity, RawEvent};
pub use team::{Selector, Sport, TrackedTeam};
