pub mod api;
pub mod models;
pub mod processors;

pub use api::{fetch_pages, fetch_team_events};
pub use models::{RawEvent, Selector, Sport, TrackedTeam};
pub use processors::{Channel, Fixture, classify, normalize};
