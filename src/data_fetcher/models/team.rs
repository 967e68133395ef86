use serde::{Deserialize, Serialize};
use std::fmt;

/// Sport a tracked team plays. The serialized name doubles as the category
/// segment of event UIDs, so renaming a variant changes every UID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Basket,
    Volley,
}

impl Sport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Basket => "basket",
            Sport::Volley => "volley",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which half of a team's fixture list to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Already played fixtures
    Last,
    /// Upcoming fixtures
    Next,
}

impl Selector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Selector::Last => "last",
            Selector::Next => "next",
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A team whose fixtures end up in the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedTeam {
    /// SofaScore team id
    pub id: u64,
    pub sport: Sport,
    /// Prefix of every event title for this team
    pub emoji: String,
}

impl TrackedTeam {
    pub fn new(id: u64, sport: Sport, emoji: impl Into<String>) -> Self {
        Self {
            id,
            sport,
            emoji: emoji.into(),
        }
    }
}
