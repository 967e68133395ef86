use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Integer that may arrive as a number, an integral float or a numeric string.
/// Anything else reads as absent.
fn lenient_integer(value: Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_integer(value).and_then(|id| u64::try_from(id).ok()))
}

fn deserialize_lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_integer(Value::deserialize(deserializer)?))
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn deserialize_lenient_entity<'de, D>(deserializer: D) -> Result<Option<NamedEntity>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// A null or missing list reads as an empty page. Entries that are not
/// objects are dropped so the rest of the page survives.
fn deserialize_events<'de, D>(deserializer: D) -> Result<Vec<RawEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!("Ignoring events field of unexpected type: {other}");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<RawEvent>(item) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Dropping unreadable event entry: {e}");
                None
            }
        })
        .collect())
}

/// Anything on the wire that only carries a display name (teams, tournaments)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NamedEntity {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
}

/// A single fixture as returned by `/team/{id}/events/{last|next}/{page}`.
///
/// Every field is optional and read leniently: a field with an unexpected
/// type reads as absent instead of failing the page, and missing values are
/// substituted during normalization.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: Option<u64>,
    #[serde(
        rename = "startTimestamp",
        default,
        deserialize_with = "deserialize_lenient_timestamp"
    )]
    pub start_timestamp: Option<i64>,
    #[serde(
        rename = "homeTeam",
        default,
        deserialize_with = "deserialize_lenient_entity"
    )]
    pub home_team: Option<NamedEntity>,
    #[serde(
        rename = "awayTeam",
        default,
        deserialize_with = "deserialize_lenient_entity"
    )]
    pub away_team: Option<NamedEntity>,
    #[serde(default, deserialize_with = "deserialize_lenient_entity")]
    pub tournament: Option<NamedEntity>,
}

/// One page of team events. Paging ends on the first page with no events.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventsPage {
    #[serde(default, deserialize_with = "deserialize_events")]
    pub events: Vec<RawEvent>,
}
