use crate::data_fetcher::models::Sport;

/// Broadcaster shown in the event description.
///
/// The mapping below is a static table and goes stale whenever broadcast
/// rights change; unknown competitions render as `Kanal: TBD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    BeinSports,
    ASporAtv,
    Trt1,
    SSport,
    Unknown,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::BeinSports => "Kanal: beIN SPORTS",
            Channel::ASporAtv => "Kanal: A Spor / ATV",
            Channel::Trt1 => "Kanal: TRT 1",
            Channel::SSport => "Kanal: S Sport",
            Channel::Unknown => "Kanal: TBD",
        }
    }
}

type Rule = (&'static [&'static str], Channel);

const FOOTBALL_RULES: &[Rule] = &[
    (&["süper lig", "super lig"], Channel::BeinSports),
    (&["türkiye kupası", "turkiye kupasi", "kupa"], Channel::ASporAtv),
    (
        &["uefa", "avrupa", "europa", "conference", "champions"],
        Channel::Trt1,
    ),
];

const BASKET_RULES: &[Rule] = &[
    (&["euroleague"], Channel::SSport),
    (
        &["bsl", "basketbol süper ligi", "basketbol super ligi"],
        Channel::BeinSports,
    ),
];

fn rules_for(sport: Sport) -> &'static [Rule] {
    match sport {
        Sport::Football => FOOTBALL_RULES,
        Sport::Basket => BASKET_RULES,
        Sport::Volley => &[],
    }
}

/// Picks the broadcaster for a competition. Rules are checked in order and
/// the first keyword found (case-insensitive substring) wins.
pub fn classify(sport: Sport, tournament: &str) -> Channel {
    let tournament = tournament.to_lowercase();

    rules_for(sport)
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| tournament.contains(k)))
        .map(|(_, channel)| *channel)
        .unwrap_or(Channel::Unknown)
}
