use serde::de::DeserializeOwned;
use std::fmt::Display;
use tracing::log;

/// Outcome of decoding an upstream body. Undecodable bodies fall back to the
/// zero value of `T` instead of failing the request.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Parsed(T),
    Defaulted(T, String),
}

impl<T: DeserializeOwned + Default> Decoded<T> {
    pub fn from_slice(bytes: &[u8]) -> Decoded<T> {
        match serde_json::from_slice(bytes) {
            Ok(value) => Decoded::Parsed(value),
            Err(e) => Decoded::Defaulted(T::default(), e.to_string()),
        }
    }
}

impl<T> Decoded<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Decoded<U> {
        match self {
            Decoded::Parsed(value) => Decoded::Parsed(f(value)),
            Decoded::Defaulted(value, reason) => Decoded::Defaulted(f(value), reason),
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Decoded::Defaulted(_, _))
    }

    pub fn into_inner(self) -> T {
        match self {
            Decoded::Parsed(value) => value,
            Decoded::Defaulted(value, _) => value,
        }
    }

    /// Unwraps the value, logging a warning if it was defaulted.
    pub fn warn_defaulted(self, source: &str) -> T {
        if let Decoded::Defaulted(_, reason) = &self {
            log::warn!("[REST] Decode failed for {source}, using empty value: {reason}");
        }
        self.into_inner()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    Game,
    Category,
    Other(String),
}

impl From<&str> for Relation {
    fn from(value: &str) -> Self {
        match value {
            "game" => Relation::Game,
            "category" => Relation::Category,
            other => Relation::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunLink {
    pub rel: Relation,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonalBestRecord {
    pub place: u32,
    pub run_id: String,
    pub primary_time: String,
    pub links: Vec<RunLink>,
}

impl PersonalBestRecord {
    pub fn duration(&self) -> RunDuration {
        RunDuration::from(self.primary_time.as_str())
    }

    pub fn game_uri(&self) -> Option<&str> {
        self.last_link(&Relation::Game)
    }

    pub fn category_uri(&self) -> Option<&str> {
        self.last_link(&Relation::Category)
    }

    // last match wins when a relation is repeated
    fn last_link(&self, rel: &Relation) -> Option<&str> {
        self.links.iter()
            .filter(|e| &e.rel == rel)
            .last()
            .map(|e| e.uri.as_str())
    }
}

/// Upstream duration with the `PT` marker stripped, e.g. `PT1H2M3S` -> `1h2m3s`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunDuration(String);

impl From<&str> for RunDuration {
    fn from(value: &str) -> Self {
        RunDuration(value.replacen("PT", "", 1).to_lowercase())
    }
}

impl Display for RunDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSummary {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorySummary {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PbLine {
    pub game: String,
    pub category: String,
    pub duration: RunDuration,
}

impl Display for PbLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}: {}", self.game, self.category, self.duration)
    }
}
