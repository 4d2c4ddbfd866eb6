use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword family a chat message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryCategory {
    Weather,
    Time,
}

/// Result of running the keyword classifier over a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    /// `None` means the message is not a weather/time query at all.
    pub category: Option<QueryCategory>,
}

impl Classification {
    pub fn none() -> Self {
        Self { category: None }
    }

    pub fn of(category: QueryCategory) -> Self {
        Self { category: Some(category) }
    }

    pub fn is_match(&self) -> bool {
        self.category.is_some()
    }
}

/// Provider call derived from a routed chat message.
///
/// `days` is clamped to 1..=5 by the provider; the router only ever
/// produces 1, 3 or 5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherAction {
    CurrentWeather { city: String },
    CurrentTime { city: String },
    Forecast { city: String, days: u8 },
}

impl WeatherAction {
    pub fn city(&self) -> &str {
        match self {
            WeatherAction::CurrentWeather { city }
            | WeatherAction::CurrentTime { city }
            | WeatherAction::Forecast { city, .. } => city,
        }
    }
}

/// Human-readable answer produced by a provider, shown to the chat user
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(String);

impl Report {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
