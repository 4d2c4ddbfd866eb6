use crate::{
    config::Config,
    model::{Report, WeatherAction},
};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod mock;
pub mod openweather;
pub mod timezone;

/// Failures reported by a weather/time provider.
///
/// Every variant renders as a plain-language message that can be shown
/// to the chat user directly; none of them should crash the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("City '{0}' not found. Please check the spelling and try again.")]
    CityNotFound(String),

    #[error("Sorry, I don't have timezone information for {city}. Supported cities: {supported}")]
    UnknownTimezone { city: String, supported: String },

    #[error("Network error while fetching weather data: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unable to fetch weather data for '{city}'. Please try again later.")]
    Upstream { city: String, status: reqwest::StatusCode },

    #[error("Error retrieving weather data: {0}")]
    UnexpectedPayload(#[from] serde_json::Error),

    /// Catch-all for provider-specific conditions (e.g. a city outside
    /// the demo data set). Carries the full user-facing message.
    #[error("{0}")]
    Unavailable(String),
}

/// Weather-data source consumed by the dispatcher.
///
/// `Report` values are complete sentences ready to be stored as chat
/// messages.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<Report, ProviderError>;
    async fn current_time(&self, city: &str) -> Result<Report, ProviderError>;
    async fn forecast(&self, city: &str, days: u8) -> Result<Report, ProviderError>;
}

/// Run a routed action against a provider.
pub async fn dispatch(
    provider: &dyn WeatherProvider,
    action: &WeatherAction,
) -> Result<Report, ProviderError> {
    match action {
        WeatherAction::CurrentWeather { city } => provider.current_weather(city).await,
        WeatherAction::CurrentTime { city } => provider.current_time(city).await,
        WeatherAction::Forecast { city, days } => provider.forecast(city, *days).await,
    }
}

/// Construct a provider from config: OpenWeatherMap when an API key is
/// present, canned demo data otherwise.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    match config.openweather_api_key() {
        Some(key) => Box::new(openweather::OpenWeatherProvider::new(key.to_owned())),
        None => Box::new(mock::MockProvider),
    }
}

/// Capitalize each whitespace-separated word, like city names in the
/// report strings ("new york" -> "New York").
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("TOKYO"), "Tokyo");
        assert_eq!(title_case("  buenos   aires "), "Buenos Aires");
    }

    #[test]
    fn provider_from_config_uses_demo_data_without_key() {
        let cfg = Config::default();
        let provider = provider_from_config(&cfg);
        assert!(format!("{provider:?}").contains("Mock"));
    }

    #[test]
    fn provider_from_config_uses_openweather_with_key() {
        let mut cfg = Config::default();
        cfg.set_openweather_api_key("KEY".to_string());
        let provider = provider_from_config(&cfg);
        assert!(format!("{provider:?}").contains("OpenWeather"));
    }

    #[tokio::test]
    async fn dispatch_maps_actions_to_provider_calls() {
        let provider = mock::MockProvider;

        let weather = WeatherAction::CurrentWeather { city: "paris".into() };
        let report = dispatch(&provider, &weather).await.unwrap();
        assert!(report.as_str().contains("Paris"));

        let time = WeatherAction::CurrentTime { city: "tokyo".into() };
        let report = dispatch(&provider, &time).await.unwrap();
        assert!(report.as_str().contains("The current time in Tokyo"));

        let forecast = WeatherAction::Forecast { city: "london".into(), days: 2 };
        let report = dispatch(&provider, &forecast).await.unwrap();
        assert!(report.as_str().starts_with("Weather forecast for London:"));
    }
}
