//! Canned demo provider, used when no API key is configured and as a
//! test double. Time queries are answered for real from the timezone
//! table.

use async_trait::async_trait;

use crate::model::Report;

use super::{ProviderError, WeatherProvider, timezone, title_case};

const DEMO_CONDITIONS: &[(&str, &str)] = &[
    ("new york", "Sunny with a temperature of 25°C (77°F). Light wind from the southwest."),
    ("london", "Cloudy with occasional rain, 18°C (64°F). Moderate wind from the west."),
    ("paris", "Partly cloudy, 22°C (72°F). Light breeze from the north."),
    ("tokyo", "Clear skies, 28°C (82°F). High humidity with light wind."),
];

const DEMO_FORECASTS: &[(&str, &[&str])] = &[
    (
        "new york",
        &[
            "Tomorrow: Partly cloudy, 24°C (75°F)",
            "Day 2: Sunny, 27°C (81°F)",
            "Day 3: Light rain, 21°C (70°F)",
        ],
    ),
    (
        "london",
        &[
            "Tomorrow: Overcast, 17°C (63°F)",
            "Day 2: Light rain, 15°C (59°F)",
            "Day 3: Partly cloudy, 19°C (66°F)",
        ],
    ),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn current_weather(&self, city: &str) -> Result<Report, ProviderError> {
        let key = city.to_lowercase();
        let conditions = DEMO_CONDITIONS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, text)| *text)
            .ok_or_else(|| {
                ProviderError::Unavailable(format!(
                    "Weather information for '{city}' is not available. \
                     Please try New York, London, Paris, or Tokyo."
                ))
            })?;

        Ok(Report::new(format!("The weather in {} is {}", title_case(city), conditions)))
    }

    async fn current_time(&self, city: &str) -> Result<Report, ProviderError> {
        timezone::current_time_report(city)
    }

    async fn forecast(&self, city: &str, days: u8) -> Result<Report, ProviderError> {
        let days = if (1..=5).contains(&days) { days } else { 3 };
        let key = city.to_lowercase();

        let lines = DEMO_FORECASTS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, lines)| *lines)
            .ok_or_else(|| {
                ProviderError::Unavailable(format!(
                    "Forecast data for '{city}' is not available in demo mode."
                ))
            })?;

        let shown: Vec<&str> = lines.iter().copied().take(usize::from(days)).collect();
        Ok(Report::new(format!(
            "Weather forecast for {}:\n{}",
            title_case(city),
            shown.join("\n")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_city_gets_a_weather_report() {
        let report = MockProvider.current_weather("new york").await.unwrap();
        assert!(report.as_str().starts_with("The weather in New York is Sunny"));
    }

    #[tokio::test]
    async fn unknown_city_is_rejected_with_guidance() {
        let err = MockProvider.current_weather("oslo").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'oslo' is not available"));
        assert!(msg.contains("New York, London, Paris, or Tokyo"));
    }

    #[tokio::test]
    async fn forecast_is_trimmed_to_requested_days() {
        let report = MockProvider.forecast("london", 1).await.unwrap();
        assert_eq!(report.as_str(), "Weather forecast for London:\nTomorrow: Overcast, 17°C (63°F)");
    }

    #[tokio::test]
    async fn forecast_days_out_of_range_defaults_to_three() {
        let report = MockProvider.forecast("london", 9).await.unwrap();
        assert_eq!(report.as_str().lines().count(), 4);
    }

    #[tokio::test]
    async fn forecast_for_unknown_city_is_rejected() {
        let err = MockProvider.forecast("paris", 3).await.unwrap_err();
        assert!(err.to_string().contains("not available in demo mode"));
    }

    #[tokio::test]
    async fn time_queries_use_the_timezone_table() {
        let report = MockProvider.current_time("tokyo").await.unwrap();
        assert!(report.as_str().starts_with("The current time in Tokyo is "));
    }
}
