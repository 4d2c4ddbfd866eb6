//! OpenWeatherMap-backed provider.
//!
//! Current conditions come from `/data/2.5/weather`, forecasts from
//! `/data/2.5/forecast` (3-hourly entries, 8 per day). Current time
//! never needs the API; it is answered from the timezone table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::model::Report;

use super::{ProviderError, WeatherProvider, timezone, title_case};

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Entries per forecast day (one every 3 hours).
const ENTRIES_PER_DAY: usize = 8;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn fetch(
        &self,
        url: &str,
        city: &str,
        extra: &[(&str, String)],
    ) -> Result<String, ProviderError> {
        let mut query = vec![
            ("q".to_string(), city.to_string()),
            ("appid".to_string(), self.api_key.clone()),
            ("units".to_string(), "metric".to_string()),
        ];
        for (k, v) in extra {
            query.push(((*k).to_string(), v.clone()));
        }

        let res = self.http.get(url).query(&query).send().await?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::CityNotFound(title_case(city)));
        }
        if !status.is_success() {
            return Err(ProviderError::Upstream { city: title_case(city), status });
        }

        Ok(res.text().await?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<Report, ProviderError> {
        let body = self.fetch(CURRENT_URL, city, &[]).await?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        Ok(current_report(city, &parsed))
    }

    async fn current_time(&self, city: &str) -> Result<Report, ProviderError> {
        timezone::current_time_report(city)
    }

    async fn forecast(&self, city: &str, days: u8) -> Result<Report, ProviderError> {
        let days = clamp_days(days);
        let cnt = usize::from(days) * ENTRIES_PER_DAY;

        let body = self
            .fetch(FORECAST_URL, city, &[("cnt", cnt.to_string())])
            .await?;
        let parsed: OwForecastResponse = serde_json::from_str(&body)?;
        Ok(forecast_report(city, &parsed, days))
    }
}

/// Out-of-range day counts fall back to the 3-day default.
fn clamp_days(days: u8) -> u8 {
    if (1..=5).contains(&days) { days } else { 3 }
}

fn current_report(city: &str, parsed: &OwCurrentResponse) -> Report {
    let condition = parsed
        .weather
        .first()
        .map(|w| title_case(&w.description))
        .unwrap_or_else(|| "Unknown".to_string());

    let temp = parsed.main.temp;
    Report::new(format!(
        "The weather in {} is {} with a temperature of {}°C ({:.1}°F). \
         Feels like {}°C. Humidity: {}%. Wind speed: {} m/s.",
        title_case(city),
        condition,
        temp,
        fahrenheit(temp),
        parsed.main.feels_like,
        parsed.main.humidity,
        parsed.wind.speed,
    ))
}

/// One line per day, taken from the first 3-hour slot of each day.
fn forecast_report(city: &str, parsed: &OwForecastResponse, days: u8) -> Report {
    let lines: Vec<String> = parsed
        .list
        .iter()
        .take(usize::from(days) * ENTRIES_PER_DAY)
        .step_by(ENTRIES_PER_DAY)
        .map(|entry| {
            let date = DateTime::<Utc>::from_timestamp(entry.dt, 0)
                .unwrap_or_else(Utc::now)
                .format("%A, %B %d");
            let condition = entry
                .weather
                .first()
                .map(|w| title_case(&w.description))
                .unwrap_or_else(|| "Unknown".to_string());
            format!("{}: {}, {}°C ({:.1}°F)", date, condition, entry.main.temp, fahrenheit(entry.main.temp))
        })
        .collect();

    Report::new(format!(
        "Weather forecast for {}:\n{}",
        title_case(city),
        lines.join("\n")
    ))
}

fn fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}
