//! Routing of chat messages to weather provider actions.
//!
//! [`route`] is a pure decision function: no I/O, no retries, every
//! outcome is a value. Errors here are user-correctable input problems
//! (missing city), never system faults.

use crate::classify::{classify, extract_city};
use crate::model::{QueryCategory, WeatherAction};
use thiserror::Error;

/// Errors shown to the chat user verbatim as guidance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserFacingError {
    #[error(
        "Please specify a city for weather/time information. For example: 'What's the weather in New York?'"
    )]
    MissingCity,
}

/// What the caller should do with a routed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Weather/time query; run this action against a provider.
    Action(WeatherAction),
    /// Not a weather/time query; hand the text to the general-purpose
    /// chat responder instead.
    PassThrough,
}

/// Decide what to do with one chat message.
///
/// Forecast cues ("forecast", "tomorrow", "next") take precedence over
/// the time/weather split. Within the forecast branch, "tomorrow" is
/// checked before "5 day"/"five day", so a message containing both
/// yields a one-day forecast.
pub fn route(text: &str) -> Result<RouteOutcome, UserFacingError> {
    let classification = classify(text);
    let Some(category) = classification.category else {
        return Ok(RouteOutcome::PassThrough);
    };

    let Some(city) = extract_city(text) else {
        return Err(UserFacingError::MissingCity);
    };

    let lower = text.to_lowercase();

    if lower.contains("forecast") || lower.contains("tomorrow") || lower.contains("next") {
        let days = if lower.contains("tomorrow") {
            1
        } else if lower.contains("5 day") || lower.contains("five day") {
            5
        } else {
            3
        };
        return Ok(RouteOutcome::Action(WeatherAction::Forecast { city, days }));
    }

    if category == QueryCategory::Time || lower.contains("time") {
        return Ok(RouteOutcome::Action(WeatherAction::CurrentTime { city }));
    }

    Ok(RouteOutcome::Action(WeatherAction::CurrentWeather { city }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(text: &str) -> WeatherAction {
        match route(text) {
            Ok(RouteOutcome::Action(action)) => action,
            other => panic!("expected an action for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn weather_question_becomes_current_weather() {
        assert_eq!(
            action("What's the weather in London?"),
            WeatherAction::CurrentWeather { city: "london".into() }
        );
    }

    #[test]
    fn time_question_becomes_current_time() {
        assert_eq!(
            action("What time is it in Tokyo?"),
            WeatherAction::CurrentTime { city: "tokyo".into() }
        );
    }

    #[test]
    fn forecast_cue_becomes_three_day_forecast() {
        assert_eq!(
            action("What's the weather forecast for Paris?"),
            WeatherAction::Forecast { city: "paris".into(), days: 3 }
        );
    }

    #[test]
    fn five_day_forecast() {
        assert_eq!(
            action("5 day forecast for London"),
            WeatherAction::Forecast { city: "london".into(), days: 5 }
        );
        assert_eq!(
            action("five day forecast for London"),
            WeatherAction::Forecast { city: "london".into(), days: 5 }
        );
    }

    #[test]
    fn tomorrow_means_one_day() {
        assert_eq!(
            action("will it rain in Sydney tomorrow?"),
            WeatherAction::Forecast { city: "sydney".into(), days: 1 }
        );
    }

    #[test]
    fn tomorrow_wins_over_five_day() {
        // Both cues present; "tomorrow" is checked first.
        assert_eq!(
            action("five day forecast for London tomorrow?"),
            WeatherAction::Forecast { city: "london".into(), days: 1 }
        );
    }

    #[test]
    fn next_counts_as_forecast_cue() {
        assert_eq!(
            action("next week's weather in Rome?"),
            WeatherAction::Forecast { city: "rome".into(), days: 3 }
        );
    }

    #[test]
    fn unrelated_text_passes_through() {
        assert_eq!(route("Tell me a joke"), Ok(RouteOutcome::PassThrough));
    }

    #[test]
    fn missing_city_asks_the_user() {
        let err = route("weather").unwrap_err();
        assert_eq!(err, UserFacingError::MissingCity);
        assert!(err.to_string().contains("specify a city"));
    }

    #[test]
    fn routing_is_pure() {
        let text = "5 day forecast for London";
        assert_eq!(route(text), route(text));
    }
}
