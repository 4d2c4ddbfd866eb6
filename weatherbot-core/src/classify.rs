//! Keyword classification and city extraction for chat messages.
//!
//! Both routines are pure functions over the lowercased input: scan a
//! fixed ordered table, first match wins. The order of
//! [`CITY_PATTERNS`] is load-bearing: specific phrasings must be tried
//! before the generic fallbacks, otherwise "what time is it in tokyo"
//! would be captured by the trailing `<city> time` form as "what".

use crate::model::{Classification, QueryCategory};
use regex::Regex;
use std::sync::LazyLock;

/// Substrings that mark a message as a weather question. Checked before
/// the time keywords; the weather category wins when both families are
/// present.
const WEATHER_KEYWORDS: &[&str] = &[
    "weather",
    "temperature",
    "forecast",
    "rain",
    "raining",
    "sunny",
    "cloudy",
    "snow",
    "snowing",
    "wind",
    "windy",
    "humidity",
    "hot",
    "cold",
    "warm",
    "cool",
    "climate",
    "storm",
    "what's the weather",
    "how's the weather",
    "weather report",
    "weather in",
    "is it raining",
    "is it snowing",
    "is it sunny",
    "is it cloudy",
    "is it windy",
    "is it hot",
    "is it cold",
    "is it warm",
    "is it cool",
];

/// Substrings that mark a message as a time question.
const TIME_KEYWORDS: &[&str] = &["time", "current time", "what time", "time in", "clock", "hour", "minute"];

/// Words stripped from a captured city phrase before it is accepted.
const STOPWORDS: &[&str] = &["the", "a", "an", "today", "tomorrow", "now", "current"];

/// City capture patterns, most specific first. The input is lowercased
/// before matching, so `[a-z\s]` is enough for the capture class.
static CITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Explicit time phrasings.
        r"what\s+time\s+is\s+it\s+(?:in|at)\s+([a-z\s]+?)(?:\?|$|\.)",
        r"(?:current\s+time|time)\s+(?:in|at)\s+([a-z\s]+?)(?:\?|$|\.)",
        // Weather phrasings.
        r"(?:what's|how's)\s+the\s+(?:weather|time)\s+(?:in|at)\s+([a-z\s]+?)(?:\?|$|\.)",
        r"(?:is\s+it|are\s+there)\s+(?:raining|snowing|sunny|cloudy|windy|hot|cold|warm|cool)\s+(?:in|at)\s+([a-z\s]+?)(?:\?|$|\.)",
        // Generic phrasings.
        r"(?:weather|forecast|temperature)\s+(?:in|for|at)\s+([a-z\s]+?)(?:\?|$|\.)",
        r"(?:rain|snow|sun|wind|storm|temperature|hot|cold|warm|cool)\s+(?:in|at)\s+([a-z\s]+?)(?:\?|$|\.)",
        r"(?:in|at)\s+([a-z\s]+?)(?:\?|$|\.|,)\s*(?:is\s+it|what's|how's|weather|raining|snowing)",
        // Fallback suffix form.
        r"([a-z\s]+?)\s+(?:weather|time|forecast|temperature)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("city pattern must compile"))
    .collect()
});

/// Decide whether a message is a weather or time query.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    for keyword in WEATHER_KEYWORDS {
        if lower.contains(keyword) {
            return Classification::of(QueryCategory::Weather);
        }
    }

    for keyword in TIME_KEYWORDS {
        if lower.contains(keyword) {
            return Classification::of(QueryCategory::Time);
        }
    }

    Classification::none()
}

/// Pull a normalized city name out of a weather/time query.
///
/// Returns `None` when no pattern captures anything, or when the
/// capture is nothing but stopwords. Absence means "insufficient
/// information", not a failure; callers should ask the user for a city.
pub fn extract_city(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    for pattern in CITY_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&lower) {
            let words: Vec<&str> = caps[1]
                .split_whitespace()
                .filter(|w| !STOPWORDS.contains(w))
                .collect();

            // A capture that was all stopwords falls through to the
            // next, more general pattern.
            if !words.is_empty() {
                return Some(words.join(" "));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_question_classifies_as_weather() {
        let c = classify("What's the weather in Paris?");
        assert!(c.is_match());
        assert_eq!(c.category, Some(QueryCategory::Weather));
    }

    #[test]
    fn time_question_classifies_as_time() {
        let c = classify("What time is it in Tokyo?");
        assert!(c.is_match());
        assert_eq!(c.category, Some(QueryCategory::Time));
    }

    #[test]
    fn unrelated_text_does_not_match() {
        let c = classify("Tell me a joke");
        assert!(!c.is_match());
        assert_eq!(c.category, None);
    }

    #[test]
    fn weather_keywords_win_over_time_keywords() {
        // Contains both "weather" and "time"; the weather list is
        // checked first.
        let c = classify("what time does the weather report air?");
        assert_eq!(c.category, Some(QueryCategory::Weather));
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("IS IT RAINING?").category, Some(QueryCategory::Weather));
    }

    #[test]
    fn extracts_city_from_time_question() {
        assert_eq!(extract_city("what time is it in Tokyo?"), Some("tokyo".into()));
    }

    #[test]
    fn extracts_multi_word_city() {
        assert_eq!(extract_city("is it raining in new york?"), Some("new york".into()));
    }

    #[test]
    fn extracts_city_from_forecast_for_phrase() {
        assert_eq!(extract_city("5 day forecast for London"), Some("london".into()));
    }

    #[test]
    fn extracts_city_from_suffix_form() {
        assert_eq!(extract_city("tokyo weather"), Some("tokyo".into()));
    }

    #[test]
    fn time_pattern_beats_generic_fallback() {
        // If the fallback `<city> time` pattern ran first it would
        // capture "what" here.
        assert_eq!(extract_city("what time is it in Berlin"), Some("berlin".into()));
    }

    #[test]
    fn strips_stopwords_from_capture() {
        assert_eq!(extract_city("what's the weather in the new york today?"), Some("new york".into()));
    }

    #[test]
    fn no_city_yields_none() {
        assert_eq!(extract_city("tell me a joke"), None);
        assert_eq!(extract_city("weather"), None);
    }

    #[test]
    fn capture_of_only_stopwords_yields_none() {
        assert_eq!(extract_city("weather in today?"), None);
    }

    #[test]
    fn pure_and_repeatable() {
        let text = "What's the weather in Paris?";
        assert_eq!(classify(text), classify(text));
        assert_eq!(extract_city(text), extract_city(text));
    }
}
