//! City to IANA timezone mapping for current-time queries.
//!
//! Purely table-driven, no I/O; all providers share it.

use super::{ProviderError, title_case};
use crate::model::Report;
use chrono::Utc;
use chrono_tz::Tz;

const CITY_TIMEZONES: &[(&str, Tz)] = &[
    ("new york", chrono_tz::America::New_York),
    ("london", chrono_tz::Europe::London),
    ("paris", chrono_tz::Europe::Paris),
    ("tokyo", chrono_tz::Asia::Tokyo),
    ("los angeles", chrono_tz::America::Los_Angeles),
    ("chicago", chrono_tz::America::Chicago),
    ("sydney", chrono_tz::Australia::Sydney),
    ("moscow", chrono_tz::Europe::Moscow),
    ("beijing", chrono_tz::Asia::Shanghai),
    ("mumbai", chrono_tz::Asia::Kolkata),
    ("dubai", chrono_tz::Asia::Dubai),
    ("singapore", chrono_tz::Asia::Singapore),
    ("berlin", chrono_tz::Europe::Berlin),
    ("rome", chrono_tz::Europe::Rome),
    ("madrid", chrono_tz::Europe::Madrid),
    ("toronto", chrono_tz::America::Toronto),
    ("vancouver", chrono_tz::America::Vancouver),
    ("mexico city", chrono_tz::America::Mexico_City),
    ("sao paulo", chrono_tz::America::Sao_Paulo),
    ("buenos aires", chrono_tz::America::Argentina::Buenos_Aires),
];

/// Timezone for a city, case-insensitive.
pub fn lookup(city: &str) -> Option<Tz> {
    let city = city.to_lowercase();
    CITY_TIMEZONES
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, tz)| *tz)
}

/// Cities with a known timezone, in display form.
pub fn supported_cities() -> Vec<String> {
    CITY_TIMEZONES.iter().map(|(name, _)| title_case(name)).collect()
}

/// Format the current time in a city as a chat reply.
pub fn current_time_report(city: &str) -> Result<Report, ProviderError> {
    let tz = lookup(city).ok_or_else(|| ProviderError::UnknownTimezone {
        city: title_case(city),
        supported: supported_cities().join(", "),
    })?;

    let now = Utc::now().with_timezone(&tz);
    Ok(Report::new(format!(
        "The current time in {} is {}",
        title_case(city),
        now.format("%Y-%m-%d %H:%M:%S %Z%z")
    )))
}
