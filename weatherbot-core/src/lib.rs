//! Core library for the `weatherbot` chat backend.
//!
//! This crate defines:
//! - The weather/time query classifier and city extractor
//! - Routing of chat messages to weather provider actions
//! - Abstraction over weather/time data providers
//! - Configuration & credentials handling
//!
//! It is used by `weatherbot-cli`, but can also be reused by other
//! binaries or services (e.g. an HTTP chat backend).

pub mod classify;
pub mod config;
pub mod model;
pub mod provider;
pub mod route;

pub use classify::{classify, extract_city};
pub use config::Config;
pub use model::{Classification, QueryCategory, Report, WeatherAction};
pub use provider::{ProviderError, WeatherProvider, dispatch, provider_from_config};
pub use route::{RouteOutcome, UserFacingError, route};
