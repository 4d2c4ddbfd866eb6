use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use weatherbot_core::{
    Config, RouteOutcome, WeatherProvider, dispatch, provider::timezone, provider_from_config,
    route,
};

/// Reply for messages that are not weather/time queries. A full chat
/// backend would forward those to its general-purpose responder.
const PASS_THROUGH_REPLY: &str = "I can help you with weather information, current time, and \
                                  forecasts. Please ask about the weather or time in a specific city.";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherbot", version, about = "Weather/time query router for chat messages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Route a single chat message and print the bot's reply.
    Ask {
        /// The message, e.g. "What's the weather in Paris?".
        text: String,
    },

    /// Interactive chat session. Empty line, "quit" or "exit" ends it.
    Chat,

    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show supported queries and cities.
    Capabilities,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Ask { text } => ask(&text).await,
            Command::Chat => chat().await,
            Command::Configure => configure(),
            Command::Capabilities => {
                print_capabilities();
                Ok(())
            }
        }
    }
}

/// Produce the bot's reply for one message. Routing misses and provider
/// failures become plain-language replies, not process errors.
async fn answer(provider: &dyn WeatherProvider, text: &str) -> String {
    match route(text) {
        Ok(RouteOutcome::Action(action)) => match dispatch(provider, &action).await {
            Ok(report) => report.to_string(),
            Err(err) => err.to_string(),
        },
        Ok(RouteOutcome::PassThrough) => PASS_THROUGH_REPLY.to_string(),
        Err(err) => err.to_string(),
    }
}

fn load_provider() -> Result<Box<dyn WeatherProvider>> {
    let config = Config::load()?;
    if config.openweather_api_key().is_none() {
        eprintln!(
            "Note: no OpenWeatherMap API key configured; answering from demo data. \
             Run `weatherbot configure` to set one."
        );
    }
    Ok(provider_from_config(&config))
}

async fn ask(text: &str) -> Result<()> {
    let provider = load_provider()?;
    println!("{}", answer(provider.as_ref(), text).await);
    Ok(())
}

async fn chat() -> Result<()> {
    let provider = load_provider()?;
    println!("weatherbot chat. Empty line, \"quit\" or \"exit\" to leave.");

    loop {
        let line = match inquire::Text::new("you:").prompt() {
            Ok(line) => line,
            Err(
                inquire::InquireError::OperationCanceled
                | inquire::InquireError::OperationInterrupted,
            ) => break,
            Err(err) => return Err(err).context("Failed to read chat input"),
        };

        let text = line.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit")
        {
            break;
        }

        println!("bot: {}", answer(provider.as_ref(), text).await);
    }

    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        config.clear_openweather_api_key();
        println!("Cleared the OpenWeatherMap API key; demo data will be used.");
    } else {
        config.set_openweather_api_key(api_key.trim().to_string());
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn print_capabilities() {
    println!("Supported queries:");
    println!("  current weather   e.g. \"What's the weather in New York?\"");
    println!("  current time      e.g. \"What time is it in Tokyo?\"");
    println!("  forecast (1-5 d)  e.g. \"5 day forecast for London\"");
    println!();
    println!("Cities with time support: {}", timezone::supported_cities().join(", "));
    println!();
    println!("More examples:");
    for example in [
        "What's the weather in Paris?",
        "Current time in Tokyo",
        "Is it raining in New York?",
        "Temperature in Sydney",
        "Will it rain in London tomorrow?",
    ] {
        println!("  {example}");
    }
}
