use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Text};
use weather_agent_core::{
    Config, Response, WeatherAgent, WeatherRecord, WeatherSource, format::weather_summary,
    normalize_city,
};

/// Queries replayed by `demo`.
const DEMO_QUERIES: &[&str] = &[
    "What's the weather in Karachi?",
    "What's the weather in London?",
    "What's the weather in New York?",
    "What's the weather in Tokyo?",
    "What is the time in Paris?",
];

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-agent", version, about = "Answer 'what's the weather in <city>' questions")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask a single question, e.g. `ask What's the weather in London?`.
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Look up the record for one city.
    Lookup {
        city: String,

        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List known cities.
    Cities,

    /// Run the sample queries and print each reply.
    Demo,

    /// Ask questions interactively until an empty line or Esc.
    Chat,

    /// Add or replace a city record in the config file.
    Add {
        /// City name, e.g. "paris".
        city: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        tracing::debug!(command = ?self.command, config = ?self.config, "running command");

        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match self.command {
            Command::Ask { query } => {
                let agent = WeatherAgent::new(config.weather_table()?);
                println!("{}", agent.process(&query.join(" ")));
            }
            Command::Lookup { city, json } => {
                let table = config.weather_table()?;
                match table.lookup(&city) {
                    Ok(record) if json => {
                        let out = serde_json::to_string_pretty(&record)
                            .context("Failed to serialize weather record")?;
                        println!("{out}");
                    }
                    Ok(record) => println!("{}", weather_summary(&normalize_city(&city), &record)),
                    Err(err) => {
                        println!("{err}");
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
            Command::Cities => {
                let table = config.weather_table()?;
                for city in table.cities() {
                    println!("{city}");
                }
            }
            Command::Demo => {
                let agent = WeatherAgent::new(config.weather_table()?);
                print!("{}", demo_transcript(&agent));
            }
            Command::Chat => {
                let agent = WeatherAgent::new(config.weather_table()?);
                chat(&agent)?;
            }
            Command::Add { city } => {
                let record = prompt_record(&city)?;
                let mut config = config;
                config.upsert_city(&city, record)?;

                let path = match self.config {
                    Some(path) => {
                        config.save_to(&path)?;
                        path
                    }
                    None => config.save()?,
                };
                println!("Saved '{}' to {}", normalize_city(&city), path.display());
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn demo_transcript(agent: &WeatherAgent) -> String {
    let mut out = String::new();
    for query in DEMO_QUERIES {
        out.push_str(&format!("Query: {query}\n"));
        out.push_str(&format!("Response: {}\n", agent.process(query)));
        out.push_str(&format!("{}\n", "-".repeat(50)));
    }
    out
}

fn chat(agent: &WeatherAgent) -> Result<()> {
    loop {
        let query = match Text::new("You:")
            .with_help_message("e.g. What's the weather in London? (empty line or Esc to quit)")
            .prompt()
        {
            Ok(query) => query,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read query"),
        };

        if query.trim().is_empty() {
            break;
        }

        match agent.respond(&query) {
            reply @ Response::Unrecognized => println!("{reply}"),
            reply => println!("Agent: {reply}"),
        }
    }

    Ok(())
}

fn prompt_record(city: &str) -> Result<WeatherRecord> {
    let temp_c = CustomType::<f64>::new(&format!("Temperature in {city} (°C):"))
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read temperature")?;

    let condition = Text::new("Condition:")
        .with_help_message("e.g. partly cloudy")
        .prompt()
        .context("Failed to read condition")?;
    ensure!(!condition.trim().is_empty(), "Condition must not be empty");

    let humidity = CustomType::<u8>::new("Humidity (%):")
        .with_error_message("Please enter a whole number between 0 and 100")
        .prompt()
        .context("Failed to read humidity")?;
    ensure!(humidity <= 100, "Humidity must be between 0 and 100, got {humidity}");

    let wind_kmh = CustomType::<f64>::new("Wind (km/h):")
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read wind speed")?;

    let pressure_mb = CustomType::<f64>::new("Pressure (mb):")
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read pressure")?;

    Ok(WeatherRecord::new(temp_c, condition.trim().to_lowercase(), humidity, wind_kmh, pressure_mb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["weather-agent", "ask", "What's", "the", "weather", "in", "London?"])
            .unwrap();

        match cli.command {
            Command::Ask { query } => assert_eq!(query.join(" "), "What's the weather in London?"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["weather-agent", "cities", "--config", "/tmp/w.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/w.toml")));
    }

    #[test]
    fn ask_requires_a_query() {
        assert!(Cli::try_parse_from(["weather-agent", "ask"]).is_err());
    }

    #[test]
    fn demo_transcript_matches_sample_run() {
        let transcript = demo_transcript(&WeatherAgent::default());
        let lines: Vec<&str> = transcript.lines().collect();

        assert_eq!(lines.len(), DEMO_QUERIES.len() * 3);
        assert_eq!(lines[0], "Query: What's the weather in Karachi?");
        assert_eq!(
            lines[1],
            "Response: Weather in Karachi: Partly Cloudy, Temperature: 29°C, Humidity: 83%, Wind: 16 km/h, Pressure: 998 mb"
        );
        assert_eq!(lines[2], "-".repeat(50));
        assert_eq!(lines[10], "Response: No weather data available for tokyo");
        assert!(lines[13].starts_with("Response: Sorry, I can only handle weather queries"));
    }
}
