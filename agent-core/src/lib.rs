//! Core library for the `weather-agent` CLI.
//!
//! This crate defines:
//! - The query interpreter that recognizes "what's the weather in <city>"
//! - The weather lookup table and the `WeatherSource` seam it implements
//! - Configuration for extra or overriding city records
//!
//! It is used by `weather-agent-cli`, but the agent itself has no I/O and can
//! be embedded anywhere a string-in, string-out handler is needed.

pub mod agent;
pub mod config;
pub mod error;
pub mod format;
pub mod lookup;
pub mod model;

pub use agent::{FALLBACK_MESSAGE, Response, WeatherAgent, parse_city};
pub use config::Config;
pub use error::LookupError;
pub use lookup::{WeatherSource, WeatherTable, normalize_city};
pub use model::WeatherRecord;
