use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::{
    error::LookupError,
    format::weather_summary,
    lookup::{WeatherSource, WeatherTable},
    model::WeatherRecord,
};

/// Reply for any query the agent does not recognize.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I can only handle weather queries in the format 'What's the weather in [city]?'";

// Anchored at the start only; anything after the city is ignored.
static WEATHER_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^what'?s\s+the\s+weather\s+(?:in\s+)?([\w\s]+)\??")
        .expect("weather query pattern is valid")
});

/// Extract the city from a "what's the weather in <city>" query.
///
/// The query is trimmed and lowercased first, so the returned city is
/// lowercase too. Returns `None` when the phrasing is not recognized.
pub fn parse_city(query: &str) -> Option<String> {
    let normalized = query.trim().to_lowercase();
    let captures = WEATHER_QUERY.captures(&normalized)?;

    captures.get(1).map(|city| city.as_str().trim().to_string())
}

/// Typed outcome of a single query.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Weather { city: String, record: WeatherRecord },
    NoData(LookupError),
    Unrecognized,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Weather { city, record } => f.write_str(&weather_summary(city, record)),
            Response::NoData(err) => write!(f, "{err}"),
            Response::Unrecognized => f.write_str(FALLBACK_MESSAGE),
        }
    }
}

/// Single-intent agent answering weather questions from an injected source.
#[derive(Debug)]
pub struct WeatherAgent {
    source: Box<dyn WeatherSource>,
}

impl Default for WeatherAgent {
    fn default() -> Self {
        Self::new(WeatherTable::builtin())
    }
}

impl WeatherAgent {
    pub fn new(source: impl WeatherSource + 'static) -> Self {
        Self { source: Box::new(source) }
    }

    pub fn from_boxed(source: Box<dyn WeatherSource>) -> Self {
        Self { source }
    }

    pub fn respond(&self, query: &str) -> Response {
        let Some(city) = parse_city(query) else {
            tracing::debug!(query, "query did not match weather pattern");
            return Response::Unrecognized;
        };

        match self.source.lookup(&city) {
            Ok(record) => Response::Weather { city, record },
            Err(err) => Response::NoData(err),
        }
    }

    /// Answer `query` with a human-readable sentence. Never fails: lookup
    /// misses and unrecognized phrasing both come back as messages.
    pub fn process(&self, query: &str) -> String {
        self.respond(query).to_string()
    }
}
