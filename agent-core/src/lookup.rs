use std::{collections::HashMap, fmt::Debug};

use crate::{error::LookupError, model::WeatherRecord};

/// Anything that can answer "what is the weather in this city".
///
/// Implementations receive the city as captured from the query and are
/// expected to match it case-insensitively, ignoring surrounding whitespace.
pub trait WeatherSource: Send + Sync + Debug {
    fn lookup(&self, city: &str) -> Result<WeatherRecord, LookupError>;
}

/// Canonical form of a city key: trimmed and lowercased.
pub fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}

/// Immutable in-memory table of weather records keyed by normalized city name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherTable {
    records: HashMap<String, WeatherRecord>,
}

impl WeatherTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three cities the agent knows about out of the box.
    pub fn builtin() -> Self {
        let records = [
            ("karachi", WeatherRecord::new(29.0, "partly cloudy", 83, 16.0, 998.0)),
            ("london", WeatherRecord::new(15.0, "cloudy", 70, 10.0, 1012.0)),
            ("new york", WeatherRecord::new(22.0, "sunny", 65, 12.0, 1010.0)),
        ];

        Self {
            records: records.into_iter().map(|(city, record)| (city.to_string(), record)).collect(),
        }
    }

    /// Build a table from `(city, record)` pairs, rejecting keys that collide
    /// once normalized.
    pub fn from_records<I, S>(records: I) -> Result<Self, LookupError>
    where
        I: IntoIterator<Item = (S, WeatherRecord)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (city, record) in records {
            table.insert(city.as_ref(), record)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, city: &str, record: WeatherRecord) -> Result<(), LookupError> {
        let key = normalize_city(city);
        if key.is_empty() {
            return Err(LookupError::EmptyCity);
        }
        if self.records.contains_key(&key) {
            return Err(LookupError::DuplicateCity { city: key });
        }

        self.records.insert(key, record);
        Ok(())
    }

    /// Add every entry of `other`, replacing records for cities already present.
    pub fn merge(&mut self, other: WeatherTable) {
        self.records.extend(other.records);
    }

    pub fn get(&self, city: &str) -> Option<&WeatherRecord> {
        self.records.get(&normalize_city(city))
    }

    /// City keys in alphabetical order.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.records.keys().map(String::as_str).collect();
        cities.sort_unstable();
        cities
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl WeatherSource for WeatherTable {
    fn lookup(&self, city: &str) -> Result<WeatherRecord, LookupError> {
        let key = normalize_city(city);

        match self.records.get(&key) {
            Some(record) => {
                tracing::debug!(city = %key, "weather record found");
                Ok(record.clone())
            }
            None => {
                tracing::debug!(city = %key, "no weather record");
                Err(LookupError::NotFound { city: key })
            }
        }
    }
}
