use thiserror::Error;

/// Errors produced by weather sources and table construction.
///
/// The `Display` text of each variant is what the agent hands back to the
/// caller, so the wording is part of the observable behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No weather data available for {city}")]
    NotFound { city: String },

    #[error("Failed to fetch weather data for {city}: {reason}")]
    Unavailable { city: String, reason: String },

    #[error("City name must not be empty")]
    EmptyCity,

    #[error("City '{city}' is defined more than once")]
    DuplicateCity { city: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_city() {
        let err = LookupError::NotFound { city: "tokyo".into() };
        assert_eq!(err.to_string(), "No weather data available for tokyo");
    }

    #[test]
    fn unavailable_message_includes_reason() {
        let err = LookupError::Unavailable { city: "paris".into(), reason: "timed out".into() };
        assert_eq!(err.to_string(), "Failed to fetch weather data for paris: timed out");
    }
}
