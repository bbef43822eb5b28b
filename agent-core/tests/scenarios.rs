use weather_agent_core::{FALLBACK_MESSAGE, WeatherAgent, WeatherSource, WeatherTable};

#[test]
fn karachi_summary() {
    let agent = WeatherAgent::default();
    assert_eq!(
        agent.process("What's the weather in Karachi?"),
        "Weather in Karachi: Partly Cloudy, Temperature: 29°C, Humidity: 83%, Wind: 16 km/h, Pressure: 998 mb"
    );
}

#[test]
fn unknown_city() {
    let agent = WeatherAgent::default();
    assert_eq!(agent.process("What's the weather in Tokyo?"), "No weather data available for tokyo");
}

#[test]
fn unrelated_question() {
    let agent = WeatherAgent::default();
    assert_eq!(agent.process("What is the time in Paris?"), FALLBACK_MESSAGE);
    assert_eq!(
        FALLBACK_MESSAGE,
        "Sorry, I can only handle weather queries in the format 'What's the weather in [city]?'"
    );
}

#[test]
fn every_builtin_city_reports_stored_values() {
    let agent = WeatherAgent::default();
    let table = WeatherTable::builtin();

    for city in table.cities() {
        let record = table.lookup(city).unwrap();

        for query in [
            format!("What's the weather in {city}?"),
            format!("WHAT'S THE WEATHER IN {}", city.to_uppercase()),
            format!("what's the weather {city}"),
        ] {
            let reply = agent.process(&query);
            assert!(reply.starts_with("Weather in "), "{query} -> {reply}");
            assert!(reply.contains(&format!("Temperature: {}°C", record.temp_c)));
            assert!(reply.contains(&format!("Humidity: {}%", record.humidity)));
            assert!(reply.contains(&format!("Wind: {} km/h", record.wind_kmh)));
            assert!(reply.contains(&format!("Pressure: {} mb", record.pressure_mb)));
        }
    }
}

#[test]
fn missing_city_echoes_lowercased_capture() {
    let agent = WeatherAgent::default();
    assert_eq!(
        agent.process("  What's the weather in   Buenos Aires  ?"),
        "No weather data available for buenos aires"
    );
}

#[test]
fn repeated_calls_are_identical() {
    let agent = WeatherAgent::default();
    let queries = ["What's the weather in London?", "What's the weather in Lima?", "hi"];

    let first: Vec<String> = queries.iter().map(|q| agent.process(q)).collect();
    let second: Vec<String> = queries.iter().map(|q| agent.process(q)).collect();

    assert_eq!(first, second);
}
