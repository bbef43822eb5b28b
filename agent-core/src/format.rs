use crate::model::WeatherRecord;

/// Capitalize the first letter of every run of letters and lowercase the rest,
/// e.g. `"new york"` becomes `"New York"` and `"o'hare"` becomes `"O'Hare"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Render the one-line weather summary for `city`.
pub fn weather_summary(city: &str, record: &WeatherRecord) -> String {
    format!(
        "Weather in {}: {}, Temperature: {}°C, Humidity: {}%, Wind: {} km/h, Pressure: {} mb",
        title_case(city),
        title_case(&record.condition),
        record.temp_c,
        record.humidity,
        record.wind_kmh,
        record.pressure_mb,
    )
}
