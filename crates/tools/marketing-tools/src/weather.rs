//! Current weather tool.

use openweather_async::{CurrentWeather, WeatherError};

use crate::MarketingTools;
use crate::types::WeatherInput;

/// Current weather for a city as a short multi-line report.
pub async fn get_weather_by_city(tools: &MarketingTools, input: WeatherInput) -> String {
    match tools.weather.current().by_city(&input.city_name).await {
        Ok(weather) => report(&weather),
        Err(WeatherError::Status { status, .. }) => {
            format!("Error: City not found or API error ({status})")
        }
        Err(e) => format!("Exception occurred: {e}"),
    }
}

/// Formats a weather reading.
#[must_use]
pub fn report(weather: &CurrentWeather) -> String {
    let Some(description) = weather.description() else {
        return "Exception occurred: response carried no weather conditions".to_string();
    };
    format!(
        "Weather in {}:\n- Temperature: {}°C\n- Description: {description}\n- Humidity: {}%\n- Wind Speed: {} m/s",
        weather.name, weather.main.temp, weather.main.humidity, weather.wind.speed
    )
}
