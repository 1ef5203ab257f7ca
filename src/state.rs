//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Current conditions decoded from the OpenWeather API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub temperature_celsius: f64,
    pub condition_id: i32, // OpenWeather condition id
    pub description: String,
}

impl WeatherReport {
    /// Build a report from the raw Kelvin temperature the API returns
    pub fn from_kelvin(kelvin: f64, condition_id: i32, description: impl Into<String>) -> Self {
        Self {
            temperature_celsius: kelvin - KELVIN_OFFSET,
            condition_id,
            description: description.into(),
        }
    }

    /// Temperature rounded to whole degrees, e.g. `22°C`
    pub fn temperature_label(&self) -> String {
        format!("{:.0}°C", self.temperature_celsius)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text in the city input field
    #[debug(section = "Query", label = "City")]
    pub city_input: String,

    /// Weather lifecycle: Empty → Loading → Loaded/Failed
    ///
    /// `Failed` holds the user-facing error message.
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherReport>,

    /// Whether the pending fetch was started from geolocation
    #[debug(section = "Weather", label = "Locating")]
    pub locating: bool,

    /// Banner art loaded from the assets directory
    #[debug(skip)]
    pub banner: Option<String>,
}

impl AppState {
    /// Create state with the city input prefilled
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city_input: city.into(),
            weather: DataResource::Empty,
            locating: false,
            banner: None,
        }
    }

    pub fn with_banner(mut self, banner: Option<String>) -> Self {
        self.banner = banner;
        self
    }

    pub fn is_busy(&self) -> bool {
        self.weather.is_loading()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_conversion() {
        let report = WeatherReport::from_kelvin(300.0, 800, "clear sky");
        assert_eq!(report.temperature_label(), "27°C");

        let report = WeatherReport::from_kelvin(295.15, 800, "clear sky");
        assert_eq!(report.temperature_label(), "22°C");
    }

    #[test]
    fn test_below_freezing() {
        let report = WeatherReport::from_kelvin(263.15, 600, "snow");
        assert_eq!(report.temperature_label(), "-10°C");
    }

    #[test]
    fn test_new_prefills_city() {
        let state = AppState::new("Ankara");
        assert_eq!(state.city_input, "Ankara");
        assert!(state.weather.is_empty());
        assert!(state.banner.is_none());
    }
}
