//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== City category =====
    /// City input text changed
    CityInputChange(String),

    // ===== Weather category =====
    /// Intent: fetch weather for the typed city (triggers async task)
    WeatherFetch,

    /// Result: weather data loaded successfully
    WeatherDidLoad(WeatherReport),

    /// Result: weather fetch failed
    WeatherDidError(FetchError),

    // ===== Locate category =====
    /// Intent: detect the city from the public IP, then fetch its weather
    LocateFetch,

    /// Result: geolocation resolved a city name
    LocateDidLoad(String),

    /// Result: geolocation failed
    LocateDidError(FetchError),

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}
