//! HTTP client settings

use std::time::Duration;

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_GEO_URL: &str = "http://ip-api.com/json/";
pub const DEFAULT_LANG: &str = "tr";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything [`crate::api::WeatherClient`] needs to talk to both services
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_key: String,
    pub lang: String,
    pub weather_url: String,
    pub geo_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Default endpoints with the given OpenWeather credential
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            lang: DEFAULT_LANG.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            geo_url: DEFAULT_GEO_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_weather_url(mut self, url: impl Into<String>) -> Self {
        self.weather_url = url.into();
        self
    }

    pub fn with_geo_url(mut self, url: impl Into<String>) -> Self {
        self.geo_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
