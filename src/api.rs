//! OpenWeather and ip-api client

use reqwest::Client;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::state::WeatherReport;

const USER_AGENT: &str = concat!("weather-widget/", env!("CARGO_PKG_VERSION"));

/// Client for the two services the widget talks to
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: Client,
    config: ClientConfig,
}

impl WeatherClient {
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    // ========================================================================
    // Geolocation
    // ========================================================================

    /// Resolve the city of the machine's public IP address
    pub async fn locate_city(&self) -> Result<String, FetchError> {
        tracing::debug!(url = %self.config.geo_url, "requesting geolocation");

        let response = self
            .http
            .get(&self.config.geo_url)
            .send()
            .await
            .map_err(|e| FetchError::Location(e.without_url().to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Location(e.without_url().to_string()))?;

        let city = parse_geolocation(&body)?;
        tracing::info!(%city, "geolocated");
        Ok(city)
    }

    // ========================================================================
    // Weather
    // ========================================================================

    /// Fetch current weather for a city name
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, FetchError> {
        // The URL carries the credential, so only the city is logged.
        let url = format!(
            "{}?q={}&appid={}&lang={}",
            self.config.weather_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(&self.config.lang),
        );
        tracing::debug!(%city, "requesting weather");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?
            .error_for_status()
            .map_err(transport_error)?;

        let body = response.bytes().await.map_err(transport_error)?;

        let report = parse_weather(&body)?;
        tracing::info!(
            %city,
            celsius = report.temperature_celsius,
            id = report.condition_id,
            "weather loaded"
        );
        Ok(report)
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::from_transport(&err.without_url())
}

// ============================================================================
// Response decoding
// ============================================================================

/// ip-api.com response
#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    status: String,
    city: Option<String>,
}

/// Extract the city from an ip-api.com body
pub fn parse_geolocation(body: &[u8]) -> Result<String, FetchError> {
    let data: GeoResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Location(e.to_string()))?;

    if data.status != "success" {
        return Err(FetchError::LocationUnavailable);
    }

    data.city
        .filter(|city| !city.is_empty())
        .ok_or_else(|| FetchError::Location("response has no city".to_string()))
}

/// OpenWeather current-weather response
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    // Integer on success, but error bodies carry it as a string ("404").
    #[serde(default)]
    cod: serde_json::Value,
    main: Option<MainBlock>,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    id: i32,
    description: String,
}

impl WeatherResponse {
    fn is_ok(&self) -> bool {
        self.cod.as_i64() == Some(200) || self.cod.as_str() == Some("200")
    }
}

/// Turn an OpenWeather body into a report
pub fn parse_weather(body: &[u8]) -> Result<WeatherReport, FetchError> {
    let data: WeatherResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Request(e.to_string()))?;

    if !data.is_ok() {
        return Err(FetchError::CityNotFound);
    }

    let main = data
        .main
        .ok_or_else(|| FetchError::Request("response has no main block".to_string()))?;
    let condition = data
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Request("response has no weather entry".to_string()))?;

    Ok(WeatherReport::from_kelvin(
        main.temp,
        condition.id,
        condition.description,
    ))
}
