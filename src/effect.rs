//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather for the given city name
    FetchWeather { city: String },
    /// Resolve the current city from the public IP address
    LocateCity,
}
