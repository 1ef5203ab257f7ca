//! OpenWeather condition id to emoji mapping
//!
//! Ids are grouped by hundreds: 2xx thunderstorm, 3xx drizzle, 5xx rain,
//! 6xx snow, 7xx atmosphere, 800 clear, 80x clouds.
//! See: https://openweathermap.org/weather-conditions

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Fog,
    Squall,
    Clear,
    Clouds,
    Unknown,
}

impl Condition {
    /// Map an OpenWeather condition id to a category
    pub fn from_id(id: i32) -> Self {
        match id {
            200..=232 => Condition::Thunderstorm,
            300..=321 => Condition::Drizzle,
            500..=531 => Condition::Rain,
            600..=622 => Condition::Snow,
            701..=741 => Condition::Fog,
            771 => Condition::Squall,
            800 => Condition::Clear,
            801..=804 => Condition::Clouds,
            _ => Condition::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Condition::Thunderstorm => "\u{26c8}\u{fe0f}",
            Condition::Drizzle => "\u{1f326}\u{fe0f}",
            Condition::Rain => "\u{1f327}\u{fe0f}",
            Condition::Snow => "\u{2744}\u{fe0f}",
            Condition::Fog => "\u{1f32b}\u{fe0f}",
            Condition::Squall => "\u{1f4a8}",
            Condition::Clear => "\u{2600}\u{fe0f}",
            Condition::Clouds => "\u{2601}\u{fe0f}",
            Condition::Unknown => "",
        }
    }
}

/// Emoji for the given condition id, empty when no range matches.
pub fn weather_emoji(id: i32) -> &'static str {
    Condition::from_id(id).emoji()
}
