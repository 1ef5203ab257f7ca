pub mod banner;
pub mod city_form;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use banner::{Banner, BannerProps, banner_height};
pub use city_form::{CityForm, CityFormProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
