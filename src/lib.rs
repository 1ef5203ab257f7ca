//! Weather widget - terminal weather lookup by city name or IP geolocation
//!
//! This library exposes the widget's modules for the binary and for testing.

pub mod action;
pub mod api;
pub mod assets;
pub mod components;
pub mod config;
pub mod display;
pub mod effect;
pub mod emoji;
pub mod error;
pub mod logging;
pub mod messages;
pub mod reducer;
pub mod state;
