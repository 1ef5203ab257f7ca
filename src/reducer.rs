//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::messages::error_message;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== City actions =====
        Action::CityInputChange(city) => {
            state.city_input = city;
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherFetch => {
            // Empty input goes through as-is; the API answers it with an error.
            state.weather = DataResource::Loading;
            state.locating = false;
            DispatchResult::changed_with(Effect::FetchWeather {
                city: state.city_input.clone(),
            })
        }

        // A typed-city result that lands after F2 belongs to a superseded request
        Action::WeatherDidLoad(_) | Action::WeatherDidError(_) if state.locating => {
            DispatchResult::unchanged()
        }

        Action::WeatherDidLoad(report) => {
            state.weather = DataResource::Loaded(report);
            state.locating = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError(err) => {
            state.weather = DataResource::Failed(error_message(&err));
            state.locating = false;
            DispatchResult::changed()
        }

        // ===== Locate actions =====
        Action::LocateFetch => {
            state.weather = DataResource::Loading;
            state.locating = true;
            DispatchResult::changed_with(Effect::LocateCity)
        }

        // Enter while geolocating clears `locating`; the late lookup is dropped
        Action::LocateDidLoad(_) | Action::LocateDidError(_) if !state.locating => {
            DispatchResult::unchanged()
        }

        Action::LocateDidLoad(city) => {
            state.city_input = city.clone();
            state.weather = DataResource::Loading;
            state.locating = false;
            DispatchResult::changed_with(Effect::FetchWeather { city })
        }

        Action::LocateDidError(err) => {
            state.weather = DataResource::Failed(error_message(&err));
            state.locating = false;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}
