use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Banner, BannerProps, CityForm, CityFormProps, Component, WeatherBody, WeatherBodyProps,
    banner_height, city_form::CITY_FORM_HEIGHT,
};
use crate::action::Action;
use crate::display::DisplayLabels;
use crate::emoji::Condition;
use crate::state::AppState;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: banner, city form, labels, help bar
#[derive(Default)]
pub struct WeatherDisplay {
    form: CityForm,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Esc {
                return vec![Action::Quit];
            }
        }

        self.form
            .handle_event(
                event,
                CityFormProps {
                    city: &props.state.city_input,
                    is_focused: true,
                    is_busy: props.state.is_busy(),
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let banner = state.banner.as_deref();

        let chunks = Layout::vertical([
            Constraint::Max(banner_height(banner)), // Banner
            Constraint::Length(1),                  // Spacer
            Constraint::Length(CITY_FORM_HEIGHT),   // Input + buttons
            Constraint::Min(1),                     // Labels
            Constraint::Length(1),                  // Help bar
        ])
        .split(area);

        let mut header = Banner;
        header.render(frame, chunks[0], BannerProps { art: banner });

        self.form.render(
            frame,
            chunks[2],
            CityFormProps {
                city: &state.city_input,
                is_focused: props.is_focused,
                is_busy: state.is_busy(),
            },
        );

        let labels = DisplayLabels::from_state(state);
        let report = state.weather.data();
        let mut body = WeatherBody;
        body.render(
            frame,
            chunks[3],
            WeatherBodyProps {
                labels: &labels,
                temperature: report.map(|r| r.temperature_celsius),
                condition: report.map(|r| Condition::from_id(r.condition_id)),
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[4],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("Enter", "getir"),
                    StatusBarHint::new("F2", "konum"),
                    StatusBarHint::new("Esc", "çıkış"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
