use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

/// Button colour (cadet blue)
const BUTTON_BG: Color = Color::Rgb(95, 158, 160);
const INPUT_BG: Color = Color::Rgb(40, 44, 52);

pub const PLACEHOLDER: &str = "Şehir Adı";
pub const FETCH_LABEL: &str = "Bilgileri Getir";
pub const LOCATE_LABEL: &str = "Konumdan Getir";

/// City input plus the two fetch buttons
pub struct CityForm {
    input: TextInput,
}

pub struct CityFormProps<'a> {
    pub city: &'a str,
    pub is_focused: bool,
    /// A request is in flight; buttons render dimmed
    pub is_busy: bool,
}

/// Rows taken by the form: input (3) + buttons (1)
pub const CITY_FORM_HEIGHT: u16 = 4;

impl Default for CityForm {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl CityForm {
    pub fn new() -> Self {
        Self::default()
    }
}

fn submit_city(_: String) -> Action {
    Action::WeatherFetch
}

fn ui_render(_: usize) -> Action {
    Action::Render
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::all(1),
            bg: Some(INPUT_BG),
            fg: Some(Color::White),
        },
        placeholder_style: Some(Style::default().fg(Color::DarkGray)),
        cursor_style: None,
    }
}

fn is_locate_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::F(2) => true,
        KeyCode::Char('l') | KeyCode::Char('L') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl Component<Action> for CityForm {
    type Props<'a> = CityFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        // Buttons first, everything else edits the city
        if key.code == KeyCode::Enter {
            return vec![Action::WeatherFetch];
        }
        if is_locate_key(key.code, key.modifiers) {
            return vec![Action::LocateFetch];
        }

        let input_props = TextInputProps {
            value: props.city,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: input_style(),
            on_change: Action::CityInputChange,
            on_submit: submit_city,
            on_cursor_move: Some(ui_render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Buttons
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.city,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: input_style(),
            on_change: Action::CityInputChange,
            on_submit: submit_city,
            on_cursor_move: Some(ui_render),
        };
        self.input.render(frame, chunks[0], input_props);

        let button = |key: &'static str, label: &'static str| {
            let style = if props.is_busy {
                Style::default().fg(Color::Gray).bg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::Black)
                    .bg(BUTTON_BG)
                    .add_modifier(Modifier::BOLD)
            };
            vec![
                Span::styled(format!(" {key} "), style.add_modifier(Modifier::REVERSED)),
                Span::styled(format!(" {label} "), style),
            ]
        };

        let mut spans = button("Enter", FETCH_LABEL);
        spans.push(Span::raw("   "));
        spans.extend(button("F2", LOCATE_LABEL));
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tui_dispatch::testing::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> EventKind {
        EventKind::Key(KeyEvent::new(code, modifiers))
    }

    fn actions_for(form: &mut CityForm, event: EventKind) -> Vec<Action> {
        let props = CityFormProps {
            city: "Ank",
            is_focused: true,
            is_busy: false,
        };
        form.handle_event(&event, props).into_iter().collect()
    }

    #[test]
    fn test_enter_fetches_typed_city() {
        let mut form = CityForm::new();
        let actions = actions_for(&mut form, press(KeyCode::Enter, KeyModifiers::NONE));
        actions.assert_count(1);
        actions.assert_first(Action::WeatherFetch);
    }

    #[test]
    fn test_locate_keys() {
        let mut form = CityForm::new();
        let actions = actions_for(&mut form, press(KeyCode::F(2), KeyModifiers::NONE));
        actions.assert_first(Action::LocateFetch);

        let actions = actions_for(&mut form, press(KeyCode::Char('l'), KeyModifiers::CONTROL));
        actions.assert_first(Action::LocateFetch);
    }

    #[test]
    fn test_plain_l_is_typed() {
        let mut form = CityForm::new();
        let actions = actions_for(&mut form, press(KeyCode::Char('l'), KeyModifiers::NONE));
        assert!(!actions.contains(&Action::LocateFetch));
    }

    #[test]
    fn test_unfocused_ignores() {
        let mut form = CityForm::new();
        let props = CityFormProps {
            city: "",
            is_focused: false,
            is_busy: false,
        };
        let actions: Vec<_> = form
            .handle_event(&press(KeyCode::Enter, KeyModifiers::NONE), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_shows_buttons() {
        let mut render = RenderHarness::new(60, 4);
        let mut form = CityForm::new();

        let output = render.render_to_string_plain(|frame| {
            let props = CityFormProps {
                city: "",
                is_focused: true,
                is_busy: false,
            };
            form.render(frame, frame.area(), props);
        });

        assert!(output.contains(FETCH_LABEL));
        assert!(output.contains(LOCATE_LABEL));
    }
}
