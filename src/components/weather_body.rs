use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::display::{DisplayLabels, Emphasis};
use crate::emoji::Condition;

/// Renders the temperature, emoji and description labels
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub labels: &'a DisplayLabels,
    /// Celsius value used to colour the temperature, if loaded
    pub temperature: Option<f64>,
    pub condition: Option<Condition>,
}

/// Upper bound for the FIGlet temperature: terminus is 6 rows tall.
const TEMP_CAP: u16 = 6;

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match props.labels.emphasis {
            Emphasis::Large => render_report(frame, area, &props),
            Emphasis::Small => render_error(frame, area, &props.labels.primary),
            Emphasis::Muted => render_hint(frame, area, &props.labels.primary),
        }
    }
}

fn render_report(frame: &mut Frame, area: Rect, props: &WeatherBodyProps<'_>) {
    let chunks = Layout::vertical([
        Constraint::Max(TEMP_CAP), // Temperature
        Constraint::Length(1),     // blank
        Constraint::Length(1),     // Emoji
        Constraint::Length(1),     // blank
        Constraint::Length(1),     // Description
    ])
    .flex(Flex::Center)
    .split(area);

    let celsius = props.temperature.unwrap_or_default();
    let renderer = Renderer::new(font_stack())
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(celsius));
    frame.render_widget(ArtBox::new(&renderer, &props.labels.primary), chunks[0]);

    let emoji = Line::from(Span::styled(
        props.labels.emoji,
        Style::default().fg(condition_color(props.condition)),
    ))
    .centered();
    frame.render_widget(Paragraph::new(emoji), chunks[2]);

    let desc = Line::from(vec![Span::styled(
        props.labels.description.clone(),
        Style::default().fg(Color::Gray).bold(),
    )])
    .centered();
    frame.render_widget(Paragraph::new(desc), chunks[4]);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines: Vec<Line> = message
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 0 {
                Style::default().fg(Color::Red).bold()
            } else {
                Style::default().fg(Color::Rgb(200, 100, 100))
            };
            Line::from(Span::styled(line.to_string(), style)).centered()
        })
        .collect();

    let height = lines.len() as u16;
    let chunks = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(Paragraph::new(Text::from(lines)), chunks[0]);
}

fn render_hint(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let hint = Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

// ============================================================================
// Helpers
// ============================================================================

fn condition_color(condition: Option<Condition>) -> Color {
    match condition {
        Some(Condition::Clear) => Color::Yellow,
        Some(Condition::Thunderstorm) => Color::Magenta,
        Some(Condition::Drizzle | Condition::Rain) => Color::Blue,
        Some(Condition::Snow) => Color::White,
        _ => Color::Gray,
    }
}

type Rgb = (u8, u8, u8);

const CADET_BLUE: Rgb = (95, 158, 160);
const SAGE: Rgb = (143, 188, 143);
const BRICK: Rgb = (178, 34, 34);

/// Cadet blue for freezing, shading through sage and sand to brick red
fn gradient_stops(celsius: f64) -> (Rgb, Rgb) {
    match celsius {
        t if t <= 0.0 => ((176, 224, 230), CADET_BLUE),
        t if t <= 18.0 => (CADET_BLUE, SAGE),
        t if t <= 28.0 => (SAGE, (244, 196, 108)),
        _ => ((244, 164, 96), BRICK),
    }
}

fn temperature_gradient(celsius: f64) -> Fill {
    let ((r1, g1, b1), (r2, g2, b2)) = gradient_stops(celsius);
    Fill::Linear(LinearGradient::horizontal(
        ArtColor::rgb(r1, g1, b1),
        ArtColor::rgb(r2, g2, b2),
    ))
}
