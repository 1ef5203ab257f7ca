use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub const TITLE: &str = "Weather App";

/// Banner header: bundled art if present, otherwise the title in FIGlet
pub struct Banner;

pub struct BannerProps<'a> {
    pub art: Option<&'a str>,
}

/// Rows the header asks for
pub fn banner_height(art: Option<&str>) -> u16 {
    match art {
        Some(art) => art.lines().count().min(u16::MAX as usize) as u16,
        None => 6,
    }
}

impl Component<Action> for Banner {
    type Props<'a> = BannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match props.art {
            Some(art) => {
                let lines: Vec<Line> = art
                    .lines()
                    .map(|line| Line::from(line.to_string()).centered())
                    .collect();
                frame.render_widget(
                    Paragraph::new(Text::from(lines)).style(Style::default().fg(Color::Cyan)),
                    area,
                );
            }
            None => {
                let fill = Fill::Linear(LinearGradient::horizontal(
                    ArtColor::rgb(95, 158, 160),
                    ArtColor::rgb(200, 230, 255),
                ));
                let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
                    .with_plain_fallback()
                    .with_alignment(ArtAlignment::Center)
                    .with_fill(fill);
                frame.render_widget(ArtBox::new(&renderer, TITLE), area);
            }
        }
    }
}
