//! Label derivation: what the three output labels show for a given state

use tui_dispatch::DataResource;

use crate::emoji::weather_emoji;
use crate::state::AppState;

/// How the primary label is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// Big FIGlet text (temperature)
    Large,
    /// Plain text (errors)
    Small,
    /// Dim plain text (hints, loading)
    Muted,
}

/// Content of the temperature, emoji and description labels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLabels {
    pub primary: String,
    pub emphasis: Emphasis,
    pub emoji: &'static str,
    pub description: String,
}

impl DisplayLabels {
    pub fn from_state(state: &AppState) -> Self {
        match &state.weather {
            DataResource::Loaded(report) => Self {
                primary: report.temperature_label(),
                emphasis: Emphasis::Large,
                emoji: weather_emoji(report.condition_id),
                description: report.description.to_uppercase(),
            },
            DataResource::Failed(message) => Self::text_only(message.clone(), Emphasis::Small),
            DataResource::Loading if state.locating => {
                Self::text_only("Konum alınıyor...".into(), Emphasis::Muted)
            }
            DataResource::Loading => Self::text_only("Yükleniyor...".into(), Emphasis::Muted),
            DataResource::Empty => {
                Self::text_only("Şehir adı yazıp Enter'a basın".into(), Emphasis::Muted)
            }
        }
    }

    fn text_only(primary: String, emphasis: Emphasis) -> Self {
        Self {
            primary,
            emphasis,
            emoji: "",
            description: String::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.emphasis == Emphasis::Small
    }
}
