use crate::ui::mvi::UiState;

/// Banner shown while a landed re-roll rule is being drawn again.
pub const REROLL_BANNER: &str = "🎲 RE-ROLLING! 🎲";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SpinState {
    /// Nothing drawn yet, or the selection changed since the last draw.
    #[default]
    Ready,
    /// Reel scrolling; the outcome is not decided yet.
    Spinning { reel: Vec<String> },
    /// The draw hit the re-roll rule; `pending` is revealed after a pause.
    Rerolling { pending: String },
    Revealed { rule: String },
}

impl UiState for SpinState {}

impl SpinState {
    /// True while the spin trigger must stay disabled.
    pub fn is_spinning(&self) -> bool {
        matches!(self, Self::Spinning { .. } | Self::Rerolling { .. })
    }

    /// Text for the slot window once the reel has stopped.
    pub fn banner(&self) -> Option<&str> {
        match self {
            Self::Rerolling { .. } => Some(REROLL_BANNER),
            Self::Revealed { rule } => Some(rule.as_str()),
            Self::Ready | Self::Spinning { .. } => None,
        }
    }

    pub fn revealed(&self) -> Option<&str> {
        match self {
            Self::Revealed { rule } => Some(rule.as_str()),
            _ => None,
        }
    }
}
