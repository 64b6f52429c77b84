use crate::selector::Draw;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SpinIntent {
    /// Spin requested. Ignored while a spin is in flight.
    Start { reel: Vec<String> },
    /// The spin window elapsed and a rule was drawn.
    Land { draw: Draw },
    /// The re-roll pause elapsed.
    FinishReroll,
    /// The active list changed; drop the last result. Ignored mid-spin.
    Clear,
    /// Abandon whatever is in flight.
    Cancel,
}

impl Intent for SpinIntent {}
