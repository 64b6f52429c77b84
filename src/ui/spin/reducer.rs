use crate::ui::mvi::Reducer;
use crate::ui::spin::intent::SpinIntent;
use crate::ui::spin::state::SpinState;

pub struct SpinReducer;

impl Reducer for SpinReducer {
    type State = SpinState;
    type Intent = SpinIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SpinIntent::Start { reel } => {
                if state.is_spinning() {
                    state
                } else {
                    SpinState::Spinning { reel }
                }
            }
            SpinIntent::Land { draw } => match state {
                SpinState::Spinning { .. } if draw.rerolled => SpinState::Rerolling {
                    pending: draw.rule,
                },
                SpinState::Spinning { .. } => SpinState::Revealed { rule: draw.rule },
                other => other,
            },
            SpinIntent::FinishReroll => match state {
                SpinState::Rerolling { pending } => SpinState::Revealed { rule: pending },
                other => other,
            },
            SpinIntent::Clear => {
                if state.is_spinning() {
                    state
                } else {
                    SpinState::Ready
                }
            }
            SpinIntent::Cancel => SpinState::Ready,
        }
    }
}
