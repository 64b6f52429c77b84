//! Timer side of a spin: the fixed reveal delay and the re-roll pause.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::SpinConfig;
use crate::selector::{build_reel, check_drawable, pick_rule, SelectError};
use crate::ui::mvi::Reducer;
use crate::ui::spin::intent::SpinIntent;
use crate::ui::spin::reducer::SpinReducer;
use crate::ui::spin::state::SpinState;

#[derive(Debug, Error)]
pub enum SpinError {
    #[error("A spin is already in flight")]
    InFlight,

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error("Spinning requires a tokio runtime")]
    NoRuntime,
}

/// Runs spins against a shared [`SpinState`].
///
/// The outcome is drawn with the injected RNG when the spin window ends;
/// the reel shown meanwhile is cosmetic.
pub struct SpinDriver<R> {
    state: Arc<Mutex<SpinState>>,
    rng: Arc<Mutex<R>>,
    config: SpinConfig,
    task: Option<JoinHandle<()>>,
}

impl<R> SpinDriver<R>
where
    R: Rng + Send + 'static,
{
    pub fn new(config: SpinConfig, rng: R) -> Self {
        Self {
            state: Arc::new(Mutex::new(SpinState::default())),
            rng: Arc::new(Mutex::new(rng)),
            config,
            task: None,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SpinState {
        self.state.lock().clone()
    }

    /// Shared handle for a view that polls state on its own schedule.
    pub fn shared_state(&self) -> Arc<Mutex<SpinState>> {
        Arc::clone(&self.state)
    }

    pub fn is_spinning(&self) -> bool {
        self.state.lock().is_spinning()
    }

    /// Start a spin over a snapshot of `rules`.
    ///
    /// Rejected while another spin is in flight, and when no rule other
    /// than the re-roll rule could ever be revealed.
    pub fn spin(&mut self, rules: &[String]) -> Result<(), SpinError> {
        if self.is_spinning() {
            return Err(SpinError::InFlight);
        }
        check_drawable(rules)?;
        let runtime = Handle::try_current().map_err(|_| SpinError::NoRuntime)?;

        let reel = build_reel(rules, self.config.geometry().target_len(), &mut *self.rng.lock());
        dispatch(&self.state, SpinIntent::Start { reel });
        tracing::debug!(rules = rules.len(), "spin started");

        let state = Arc::clone(&self.state);
        let rng = Arc::clone(&self.rng);
        let rules = rules.to_vec();
        let duration = self.config.duration();
        let reroll_pause = self.config.reroll_pause();

        self.task = Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;

            let draw = {
                let mut rng = rng.lock();
                pick_rule(&rules, &mut *rng)
            };
            let draw = match draw {
                Ok(draw) => draw,
                Err(e) => {
                    tracing::warn!(error = %e, "spin landed on nothing");
                    dispatch(&state, SpinIntent::Cancel);
                    return;
                }
            };

            let rerolled = draw.rerolled;
            tracing::debug!(rule = %draw.rule, rerolled, "spin landed");
            dispatch(&state, SpinIntent::Land { draw });

            if rerolled {
                tokio::time::sleep(reroll_pause).await;
                dispatch(&state, SpinIntent::FinishReroll);
            }
        }));
        Ok(())
    }

    /// Forget the last result after the active list changed.
    pub fn clear(&self) {
        dispatch(&self.state, SpinIntent::Clear);
    }

    /// Abort the pending timer and return to `Ready`.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        dispatch(&self.state, SpinIntent::Cancel);
    }

    /// Wait until the in-flight spin, if any, has finished or been cancelled.
    pub async fn settle(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    tracing::warn!(error = %e, "spin timer task failed");
                }
            }
        }
    }
}

impl<R> Drop for SpinDriver<R> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn dispatch(state: &Mutex<SpinState>, intent: SpinIntent) {
    let mut guard = state.lock();
    *guard = SpinReducer::reduce(std::mem::take(&mut *guard), intent);
}
