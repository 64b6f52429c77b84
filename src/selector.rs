//! Random rule selection and the cosmetic slot reel.
//!
//! The draw and the reel are independent: the reel only decorates the
//! spin and never decides the outcome.

use std::time::Duration;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use thiserror::Error;

use crate::model::REROLL_SENTINEL;

/// Upper bound on reel entries, whatever the geometry asks for.
pub const MAX_REEL_LEN: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("Rule list is empty")]
    Empty,

    #[error("Rule list only contains the re-roll rule")]
    OnlySentinel,
}

/// Outcome of a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// The rule to reveal. Never the re-roll sentinel.
    pub rule: String,
    /// True when the first draw hit the sentinel and a second draw was made.
    pub rerolled: bool,
}

/// Check that a draw over `rules` can land on something other than the
/// re-roll rule.
pub fn check_drawable<S: AsRef<str>>(rules: &[S]) -> Result<(), SelectError> {
    if rules.is_empty() {
        return Err(SelectError::Empty);
    }
    if rules.iter().all(|rule| rule.as_ref() == REROLL_SENTINEL) {
        return Err(SelectError::OnlySentinel);
    }
    Ok(())
}

/// Draw one rule uniformly at random.
///
/// Landing on [`REROLL_SENTINEL`] draws again among the remaining rules.
/// That gives the same distribution as drawing repeatedly until a
/// non-sentinel comes up, but it always terminates.
pub fn pick_rule<S, R>(rules: &[S], rng: &mut R) -> Result<Draw, SelectError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let first = rules.choose(rng).ok_or(SelectError::Empty)?.as_ref();
    if first != REROLL_SENTINEL {
        return Ok(Draw {
            rule: first.to_string(),
            rerolled: false,
        });
    }

    let candidates: Vec<&str> = rules
        .iter()
        .map(AsRef::as_ref)
        .filter(|rule| *rule != REROLL_SENTINEL)
        .collect();
    let rule = candidates.choose(rng).ok_or(SelectError::OnlySentinel)?;
    Ok(Draw {
        rule: rule.to_string(),
        rerolled: true,
    })
}

/// Build the sequence scrolled past during a spin by appending shuffled
/// copies of `rules` until at least `target_len` entries exist.
///
/// `target_len` is capped at [`MAX_REEL_LEN`].
pub fn build_reel<S, R>(rules: &[S], target_len: usize, rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if rules.is_empty() {
        return Vec::new();
    }

    let target_len = target_len.min(MAX_REEL_LEN);
    let mut reel = Vec::with_capacity(target_len + rules.len());
    while reel.len() < target_len {
        let mut round: Vec<String> = rules.iter().map(|r| r.as_ref().to_string()).collect();
        round.shuffle(rng);
        reel.extend(round);
    }
    reel
}

/// Dimensions of the slot window animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelGeometry {
    pub duration: Duration,
    pub pixels_per_second: f64,
    pub row_height: f64,
    /// Rows added past the scrolled distance so the window never runs dry.
    pub extra_rows: usize,
    /// How far short of the full scroll the reel stops.
    pub scroll_margin: f64,
}

impl ReelGeometry {
    fn total_scroll(&self) -> f64 {
        self.pixels_per_second * self.duration.as_secs_f64()
    }

    /// Number of reel entries needed to fill the spin, at most
    /// [`MAX_REEL_LEN`].
    pub fn target_len(&self) -> usize {
        let rows = if self.row_height > 0.0 {
            (self.total_scroll() / self.row_height).floor()
        } else {
            0.0
        };
        // Float to int casts saturate and map NaN to 0.
        let rows = rows.min(MAX_REEL_LEN as f64) as usize;
        rows.saturating_add(self.extra_rows).min(MAX_REEL_LEN)
    }

    /// Distance the reel scrolls before the reveal.
    pub fn scroll_distance(&self) -> f64 {
        (self.total_scroll() - self.scroll_margin).max(0.0)
    }
}

impl Default for ReelGeometry {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(2),
            pixels_per_second: 800.0,
            row_height: 45.0,
            extra_rows: 10,
            scroll_margin: 150.0,
        }
    }
}
