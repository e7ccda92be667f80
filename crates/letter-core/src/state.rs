//! Lifecycle states and the transition table.
//!
//! `next_state` is the only place that decides whether a trigger is legal in
//! a given state. The controller consults it before doing any work, which is
//! what turns duplicate opens, closes and resets into no-ops.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExperienceState {
    Loading,
    Ready,
    Dragging,
    Opening,
    Revealing,
    Closed,
    Resetting,
}

impl fmt::Display for ExperienceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    IntroComplete,
    PressStart,
    Release,
    ThresholdCrossed,
    KeyActivate,
    SceneShown,
    FoldedOut,
    Replay,
    ResetComplete,
}

pub fn next_state(state: ExperienceState, trigger: Trigger) -> Option<ExperienceState> {
    use ExperienceState::*;
    use Trigger::*;
    match (state, trigger) {
        (Loading, IntroComplete) => Some(Ready),
        (Ready, PressStart) => Some(Dragging),
        (Dragging, Release) => Some(Ready),
        (Dragging, ThresholdCrossed) => Some(Opening),
        (Ready, KeyActivate) => Some(Opening),
        (Opening, SceneShown) => Some(Revealing),
        (Revealing, FoldedOut) => Some(Closed),
        (Ready | Dragging | Opening | Revealing | Closed, Replay) => Some(Resetting),
        (Resetting, ResetComplete) => Some(Loading),
        _ => None,
    }
}

/// Whether the seal has been broken in the current session.
#[inline]
pub fn is_opened(state: ExperienceState) -> bool {
    matches!(
        state,
        ExperienceState::Opening | ExperienceState::Revealing | ExperienceState::Closed
    )
}
