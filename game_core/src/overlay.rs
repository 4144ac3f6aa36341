//! Overlay projection
//!
//! Which HUD panels are visible and what they say, derived from the game
//! state. Hosts apply it to their own widgets.

use crate::{Config, FsmState, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayView {
    pub start_screen: bool,
    pub score_display: bool,
    pub game_over_screen: bool,
    pub mobile_controls: bool,
    pub current_score: u32,
    pub final_score: u32,
    pub best_score: u32,
}

impl OverlayView {
    pub fn project(state: FsmState, score: &Score, config: &Config) -> Self {
        Self {
            start_screen: state == FsmState::Start,
            score_display: state == FsmState::Playing,
            game_over_screen: state == FsmState::GameOver,
            mobile_controls: config.is_narrow(),
            current_score: score.current,
            final_score: score.current,
            best_score: score.best,
        }
    }
}
