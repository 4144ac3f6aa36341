//! DOM event to game input mapping

use game_core::InputEvent;
use web_sys::{KeyboardEvent, MouseEvent};

/// Key down anywhere in the document
pub fn from_key_down(event: &KeyboardEvent) -> InputEvent {
    InputEvent::key(&event.code())
}

/// Click on the canvas or the flap button
pub fn from_click(event: &MouseEvent) -> InputEvent {
    InputEvent::Click {
        button: event.button(),
    }
}
