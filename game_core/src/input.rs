//! Raw input mapping
//!
//! Keyboard, mouse and touch events collapse into one "primary input".

/// Raw input events forwarded by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Key pressed anywhere in the document, identified by `KeyboardEvent.code`
    KeyDown { code: String },
    /// Click on the play surface or the touch button
    Click { button: i16 },
    /// Touch started on the play surface
    TouchStart,
    /// Context menu requested on the play surface
    ContextMenu,
}

/// Key code that acts as primary input
pub const PRIMARY_KEY: &str = "Space";

/// Main mouse button as reported by `MouseEvent.button`
pub const MAIN_BUTTON: i16 = 0;

impl InputEvent {
    pub fn key(code: &str) -> Self {
        Self::KeyDown {
            code: code.to_string(),
        }
    }

    /// Does this event count as a flap/start press?
    pub fn is_primary(&self) -> bool {
        match self {
            Self::KeyDown { code } => code == PRIMARY_KEY,
            Self::Click { button } => *button == MAIN_BUTTON,
            Self::TouchStart => true,
            Self::ContextMenu => false,
        }
    }

    /// Should the host cancel the browser's default action for this event?
    ///
    /// The primary key would scroll the page; every pointer event on the
    /// play surface is swallowed.
    pub fn suppresses_default(&self) -> bool {
        match self {
            Self::KeyDown { code } => code == PRIMARY_KEY,
            Self::Click { .. } | Self::TouchStart | Self::ContextMenu => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_primary() {
        assert!(InputEvent::key("Space").is_primary());
        assert!(InputEvent::key("Space").suppresses_default());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        for code in ["Enter", "ArrowUp", "KeyW", "Escape"] {
            let event = InputEvent::key(code);
            assert!(!event.is_primary(), "{} should not flap", code);
            assert!(!event.suppresses_default(), "{} keeps its default", code);
        }
    }

    #[test]
    fn test_only_main_button_clicks() {
        assert!(InputEvent::Click { button: 0 }.is_primary());
        assert!(!InputEvent::Click { button: 1 }.is_primary());
        assert!(!InputEvent::Click { button: 2 }.is_primary());
    }

    #[test]
    fn test_touch_and_context_menu() {
        assert!(InputEvent::TouchStart.is_primary());
        assert!(InputEvent::TouchStart.suppresses_default());
        assert!(!InputEvent::ContextMenu.is_primary());
        assert!(InputEvent::ContextMenu.suppresses_default());
    }
}
