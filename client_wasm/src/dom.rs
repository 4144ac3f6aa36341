//! HUD panels living in the page around the canvas

use game_core::OverlayView;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

const HIDDEN: &str = "hidden";

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing #{} element", id)))
}

fn set_visible(element: &Element, visible: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(HIDDEN, !visible)?;
    Ok(())
}

pub struct Hud {
    start_screen: Element,
    score_display: Element,
    current_score: Element,
    game_over_screen: Element,
    final_score: Element,
    best_score: Element,
    mobile_controls: Element,
    last: Option<OverlayView>,
}

impl Hud {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            start_screen: element(document, "startScreen")?,
            score_display: element(document, "scoreDisplay")?,
            current_score: element(document, "currentScore")?,
            game_over_screen: element(document, "gameOverScreen")?,
            final_score: element(document, "finalScore")?,
            best_score: element(document, "bestScore")?,
            mobile_controls: element(document, "mobileControls")?,
            last: None,
        })
    }

    /// Sync the page with `view`; unchanged views touch nothing
    pub fn apply(&mut self, view: OverlayView) -> Result<(), JsValue> {
        if self.last == Some(view) {
            return Ok(());
        }

        set_visible(&self.start_screen, view.start_screen)?;
        set_visible(&self.score_display, view.score_display)?;
        set_visible(&self.game_over_screen, view.game_over_screen)?;
        set_visible(&self.mobile_controls, view.mobile_controls)?;

        self.current_score
            .set_text_content(Some(&view.current_score.to_string()));
        self.final_score
            .set_text_content(Some(&view.final_score.to_string()));
        self.best_score
            .set_text_content(Some(&view.best_score.to_string()));

        self.last = Some(view);
        Ok(())
    }
}
