//! Browser client for Flappy
//!
//! Owns the game in a thread-local runner, forwards DOM events to it and
//! drives one tick + redraw per animation frame on a 2D canvas.
//! Only built for the wasm32 target.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod dom;
mod input;
mod storage;

use canvas::CanvasSurface;
use dom::Hud;
use game_core::{Config, Game, InputEvent, LogSound};
use std::cell::RefCell;
use std::rc::Rc;
use storage::LocalStore;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

/// Game plus the page surfaces it draws to
struct Runner {
    game: Game,
    surface: CanvasSurface,
    hud: Hud,
}

impl Runner {
    fn frame(&mut self) -> Result<(), JsValue> {
        self.game.tick();
        self.surface.draw(&self.game.render())?;
        self.hud.apply(self.game.overlay())
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.game.resize(width, height);
        self.surface
            .resize(self.game.config.canvas_width, self.game.config.canvas_height);
    }
}

thread_local! {
    static RUNNER: RefCell<Option<Runner>> = RefCell::new(None);
}

/// Run `f` against the runner; `None` before `start()` has succeeded
fn with_runner<R>(f: impl FnOnce(&mut Runner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn viewport(window: &Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(400.0);
    (width as f32, height as f32)
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Hand an input to the game and suppress the browser default if asked to
fn dispatch(event: &Event, input: InputEvent) {
    if with_runner(|r| r.game.handle_input(&input)).unwrap_or(false) {
        event.prevent_default();
    }
}

fn dispatch_click(event: Event) {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        dispatch(&event, input::from_click(mouse));
    }
}

fn install_listeners(
    window: &Window,
    canvas: &HtmlCanvasElement,
    document: &web_sys::Document,
) -> Result<(), JsValue> {
    listen(document, "keydown", |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            dispatch(&event, input::from_key_down(key));
        }
    })?;

    listen(canvas, "click", dispatch_click)?;
    listen(canvas, "touchstart", |event| {
        dispatch(&event, InputEvent::TouchStart)
    })?;
    listen(canvas, "contextmenu", |event| {
        dispatch(&event, InputEvent::ContextMenu)
    })?;

    if let Some(flap_btn) = document.get_element_by_id("flapBtn") {
        listen(&flap_btn, "click", dispatch_click)?;
    }
    if let Some(restart_btn) = document.get_element_by_id("restartBtn") {
        listen(&restart_btn, "click", |_| {
            with_runner(|r| r.game.restart());
        })?;
    }

    listen(window, "resize", |_| {
        if let Some(window) = web_sys::window() {
            let (width, height) = viewport(&window);
            with_runner(|r| r.resize(width, height));
        }
    })?;

    Ok(())
}

/// Schedule `frame()` on every animation frame, forever
fn start_loop(window: &Window) -> Result<(), JsValue> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        if let Some(Err(e)) = with_runner(|r| r.frame()) {
            log::error!("Frame failed: {:?}", e);
        }
        if let (Some(window), Some(cb)) = (web_sys::window(), next.borrow().as_ref()) {
            if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("Failed to schedule frame: {:?}", e);
            }
        }
    }));

    if let Some(cb) = callback.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Boot the game on `#gameCanvas` and start the animation loop
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if with_runner(|_| ()).is_some() {
        log::warn!("start() called twice, ignoring");
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id("gameCanvas")
        .ok_or_else(|| JsValue::from_str("Missing #gameCanvas element"))?
        .dyn_into::<HtmlCanvasElement>()?;

    let (width, height) = viewport(&window);
    let config = Config::for_viewport(width, height);
    let surface = CanvasSurface::new(canvas.clone())?;
    surface.resize(config.canvas_width, config.canvas_height);

    let seed = js_sys::Date::now() as u64;
    let game = Game::new(
        config,
        seed,
        Box::new(LocalStore::new()),
        Box::new(LogSound),
    );

    let mut hud = Hud::new(&document)?;
    hud.apply(game.overlay())?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(Runner { game, surface, hud });
    });

    install_listeners(&window, &canvas, &document)?;
    start_loop(&window)?;

    log::info!("Flappy started ({}x{})", width, height);
    Ok(())
}

/// Same as pressing the restart button
#[wasm_bindgen]
pub fn restart() -> Result<(), JsValue> {
    with_runner(|r| r.game.restart()).ok_or_else(|| JsValue::from_str("Game not started"))
}
