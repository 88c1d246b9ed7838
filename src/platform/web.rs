//! Browser bindings
//!
//! Binds the game loop to `requestAnimationFrame`, window keyboard events and
//! a Canvas 2D context, and exposes `start_pong` / `PongHandle::stop` to JS.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Once;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{FocusEvent, HtmlCanvasElement, KeyboardEvent, Window};

use super::{FrameScheduler, GameLoop, InputSource};
use crate::renderer::Canvas2dSurface;
use crate::tuning::Tuning;

type WebGame = GameLoop<Canvas2dSurface, RafScheduler, KeyboardListeners>;
type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;
type FocusClosure = Closure<dyn FnMut(FocusEvent)>;

/// Attribute on the canvas element holding a JSON tuning override
const TUNING_ATTRIBUTE: &str = "data-tuning";

static LOGGER: Once = Once::new();

/// Route `log` to the browser console and panics to `console.error`
pub fn init_logging() {
    LOGGER.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }
    });
}

/// `requestAnimationFrame` scheduler
pub struct RafScheduler {
    window: Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
    handle: Option<i32>,
}

impl RafScheduler {
    fn new(window: Window) -> Self {
        Self {
            window,
            callback: None,
            handle: None,
        }
    }

    /// Install the frame callback. It holds only a weak reference so the
    /// game can be dropped with a frame still queued.
    fn bind(&mut self, game: Weak<RefCell<WebGame>>) {
        self.callback = Some(Closure::new(move |_time: f64| {
            let Some(game) = game.upgrade() else {
                return;
            };
            let Ok(mut g) = game.try_borrow_mut() else {
                log::warn!("Frame skipped: game busy");
                return;
            };
            g.scheduler_mut().handle = None;
            g.on_frame();
        }));
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(callback) = &self.callback else {
            log::warn!("Frame requested before scheduler was bound");
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}

/// `keydown`/`keyup` listeners on the window, plus `blur` so keys held
/// while focus leaves the page do not stay latched
pub struct KeyboardListeners {
    window: Window,
    keydown: Option<KeyClosure>,
    keyup: Option<KeyClosure>,
    blur: Option<FocusClosure>,
}

impl KeyboardListeners {
    fn new(window: Window) -> Self {
        Self {
            window,
            keydown: None,
            keyup: None,
            blur: None,
        }
    }

    fn attach(&mut self, game: Weak<RefCell<WebGame>>) -> Result<(), JsValue> {
        let down_game = game.clone();
        let keydown = KeyClosure::new(move |event: KeyboardEvent| {
            if let Some(game) = down_game.upgrade() {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.key_down(&event.key());
                }
            }
        });
        let up_game = game.clone();
        let keyup = KeyClosure::new(move |event: KeyboardEvent| {
            if let Some(game) = up_game.upgrade() {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.key_up(&event.key());
                }
            }
        });
        let blur = FocusClosure::new(move |_event: FocusEvent| {
            if let Some(game) = game.upgrade() {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.release_keys();
                }
            }
        });

        self.window
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        self.keydown = Some(keydown);
        self.window
            .add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
        self.keyup = Some(keyup);
        self.window
            .add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())?;
        self.blur = Some(blur);
        Ok(())
    }

    fn remove(&self, event: &str, callback: &js_sys::Function) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(event, callback)
        {
            log::warn!("Failed to remove {} listener: {:?}", event, e);
        }
    }
}

impl InputSource for KeyboardListeners {
    fn detach(&mut self) {
        for (event, closure) in [("keydown", self.keydown.take()), ("keyup", self.keyup.take())] {
            if let Some(closure) = closure {
                self.remove(event, closure.as_ref().unchecked_ref());
            }
        }
        if let Some(blur) = self.blur.take() {
            self.remove("blur", blur.as_ref().unchecked_ref());
        }
    }
}

/// JS-side handle to a running game
#[wasm_bindgen]
pub struct PongHandle {
    game: Rc<RefCell<WebGame>>,
}

#[wasm_bindgen]
impl PongHandle {
    /// Cancel the frame loop and remove the keyboard listeners. Freeing the
    /// handle from JS does the same.
    pub fn stop(&self) {
        match self.game.try_borrow_mut() {
            Ok(mut g) => g.stop(),
            Err(_) => log::warn!("stop() called re-entrantly; ignored"),
        }
    }

    #[wasm_bindgen(js_name = playerScore)]
    pub fn player_score(&self) -> u32 {
        self.game.borrow().state().score.player
    }

    #[wasm_bindgen(js_name = opponentScore)]
    pub fn opponent_score(&self) -> u32 {
        self.game.borrow().state().score.opponent
    }
}

fn find_canvas(window: &Window, canvas_id: &str) -> Option<HtmlCanvasElement> {
    window
        .document()?
        .get_element_by_id(canvas_id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

/// Start a game on the canvas with id `canvas_id`.
///
/// Returns `None` without scheduling anything if the canvas or its 2D
/// context is unavailable.
#[wasm_bindgen(js_name = startPong)]
pub fn start_pong(canvas_id: &str) -> Option<PongHandle> {
    init_logging();

    let Some(window) = web_sys::window() else {
        log::warn!("No window; game not started");
        return None;
    };
    let canvas = find_canvas(&window, canvas_id);
    if canvas.is_none() {
        log::warn!("Canvas #{} not found", canvas_id);
    }

    let tuning = Tuning::from_json_or_default(
        canvas
            .as_ref()
            .and_then(|c| c.get_attribute(TUNING_ATTRIBUTE))
            .as_deref(),
    );
    if let Some(canvas) = &canvas {
        canvas.set_width(tuning.canvas_width as u32);
        canvas.set_height(tuning.canvas_height as u32);
    }
    let surface = canvas.as_ref().and_then(Canvas2dSurface::from_canvas);

    let seed = js_sys::Date::now() as u64;
    let game = GameLoop::new(
        tuning,
        seed,
        surface,
        RafScheduler::new(window.clone()),
        KeyboardListeners::new(window),
    )?;
    let game = Rc::new(RefCell::new(game));

    {
        let mut g = game.borrow_mut();
        g.scheduler_mut().bind(Rc::downgrade(&game));
        if let Err(e) = g.source_mut().attach(Rc::downgrade(&game)) {
            log::error!("Failed to attach keyboard listeners: {:?}", e);
            g.stop();
            return None;
        }
        g.start();
    }

    Some(PongHandle { game })
}
