//! Browser host
//!
//! Looks up `<canvas id="canvas">`, feeds its mouse moves to the frame loop and
//! drives frames from `requestAnimationFrame`, or a ~60 Hz timer where that is
//! missing.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::consts::FALLBACK_FRAME_MS;
use crate::game::FrameLoop;
use crate::input::ClientRect;
use crate::renderer::CanvasSurface;
use crate::sim::Field;
use crate::tuning::Tuning;

const CANVAS_ID: &str = "canvas";
/// Optional JSON tuning overrides on the canvas element
const TUNING_ATTR: &str = "data-tuning";

/// Everything the callbacks share
struct Game {
    frame_loop: FrameLoop,
    surface: CanvasSurface,
}

/// How the next frame gets requested
#[derive(Debug, Clone, Copy)]
enum Scheduler {
    AnimationFrame,
    Timer,
}

impl Scheduler {
    fn detect(window: &Window) -> Self {
        let has_raf = js_sys::Reflect::get(window, &JsValue::from_str("requestAnimationFrame"))
            .map(|f| f.is_function())
            .unwrap_or(false);
        if has_raf {
            Scheduler::AnimationFrame
        } else {
            log::warn!("requestAnimationFrame unavailable, using {FALLBACK_FRAME_MS:.2}ms timer");
            Scheduler::Timer
        }
    }

    fn schedule(self, window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        match self {
            Scheduler::AnimationFrame => {
                let closure = Closure::once(move |time: f64| {
                    game_loop(game, time, self);
                });
                window.request_animation_frame(closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
            Scheduler::Timer => {
                let closure = Closure::once(move || {
                    game_loop(game, now(), self);
                });
                window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    FALLBACK_FRAME_MS.round() as i32,
                )?;
                closure.forget();
            }
        }
        Ok(())
    }
}

/// Milliseconds on the same clock animation frames use
fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Set up logging, the canvas and input, then start the frame loop
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {e}")))?;

    log::info!("Wall Pong starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("no #canvas element"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("#canvas is not a canvas"))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    // Sized once; the canvas is never resized
    let field = Field::new(canvas.width() as f32, canvas.height() as f32);
    let tuning = load_tuning(&canvas);

    let game = Rc::new(RefCell::new(Game {
        frame_loop: FrameLoop::new(field, tuning),
        surface: CanvasSurface::new(ctx),
    }));

    setup_input_handlers(&canvas, game.clone())?;

    Scheduler::detect(&window).schedule(&window, game)?;

    log::info!("Wall Pong running!");
    Ok(())
}

fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
    match canvas.get_attribute(TUNING_ATTR) {
        Some(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {TUNING_ATTR}");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring {TUNING_ATTR}: {e}");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    }
}

fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let canvas_clone = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let r = canvas_clone.get_bounding_client_rect();
        let rect = ClientRect::new(
            r.left() as f32,
            r.top() as f32,
            r.right() as f32,
            r.bottom() as f32,
        );
        game.borrow_mut().frame_loop.pointer_moved(
            event.client_x() as f32,
            event.client_y() as f32,
            &rect,
        );
    });
    canvas.add_event_listener_with_callback_and_bool(
        "mousemove",
        closure.as_ref().unchecked_ref(),
        true,
    )?;
    closure.forget();
    Ok(())
}

fn game_loop(game: Rc<RefCell<Game>>, time: f64, scheduler: Scheduler) {
    {
        let mut guard = game.borrow_mut();
        let g = &mut *guard;
        let report = g.frame_loop.frame(time, &mut g.surface);
        if report.paddle_hits > 0 {
            log::debug!("Frame {}: {} paddle hit(s)", g.frame_loop.frames(), report.paddle_hits);
        }
    }

    let Some(window) = web_sys::window() else {
        log::error!("Window gone, frame loop stopped");
        return;
    };
    if let Err(e) = scheduler.schedule(&window, game) {
        log::error!("Failed to schedule next frame: {:?}", e);
    }
}
