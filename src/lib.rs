#![cfg(target_arch = "wasm32")]
use letter_core::{ExperienceController, Input, InstantClock, LetterContent};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod stage;

use app::App;
use audio::WebAudioBackend;
use canvas::CanvasSurface;
use stage::DomStage;

fn wire_buttons(document: &web::Document, app: &Rc<RefCell<App>>) {
    let app_close = app.clone();
    dom::add_click_listener(document, constants::CLOSE_BUTTON_ID, move || {
        app_close.borrow_mut().input(Input::Close);
    });

    let app_replay = app.clone();
    dom::add_click_listener(document, constants::REPLAY_BUTTON_ID, move || {
        app_replay.borrow_mut().input(Input::Replay);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sealed-letter starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = DomStage::bind(&document)?;
    let canvas_el: web::HtmlCanvasElement =
        dom::required_element(&document, constants::STARS_CANVAS_ID)?;
    let canvas = CanvasSurface::new(canvas_el)?;

    let content = LetterContent::new(stage.line_texts())?;
    let config = dom::read_config(&window, &document);
    log::info!(
        "[config] variant={:?} motion={:?} lines={}",
        config.variant,
        config.motion,
        content.lines.len()
    );
    let controller =
        ExperienceController::new(config, content, InstantClock::new(), WebAudioBackend::new())?;

    let seal = stage.seal().clone();
    let app = Rc::new(RefCell::new(App::new(controller, stage, canvas)));
    app.borrow_mut().start();

    events::wire_input_handlers(&seal, app.clone());
    events::wire_seal_keydown(&seal, app.clone());
    wire_buttons(&document, &app);
    frame::wire_resize(app.clone());
    frame::start_loop(app);

    Ok(())
}
