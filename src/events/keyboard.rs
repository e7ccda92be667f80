use crate::app::App;
use letter_core::{is_activation_key, Input};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_seal_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    if ev.repeat() {
        return;
    }
    let key = ev.key();
    if is_activation_key(&key) {
        log::info!("[keys] activate via {:?}", key);
        app.borrow_mut().input(Input::Activate);
        ev.prevent_default();
    }
}

pub fn wire_seal_keydown(seal: &web::HtmlElement, app: Rc<RefCell<App>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_seal_keydown(&ev, &app);
    }) as Box<dyn FnMut(_)>);
    _ = seal.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
