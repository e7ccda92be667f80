//! Mouse and pen arrive as pointer events; touch arrives as touch events.
//! Pointer events from touch are skipped so a finger is not seen twice.

use crate::app::App;
use letter_core::Input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn is_touch_pointer(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "touch"
}

#[inline]
fn first_touch_x(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_x() as f32)
}

fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: 'static,
    F: FnMut(E) + 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_input_handlers(seal: &web::HtmlElement, app: Rc<RefCell<App>>) {
    let Some(window) = web::window() else {
        log::error!("[input] no window to listen on");
        return;
    };
    wire_pointer(seal, &window, &app);
    wire_touch(seal, &window, &app);
}

fn wire_pointer(seal: &web::HtmlElement, window: &web::Window, app: &Rc<RefCell<App>>) {
    let a = app.clone();
    listen(seal, "pointerdown", move |ev: web::PointerEvent| {
        if is_touch_pointer(&ev) {
            return;
        }
        a.borrow_mut().input(Input::PressStart {
            x: ev.client_x() as f32,
        });
        ev.prevent_default();
    });

    let a = app.clone();
    listen(window, "pointermove", move |ev: web::PointerEvent| {
        if is_touch_pointer(&ev) {
            return;
        }
        a.borrow_mut().input(Input::PressMove {
            x: ev.client_x() as f32,
        });
    });

    for name in ["pointerup", "pointercancel"] {
        let a = app.clone();
        listen(window, name, move |ev: web::PointerEvent| {
            if is_touch_pointer(&ev) {
                return;
            }
            a.borrow_mut().input(Input::PressEnd);
        });
    }
}

fn wire_touch(seal: &web::HtmlElement, window: &web::Window, app: &Rc<RefCell<App>>) {
    let a = app.clone();
    listen(seal, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            a.borrow_mut().input(Input::PressStart { x });
        }
    });

    let a = app.clone();
    listen(window, "touchmove", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            a.borrow_mut().input(Input::PressMove { x });
        }
    });

    for name in ["touchend", "touchcancel"] {
        let a = app.clone();
        listen(window, name, move |_ev: web::TouchEvent| {
            a.borrow_mut().input(Input::PressEnd);
        });
    }
}
