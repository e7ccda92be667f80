use crate::constants::{REDUCED_MOTION_QUERY, VARIANT_ATTRIBUTE};
use letter_core::{ExperienceConfig, MotionPreference, Variant};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn required_element<T: JsCast>(document: &web::Document, element_id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", element_id, e))
}

pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to bind click on", element_id);
    }
}

/// Size the canvas backing store to the viewport at device pixel ratio and
/// return the viewport size in CSS pixels.
pub fn sync_canvas_to_viewport(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f32, f32) {
    let Some(w) = web::window() else {
        return (canvas.width() as f32, canvas.height() as f32);
    };
    let css_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let css_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let dpr = w.device_pixel_ratio();
    canvas.set_width(((css_w * dpr) as u32).max(1));
    canvas.set_height(((css_h * dpr) as u32).max(1));
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    (css_w as f32, css_h as f32)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Read the motion preference and card variant once, at startup.
pub fn read_config(window: &web::Window, document: &web::Document) -> ExperienceConfig {
    let motion = if prefers_reduced_motion(window) {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    };
    let variant = document
        .body()
        .and_then(|b| b.get_attribute(VARIANT_ATTRIBUTE))
        .and_then(|v| Variant::from_name(&v))
        .unwrap_or_default();
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    ExperienceConfig::new(variant, motion).with_seed(seed)
}
