use crate::dom;
use letter_core::{ParticleCanvas, PathSegment, Rgba};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn css_rgba(c: Rgba) -> String {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.3})",
        to_u8(c.r),
        to_u8(c.g),
        to_u8(c.b),
        c.a.clamp(0.0, 1.0)
    )
}

/// 2D canvas the particle field draws into; only the frame loop touches it.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Match the viewport; returns the new size in CSS pixels.
    pub fn sync_to_viewport(&self) -> (f32, f32) {
        dom::sync_canvas_to_viewport(&self.canvas, &self.ctx)
    }
}

impl ParticleCanvas for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: glam::Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.fill();
    }

    fn fill_path(&mut self, path: &[PathSegment], color: Rgba) {
        self.ctx.begin_path();
        for seg in path {
            match *seg {
                PathSegment::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathSegment::CubicTo { c1, c2, to } => self.ctx.bezier_curve_to(
                    c1.x as f64,
                    c1.y as f64,
                    c2.x as f64,
                    c2.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
            }
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.fill();
    }
}
