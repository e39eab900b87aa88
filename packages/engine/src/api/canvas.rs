//! `Surface` over an HTML canvas 2D context
//!
//! Sizes are logical (CSS pixels). The backing store is scaled by the
//! device pixel ratio and the context transform maps logical units onto it,
//! so the simulation never sees the DPR.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::ParticleColor;
use crate::simulation::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let width = canvas.client_width().max(0) as f32;
        let height = canvas.client_height().max(0) as f32;

        let mut surface = Self { canvas, ctx, width, height };
        surface.resize(width, height, 1.0)?;
        Ok(surface)
    }

    /// Resize the backing store to `width * dpr` x `height * dpr` device
    /// pixels and keep drawing in logical units
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) -> Result<(), JsValue> {
        let dpr = if dpr.is_finite() && dpr >= 1.0 { dpr } else { 1.0 };
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        self.canvas.set_width((self.width * dpr).floor() as u32);
        self.canvas.set_height((self.height * dpr).floor() as u32);
        // Setting the size resets the transform
        let dpr = dpr as f64;
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: ParticleColor) {
        self.ctx.begin_path();
        // arc() only fails on a negative radius; skip the particle then
        if self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill();
        }
    }
}
