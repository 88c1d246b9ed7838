//! Canvas 2D rendering surface (web only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::RenderSurface;
use crate::consts::SCORE_FONT;

const FILL: &str = "white";

/// `RenderSurface` over a `CanvasRenderingContext2d`
pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Acquire the 2D context. `None` if the canvas has none to give.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("getContext('2d') failed: {:?}", e);
                return None;
            }
        };
        let ctx = ctx.dyn_into::<CanvasRenderingContext2d>().ok()?;
        ctx.set_font(SCORE_FONT);
        Some(Self { ctx })
    }
}

impl RenderSurface for Canvas2dSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.set_fill_style_str(FILL);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            cx as f64,
            cy as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::trace!("arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(FILL);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.ctx.set_fill_style_str(FILL);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::trace!("fillText failed: {:?}", e);
        }
    }
}
