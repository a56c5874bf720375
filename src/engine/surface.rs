use nalgebra::Point2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::engine::color::Color;

/// Minimal 2D painting interface the game draws through.
///
/// All coordinates are canvas pixels with the origin at the top-left corner.
pub trait Surface {
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_polygon(&mut self, points: &[Point2<f32>]);
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    current: Option<Color>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        CanvasSurface { ctx, current: None }
    }
}

impl Surface for CanvasSurface {
    fn set_fill(&mut self, color: Color) {
        if self.current != Some(color) {
            self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
            self.current = Some(color);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_polygon(&mut self, points: &[Point2<f32>]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}
