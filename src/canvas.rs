//! [`Painter`] over a 2D canvas context.

use std::f64::consts::TAU;

use glam::Vec2;
use orbit_core::{Painter, QuadCurve, Rgba, Viewport};
use web_sys as web;

pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius.max(0.0)),
            0.0,
            TAU,
        );
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        );
    }

    fn set_additive(&mut self, on: bool) {
        let op = if on { "lighter" } else { "source-over" };
        let _ = self.ctx.set_global_composite_operation(op);
    }

    fn set_blur(&mut self, px: f32) {
        if px > 0.0 {
            self.ctx.set_filter(&format!("blur({}px)", px));
        } else {
            self.ctx.set_filter("none");
        }
    }

    fn set_glow(&mut self, blur: f32, color: Rgba) {
        self.ctx.set_shadow_blur(f64::from(blur.max(0.0)));
        self.ctx.set_shadow_color(&color.to_css());
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        let (x, y) = (f64::from(center.x), f64::from(center.y));
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, f64::from(radius.max(0.0)))
        else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &inner.to_css());
        let _ = gradient.add_color_stop(1.0, &outer.to_css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.ctx.set_line_width(f64::from(width));
        self.ctx.set_stroke_style_str(&color.to_css());
        self.circle_path(center, radius);
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.set_line_width(f64::from(width));
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(from.x), f64::from(from.y));
        self.ctx.line_to(f64::from(to.x), f64::from(to.y));
        self.ctx.stroke();
    }

    fn stroke_quad(&mut self, curve: &QuadCurve, width: f32, color: Rgba) {
        self.ctx.set_line_width(f64::from(width));
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx
            .move_to(f64::from(curve.start.x), f64::from(curve.start.y));
        self.ctx.quadratic_curve_to(
            f64::from(curve.control.x),
            f64::from(curve.control.y),
            f64::from(curve.end.x),
            f64::from(curve.end.y),
        );
        self.ctx.stroke();
    }
}
