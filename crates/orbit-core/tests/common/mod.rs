// Shared helpers for the integration tests: a painter that records calls and
// an anchor provider backed by plain vectors.
#![allow(dead_code)]

use glam::Vec2;
use orbit_core::{AnchorProvider, Painter, QuadCurve, Rgba, TabAnchor, TabPlacement, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Additive(bool),
    Blur(f32),
    Glow(f32),
    Radial { center: Vec2, radius: f32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Ring { center: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2, color: Rgba },
    Quad { curve: QuadCurve, color: Rgba },
}

#[derive(Default)]
pub struct RecordingPainter {
    pub calls: Vec<Call>,
}

impl RecordingPainter {
    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Line { .. }))
            .count()
    }

    pub fn quads(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Quad { .. }))
            .count()
    }

    /// Alpha of every filled circle, in draw order.
    pub fn circle_alphas(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Circle { color, .. } => Some(color.a),
                _ => None,
            })
            .collect()
    }

    pub fn line_alphas(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Line { color, .. } => Some(color.a),
                _ => None,
            })
            .collect()
    }

    pub fn glows(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Glow(blur) => Some(*blur),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, call: &Call) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }

    pub fn rings(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Ring { .. }))
            .count()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, _viewport: Viewport) {
        self.calls.push(Call::Clear);
    }
    fn set_additive(&mut self, on: bool) {
        self.calls.push(Call::Additive(on));
    }
    fn set_blur(&mut self, px: f32) {
        self.calls.push(Call::Blur(px));
    }
    fn set_glow(&mut self, blur: f32, _color: Rgba) {
        self.calls.push(Call::Glow(blur));
    }
    fn fill_radial(&mut self, center: Vec2, radius: f32, _inner: Rgba, _outer: Rgba) {
        self.calls.push(Call::Radial { center, radius });
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Call::Circle {
            center,
            radius,
            color,
        });
    }
    fn stroke_circle(&mut self, center: Vec2, radius: f32, _width: f32, _color: Rgba) {
        self.calls.push(Call::Ring { center, radius });
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        self.calls.push(Call::Line { from, to, color });
    }
    fn stroke_quad(&mut self, curve: &QuadCurve, _width: f32, color: Rgba) {
        self.calls.push(Call::Quad {
            curve: *curve,
            color,
        });
    }
}

#[derive(Default)]
pub struct StaticAnchors {
    pub tabs: Vec<TabAnchor>,
    pub ends: Vec<(String, Vec2)>,
    pub presented: Vec<(usize, TabPlacement)>,
}

impl AnchorProvider for StaticAnchors {
    fn tabs(&self) -> &[TabAnchor] {
        &self.tabs
    }

    fn path_end(&self, path_id: &str) -> Option<Vec2> {
        self.ends
            .iter()
            .find(|(id, _)| id == path_id)
            .map(|(_, p)| *p)
    }

    fn present_tab(&mut self, index: usize, placement: &TabPlacement) {
        self.presented.push((index, *placement));
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
