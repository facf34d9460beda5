//! Drawing seam between the engine and whatever surface shows it.
//!
//! The engine only ever talks to a [`Painter`]. The web front-end implements
//! it over a 2D canvas context; tests record the calls.

use glam::Vec2;

use crate::attached::AttachedSprite;
use crate::blobs::BlobFrame;
use crate::color::{Rgba, SLATE};
use crate::config::Viewport;
use crate::constants::{
    BLOB_BLUR_PX, EDGE_ALPHA_BASE, EDGE_ALPHA_SPAN, POINT_ALPHA_SPAN, STREAM_GLOW,
};
use crate::projection::{Projector, QuadCurve};
use crate::shape::PointSet;
use crate::streams::StreamPool;
use crate::tabs::TabLink;

pub trait Painter {
    fn clear(&mut self, viewport: Viewport);
    /// Additive ("lighter") compositing when `on`, normal otherwise.
    fn set_additive(&mut self, on: bool);
    /// Gaussian blur applied to subsequent fills; `0` disables it.
    fn set_blur(&mut self, px: f32);
    /// Soft shadow around subsequent shapes; `0` disables it.
    fn set_glow(&mut self, blur: f32, color: Rgba);
    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn stroke_quad(&mut self, curve: &QuadCurve, width: f32, color: Rgba);
}

pub fn draw_blobs<P: Painter + ?Sized>(p: &mut P, viewport: Viewport, frames: &[BlobFrame]) {
    p.clear(viewport);
    p.set_additive(true);
    p.set_blur(BLOB_BLUR_PX);
    for f in frames {
        p.fill_radial(f.center, f.radius, f.colors.0, f.colors.1);
    }
    p.set_blur(0.0);
    p.set_additive(false);
}

pub fn draw_streams<P: Painter + ?Sized>(p: &mut P, guides: &[QuadCurve], pool: &StreamPool) {
    let guide_color = SLATE.with_alpha(0.14);
    for g in guides {
        p.stroke_quad(g, 1.0, guide_color);
    }
    for particle in &pool.particles {
        p.set_glow(STREAM_GLOW, particle.color);
        p.fill_circle(
            particle.position(),
            particle.size,
            particle.color.with_alpha(particle.opacity()),
        );
    }
    p.set_glow(0.0, SLATE);
}

pub fn draw_outline<P: Painter + ?Sized>(p: &mut P, center: Vec2, projector: &Projector) {
    p.stroke_circle(center, projector.radius, 1.0, SLATE.with_alpha(0.15));
}

pub fn draw_edges<P: Painter + ?Sized>(
    p: &mut P,
    set: &PointSet,
    center: Vec2,
    rotation: f32,
    projector: &Projector,
) {
    if projector.radius <= 0.0 {
        return;
    }
    for edge in &set.edges {
        let (Some(a), Some(b)) = (set.points.get(edge.0), set.points.get(edge.1)) else {
            continue;
        };
        let start = projector.project(a.pos, rotation);
        let end = projector.project(b.pos, rotation);
        if projector.edge_culled(&start, &end) {
            continue;
        }
        let depth = (start.z + end.z) / (2.0 * projector.radius);
        let alpha = EDGE_ALPHA_BASE + depth.max(0.0) * EDGE_ALPHA_SPAN;
        p.stroke_line(
            center + start.xy(),
            center + end.xy(),
            1.0,
            SLATE.with_alpha(0.35 * alpha),
        );
    }
}

pub fn draw_points<P: Painter + ?Sized>(
    p: &mut P,
    set: &PointSet,
    center: Vec2,
    rotation: f32,
    projector: &Projector,
    alpha_floor: f32,
    glow: f32,
) {
    for point in &set.points {
        let projected = projector.project(point.pos, rotation);
        let alpha = alpha_floor + projector.depth(&projected) * POINT_ALPHA_SPAN;
        p.set_glow(glow, point.color);
        p.fill_circle(
            center + projected.xy(),
            point.size * projected.scale,
            point.color.with_alpha(alpha),
        );
    }
    p.set_glow(0.0, SLATE);
}

pub fn draw_attached<P: Painter + ?Sized>(p: &mut P, center: Vec2, sprites: &[AttachedSprite]) {
    for s in sprites {
        p.fill_circle(center + s.projected.xy(), s.radius, s.color.with_alpha(s.alpha));
    }
}

pub fn draw_tab_links<P: Painter + ?Sized>(p: &mut P, links: &[TabLink]) {
    if links.is_empty() {
        return;
    }
    p.set_glow(6.0, SLATE.with_alpha(0.5));
    for link in links {
        p.stroke_quad(&link.curve, 1.2, SLATE.with_alpha(0.4 * link.alpha));
    }
    p.set_glow(0.0, SLATE);
}
