//! Particles flowing along quadratic curves between the screen edges and the
//! sphere. The pool has a fixed size; a particle that reaches the end of its
//! curve is replaced by a freshly drawn one with the same side and direction.

use glam::Vec2;
use rand::Rng;

use crate::color::{Rgba, GLOBE_PALETTE};
use crate::config::{Layout, Viewport};
use crate::constants::{
    STREAM_FRAME_MS, STREAM_OPACITY_BASE, STREAM_OPACITY_SPAN, STREAM_PARTICLE_DIVISOR,
};
use crate::projection::QuadCurve;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// From the screen edge towards the sphere.
    In,
    /// From the sphere out past the screen edge.
    Out,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StreamParticle {
    pub side: Side,
    pub direction: Direction,
    /// Progress along the curve, `0.0..1.0`.
    pub t: f32,
    /// Progress per 16ms frame.
    pub speed: f32,
    pub curve: QuadCurve,
    pub size: f32,
    pub color: Rgba,
}

impl StreamParticle {
    pub fn spawn<R: Rng + ?Sized>(
        side: Side,
        direction: Direction,
        viewport: Viewport,
        layout: &Layout,
        rng: &mut R,
    ) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        let edge_x = match side {
            Side::Left => -rng.gen_range(80.0_f32..240.0),
            Side::Right => w + rng.gen_range(80.0_f32..240.0),
        };
        let center_x = w * layout.center_x_ratio;
        let near_center = center_x + rng.gen_range(-40.0_f32..40.0);
        let (start_x, end_x) = match direction {
            Direction::In => (edge_x, near_center),
            Direction::Out => (near_center, edge_x),
        };
        let start_y = lerp_range(rng, h * 0.25, h * 0.75);
        let end_y = start_y + rng.gen_range(-80.0_f32..80.0);
        let bow = match side {
            Side::Left => rng.gen_range(80.0_f32..200.0),
            Side::Right => rng.gen_range(-200.0_f32..-80.0),
        };
        let control = Vec2::new(
            (start_x + end_x) / 2.0 + bow,
            (start_y + end_y) / 2.0 + rng.gen_range(-120.0_f32..120.0),
        );
        Self {
            side,
            direction,
            t: rng.gen_range(0.0..1.0),
            speed: rng.gen_range(0.0025..0.007),
            curve: QuadCurve::new(Vec2::new(start_x, start_y), control, Vec2::new(end_x, end_y)),
            size: rng.gen_range(1.4..2.8),
            color: GLOBE_PALETTE[rng.gen_range(0..GLOBE_PALETTE.len())],
        }
    }

    /// A brand-new particle on the same side, flowing the same way.
    pub fn respawn<R: Rng + ?Sized>(&self, viewport: Viewport, layout: &Layout, rng: &mut R) -> Self {
        Self::spawn(self.side, self.direction, viewport, layout, rng)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.curve.at(self.t)
    }

    /// Particles brighten as they approach the end of their curve.
    #[inline]
    pub fn opacity(&self) -> f32 {
        STREAM_OPACITY_BASE + self.t * STREAM_OPACITY_SPAN
    }
}

// `gen_range` panics on an empty range, which a zero-height viewport produces.
fn lerp_range<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * rng.gen::<f32>()
}

#[derive(Clone, Debug, Default)]
pub struct StreamPool {
    pub particles: Vec<StreamParticle>,
}

impl StreamPool {
    pub fn particle_count(viewport: Viewport) -> usize {
        (viewport.width.max(0.0) / STREAM_PARTICLE_DIVISOR).floor() as usize
    }

    /// Even slots flow on the left, odd on the right; every third slot flows
    /// outward. An empty pool is returned when streams are disabled.
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, layout: &Layout, rng: &mut R) -> Self {
        if !layout.enable_streams {
            return Self::default();
        }
        let particles = (0..Self::particle_count(viewport))
            .map(|i| {
                let side = if i % 2 == 0 { Side::Left } else { Side::Right };
                let direction = if i % 3 == 0 { Direction::Out } else { Direction::In };
                StreamParticle::spawn(side, direction, viewport, layout, rng)
            })
            .collect();
        Self { particles }
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by `delta_ms` and recycle finished ones.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        delta_ms: f32,
        viewport: Viewport,
        layout: &Layout,
        rng: &mut R,
    ) {
        let step = delta_ms / STREAM_FRAME_MS;
        for slot in &mut self.particles {
            slot.t += slot.speed * step;
            if slot.t >= 1.0 {
                *slot = slot.respawn(viewport, layout, rng);
            }
        }
    }
}

/// Fixed faint curves drawn behind the particles, two per side.
pub fn stream_guides(center: Vec2, viewport: Viewport) -> [QuadCurve; 4] {
    let (cx, cy, w) = (center.x, center.y, viewport.width);
    [
        QuadCurve::new(
            Vec2::new(-160.0, cy - 90.0),
            Vec2::new(cx - 260.0, cy - 170.0),
            Vec2::new(cx - 30.0, cy - 10.0),
        ),
        QuadCurve::new(
            Vec2::new(-140.0, cy + 120.0),
            Vec2::new(cx - 220.0, cy + 200.0),
            Vec2::new(cx - 20.0, cy + 30.0),
        ),
        QuadCurve::new(
            Vec2::new(w + 160.0, cy + 70.0),
            Vec2::new(cx + 260.0, cy + 160.0),
            Vec2::new(cx + 30.0, cy + 10.0),
        ),
        QuadCurve::new(
            Vec2::new(w + 140.0, cy - 120.0),
            Vec2::new(cx + 220.0, cy - 200.0),
            Vec2::new(cx + 20.0, cy - 30.0),
        ),
    ]
}
