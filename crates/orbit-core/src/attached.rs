//! Short-lived glowing points pinned to the sphere where a path marker lands.

use glam::Vec2;

use crate::color::{Rgba, ACCENT};
use crate::constants::{ATTACHED_LIFE_MS, ATTACHED_PEAK_ALPHA};
use crate::projection::{Projected, Projector};

#[derive(Clone, Debug, PartialEq)]
pub struct AttachedPoint {
    pub lat: f32,
    pub lon: f32,
    /// Timestamp in the frame clock's milliseconds.
    pub born_at: f64,
    pub life: f64,
    pub size: f32,
    pub color: Rgba,
}

impl AttachedPoint {
    #[inline]
    pub fn age(&self, now: f64) -> f64 {
        now - self.born_at
    }

    #[inline]
    pub fn is_expired(&self, now: f64) -> bool {
        self.age(now) > self.life
    }

    /// Linear fade from the peak alpha down to zero over the lifetime.
    pub fn opacity(&self, now: f64) -> f32 {
        let remaining = (1.0 - self.age(now) / self.life).clamp(0.0, 1.0);
        remaining as f32 * ATTACHED_PEAK_ALPHA
    }
}

/// Projected attached point ready to draw, relative to the sphere center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttachedSprite {
    pub projected: Projected,
    pub radius: f32,
    pub alpha: f32,
    pub color: Rgba,
}

#[derive(Clone, Debug, Default)]
pub struct AttachedPoints {
    points: Vec<AttachedPoint>,
}

impl AttachedPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttachedPoint> {
        self.points.iter()
    }

    /// Pin a point where the screen-space `anchor` meets the sphere whose
    /// silhouette is centered at `center`.
    pub fn spawn(
        &mut self,
        anchor: Vec2,
        center: Vec2,
        projector: &Projector,
        size: f32,
        now: f64,
    ) -> &AttachedPoint {
        let (lat, lon) = projector.unproject(anchor - center);
        log::trace!(
            "[attached] spawn lat={:.3} lon={:.3} at {:.0}ms",
            lat,
            lon,
            now
        );
        self.points.push(AttachedPoint {
            lat,
            lon,
            born_at: now,
            life: ATTACHED_LIFE_MS,
            size,
            color: ACCENT,
        });
        &self.points[self.points.len() - 1]
    }

    /// Drop expired points. This is the only way the set shrinks.
    pub fn expire(&mut self, now: f64) {
        self.points.retain(|p| !p.is_expired(now));
    }

    /// Expire, then project the survivors.
    pub fn render_set(&mut self, now: f64, rotation: f32, projector: &Projector) -> Vec<AttachedSprite> {
        self.expire(now);
        self.points
            .iter()
            .map(|p| {
                let projected = projector.project_lat_lon(p.lat, p.lon, rotation);
                AttachedSprite {
                    projected,
                    radius: p.size * projected.scale,
                    alpha: p.opacity(now),
                    color: p.color,
                }
            })
            .collect()
    }
}
