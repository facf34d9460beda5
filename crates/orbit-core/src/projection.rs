//! Sphere projection with a linear pseudo-depth.
//!
//! There is no camera: points are rotated around the vertical axis, scaled by
//! the sphere radius and dropped onto the screen plane. `z` is kept so callers
//! can shade by depth and test which side of the sphere a point is on.

use glam::{Vec2, Vec3};

use crate::config::{Layout, Viewport};
use crate::constants::{DEPTH_SCALE_BASE, DEPTH_SCALE_DIVISOR};

/// Screen-space offset from the sphere center plus depth information.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// `0.8 + z / 3R`, used for sprite size and opacity.
    pub scale: f32,
}

impl Projected {
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_front_facing(&self) -> bool {
        self.z > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub radius: f32,
}

impl Projector {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn for_layout(viewport: Viewport, layout: &Layout) -> Self {
        Self::new(sphere_radius(viewport, layout.radius_ratio))
    }

    /// Rotate a unit direction around Y by `rotation` and project it.
    pub fn project(&self, point: Vec3, rotation: f32) -> Projected {
        let (sin, cos) = rotation.sin_cos();
        let rotated_x = point.x * cos - point.z * sin;
        let rotated_z = point.x * sin + point.z * cos;
        self.finish(rotated_x, point.y, rotated_z)
    }

    /// Project spherical angles (radians) with the same depth semantics as
    /// [`Projector::project`].
    pub fn project_lat_lon(&self, lat: f32, lon: f32, rotation: f32) -> Projected {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = (lon + rotation).sin_cos();
        self.finish(cos_lat * cos_lon, sin_lat, cos_lat * sin_lon)
    }

    #[inline]
    fn finish(&self, x: f32, y: f32, z: f32) -> Projected {
        let r = self.radius;
        let z = z * r;
        Projected {
            x: x * r,
            y: y * r,
            z,
            scale: self.depth_scale(z),
        }
    }

    #[inline]
    pub fn depth_scale(&self, z: f32) -> f32 {
        if self.radius <= 0.0 {
            return DEPTH_SCALE_BASE;
        }
        DEPTH_SCALE_BASE + z / (self.radius * DEPTH_SCALE_DIVISOR)
    }

    /// Depth remapped to `0` (back) ..= `1` (front).
    #[inline]
    pub fn depth(&self, p: &Projected) -> f32 {
        if self.radius <= 0.0 {
            return 0.5;
        }
        (p.z / self.radius + 1.0) / 2.0
    }

    /// An edge is culled only when both ends lie past the back of the sphere.
    #[inline]
    pub fn edge_culled(&self, a: &Projected, b: &Projected) -> bool {
        a.z < -self.radius && b.z < -self.radius
    }

    /// Invert a screen offset from the sphere center onto the front
    /// hemisphere. Offsets beyond the silhouette are pulled onto it.
    pub fn unproject(&self, offset: Vec2) -> (f32, f32) {
        let r = self.radius;
        if r <= 0.0 {
            return (0.0, 0.0);
        }
        let dist = offset.length();
        let Vec2 { x: dx, y: dy } = if dist > r { offset / dist * r } else { offset };
        let z = (r * r - dx * dx - dy * dy).max(0.0).sqrt();
        let lat = (dy / r).clamp(-1.0, 1.0).asin();
        let lon = z.atan2(dx);
        (lat, lon)
    }
}

#[inline]
pub fn sphere_radius(viewport: Viewport, radius_ratio: f32) -> f32 {
    viewport.min_dim() * radius_ratio
}

/// Unit direction for a point, or the point unchanged when it has no length.
#[inline]
pub fn normalize(point: Vec3) -> Vec3 {
    point.try_normalize().unwrap_or(point)
}

/// Unit direction for spherical angles, matching [`Projector::project_lat_lon`].
#[inline]
pub fn lat_lon_to_unit(lat: f32, lon: f32) -> Vec3 {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    Vec3::new(cos_lat * cos_lon, sin_lat, cos_lat * sin_lon)
}

/// Evaluate a quadratic Bezier curve at `t`.
#[inline]
pub fn quadratic_at(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Quadratic curve segment in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadCurve {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl QuadCurve {
    pub const fn new(start: Vec2, control: Vec2, end: Vec2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec2 {
        quadratic_at(self.start, self.control, self.end, t)
    }
}
