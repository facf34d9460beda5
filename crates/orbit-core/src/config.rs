//! Layout options and engine presets.
//!
//! `Layout` holds the page-facing knobs (focal point, sphere size, feature
//! toggles). `Preset` bundles the values that differ between the point-cloud
//! and polyhedron variants of the scene; they are kept as separate presets
//! rather than being averaged into one.

use crate::error::{OrbitError, Result};
use crate::shape::PointSetKind;

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn min_dim(&self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub center_x_ratio: f32,
    pub center_y_ratio: f32,
    pub radius_ratio: f32,
    pub enable_streams: bool,
    pub show_outline: bool,
    pub show_points: bool,
    pub show_edges: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            center_x_ratio: 0.5,
            center_y_ratio: 0.5,
            radius_ratio: 0.29,
            enable_streams: false,
            show_outline: false,
            show_points: true,
            show_edges: true,
        }
    }
}

impl Layout {
    #[must_use]
    pub fn with_streams(mut self, enabled: bool) -> Self {
        self.enable_streams = enabled;
        self
    }

    #[must_use]
    pub fn with_outline(mut self, enabled: bool) -> Self {
        self.show_outline = enabled;
        self
    }

    /// Apply a single `key=value` override, as read from `data-*` attributes.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "center-x" => self.center_x_ratio = parse_ratio(key, value)?,
            "center-y" => self.center_y_ratio = parse_ratio(key, value)?,
            "radius" => self.radius_ratio = parse_ratio(key, value)?,
            "streams" => self.enable_streams = parse_flag(key, value)?,
            "outline" => self.show_outline = parse_flag(key, value)?,
            "points" => self.show_points = parse_flag(key, value)?,
            "edges" => self.show_edges = parse_flag(key, value)?,
            _ => return Err(OrbitError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

pub const LAYOUT_KEYS: [&str; 7] = [
    "center-x", "center-y", "radius", "streams", "outline", "points", "edges",
];

fn invalid(key: &str, value: &str) -> OrbitError {
    OrbitError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_ratio(key: &str, value: &str) -> Result<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(key, value))
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "1" | "on" | "" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

/// Per-variant tuning: which point set to build and how the sphere turns.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub kind: PointSetKind,
    /// Radians per millisecond; the sphere turns towards negative angles.
    pub rotation_speed: f64,
    /// Alpha of a point on the far side of the sphere.
    pub point_alpha_floor: f32,
    /// Shadow blur around each point.
    pub point_glow: f32,
    pub show_outline: bool,
}

impl Preset {
    /// Random lat/lon cloud without edges, with the silhouette drawn.
    pub fn cloud() -> Self {
        Self {
            kind: PointSetKind::Cloud { edge_threshold: None },
            rotation_speed: 0.000_18,
            point_alpha_floor: 0.15,
            point_glow: 12.0,
            show_outline: true,
        }
    }

    /// Fixed octahedron with its 12 edges.
    pub fn octahedron() -> Self {
        Self {
            kind: PointSetKind::Octahedron { edge_threshold: 1.2 },
            rotation_speed: 0.000_15,
            point_alpha_floor: 0.2,
            point_glow: 10.0,
            show_outline: false,
        }
    }

    pub fn by_name(name: &str) -> Result<Self> {
        match name.trim() {
            "cloud" => Ok(Self::cloud()),
            "octahedron" => Ok(Self::octahedron()),
            other => Err(OrbitError::UnknownShape(other.to_string())),
        }
    }

    /// Layout defaults that belong to this preset.
    pub fn layout(&self) -> Layout {
        Layout::default().with_outline(self.show_outline)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::octahedron()
    }
}
