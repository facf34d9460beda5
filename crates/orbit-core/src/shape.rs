//! Point sets placed on the unit sphere, and the distance-based edge builder.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use rand::Rng;

use crate::color::{Rgba, ACCENT, GLOBE_PALETTE};
use crate::config::Viewport;
use crate::constants::CLOUD_POINT_DIVISOR;
use crate::projection::{lat_lon_to_unit, normalize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePoint {
    /// Unit direction.
    pub pos: Vec3,
    pub size: f32,
    pub color: Rgba,
}

/// Undirected edge between two point indices, stored with `.0 < .1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge(pub usize, pub usize);

#[derive(Clone, Debug, Default)]
pub struct PointSet {
    pub points: Vec<SpherePoint>,
    pub edges: Vec<Edge>,
}

/// Connect every pair of points closer than `threshold_scale` times the
/// smallest non-zero pairwise distance.
///
/// For a regular polyhedron this recovers its edges. For an irregular cloud
/// the result depends on `threshold_scale`.
pub fn build_edges_by_distance(points: &[Vec3], threshold_scale: f32) -> Vec<Edge> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let mut min_distance = f32::INFINITY;
    for i in 0..n {
        for j in (i + 1)..n {
            let d = points[i].distance(points[j]);
            if d > 0.0 && d < min_distance {
                min_distance = d;
            }
        }
    }
    if !min_distance.is_finite() {
        // every point coincides
        return Vec::new();
    }
    let threshold = min_distance * threshold_scale;
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let d = points[i].distance(points[j]);
            if d > 0.0 && d <= threshold {
                edges.push(Edge(i, j));
            }
        }
    }
    edges
}

/// Something that can lay out the sphere's points (and optionally edges).
pub trait PointSetStrategy {
    fn build(&self, viewport: Viewport, rng: &mut dyn rand::RngCore) -> PointSet;
}

/// The six vertices of a regular octahedron.
#[derive(Clone, Copy, Debug)]
pub struct Octahedron {
    pub edge_threshold: f32,
}

pub const OCTAHEDRON_VERTICES: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

impl PointSetStrategy for Octahedron {
    fn build(&self, _viewport: Viewport, _rng: &mut dyn rand::RngCore) -> PointSet {
        let positions: Vec<Vec3> = OCTAHEDRON_VERTICES
            .iter()
            .map(|v| normalize(Vec3::from_array(*v)))
            .collect();
        let edges = build_edges_by_distance(&positions, self.edge_threshold);
        let points = positions
            .into_iter()
            .map(|pos| SpherePoint {
                pos,
                size: 2.6,
                color: ACCENT,
            })
            .collect();
        PointSet { points, edges }
    }
}

/// Random points scattered in latitude/longitude, one per few pixels of width.
#[derive(Clone, Copy, Debug)]
pub struct RandomCloud {
    pub edge_threshold: Option<f32>,
}

impl RandomCloud {
    pub fn point_count(viewport: Viewport) -> usize {
        (viewport.width.max(0.0) / CLOUD_POINT_DIVISOR).floor() as usize
    }
}

impl PointSetStrategy for RandomCloud {
    fn build(&self, viewport: Viewport, rng: &mut dyn rand::RngCore) -> PointSet {
        let points: Vec<SpherePoint> = (0..Self::point_count(viewport))
            .map(|_| {
                let lat = rng.gen_range(-FRAC_PI_2..FRAC_PI_2);
                let lon = rng.gen_range(0.0..TAU);
                SpherePoint {
                    pos: lat_lon_to_unit(lat, lon),
                    size: rng.gen_range(1.2..2.4),
                    color: GLOBE_PALETTE[rng.gen_range(0..GLOBE_PALETTE.len())],
                }
            })
            .collect();
        let edges = match self.edge_threshold {
            Some(scale) => {
                let positions: Vec<Vec3> = points.iter().map(|p| p.pos).collect();
                build_edges_by_distance(&positions, scale)
            }
            None => Vec::new(),
        };
        PointSet { points, edges }
    }
}

/// Configuration-level choice of point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointSetKind {
    Cloud { edge_threshold: Option<f32> },
    Octahedron { edge_threshold: f32 },
}

impl PointSetKind {
    pub fn strategy(&self) -> Box<dyn PointSetStrategy> {
        match *self {
            PointSetKind::Cloud { edge_threshold } => Box::new(RandomCloud { edge_threshold }),
            PointSetKind::Octahedron { edge_threshold } => {
                Box::new(Octahedron { edge_threshold })
            }
        }
    }

    /// Whether the point set must be rebuilt when the viewport changes.
    pub fn depends_on_viewport(&self) -> bool {
        matches!(self, PointSetKind::Cloud { .. })
    }
}
