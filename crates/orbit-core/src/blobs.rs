use std::f64::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::color::{GradientStops, BLOB_PALETTE};
use crate::config::Viewport;
use crate::constants::{BLOB_COUNT, BLOB_POINTER_PARALLAX, BLOB_PULSE_FREQ_RATIO, BLOB_RADIUS_PULSE};

/// One drifting radial-gradient blob. Position is a pure function of time;
/// nothing is integrated between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    /// Fractional position in the viewport, `0..1`.
    pub base: Vec2,
    pub radius: f32,
    pub drift: Vec2,
    /// Radians per millisecond.
    pub speed: f64,
    pub phase: f64,
    pub colors: GradientStops,
}

/// Where and how big a blob is on a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobFrame {
    pub center: Vec2,
    pub radius: f32,
    pub colors: GradientStops,
}

impl Blob {
    pub fn random<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        Self {
            base: Vec2::new(rng.gen_range(0.2..0.8), rng.gen_range(0.2..0.8)),
            radius: rng.gen_range(140.0..240.0),
            drift: Vec2::new(rng.gen_range(50.0..110.0), rng.gen_range(40.0..100.0)),
            speed: rng.gen_range(0.000_25..0.000_5),
            phase: rng.gen_range(0.0..TAU),
            colors: BLOB_PALETTE[index % BLOB_PALETTE.len()],
        }
    }

    pub fn at(&self, time: f64, viewport: Viewport, pointer: Vec2) -> BlobFrame {
        let angle = time * self.speed + self.phase;
        let offset = Vec2::new(
            angle.sin() as f32 * self.drift.x,
            angle.cos() as f32 * self.drift.y,
        );
        let base = self.base * Vec2::new(viewport.width, viewport.height);
        let pulse = (time * self.speed * BLOB_PULSE_FREQ_RATIO + self.phase).sin() as f32;
        BlobFrame {
            center: base + offset + pointer * BLOB_POINTER_PARALLAX,
            radius: self.radius + pulse * BLOB_RADIUS_PULSE,
            colors: self.colors,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BlobField {
    pub blobs: Vec<Blob>,
}

impl BlobField {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            blobs: (0..BLOB_COUNT).map(|i| Blob::random(i, rng)).collect(),
        }
    }

    pub fn frames(&self, time: f64, viewport: Viewport, pointer: Vec2) -> Vec<BlobFrame> {
        self.blobs
            .iter()
            .map(|b| b.at(time, viewport, pointer))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn blob_motion_is_deterministic_in_time() {
        let mut rng = StdRng::seed_from_u64(7);
        let blob = Blob::random(0, &mut rng);
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(
            blob.at(1234.0, vp, Vec2::ZERO),
            blob.at(1234.0, vp, Vec2::ZERO)
        );
    }

    #[test]
    fn pointer_shifts_blob_by_parallax_factor() {
        let mut rng = StdRng::seed_from_u64(7);
        let blob = Blob::random(1, &mut rng);
        let vp = Viewport::new(800.0, 600.0);
        let still = blob.at(500.0, vp, Vec2::ZERO);
        let moved = blob.at(500.0, vp, Vec2::new(10.0, -5.0));
        let shift = moved.center - still.center;
        assert!((shift - Vec2::new(4.0, -2.0)).length() < 1e-3);
        assert_eq!(still.radius, moved.radius);
    }

    #[test]
    fn radius_pulses_faster_than_the_drift() {
        let mut rng = StdRng::seed_from_u64(11);
        let blob = Blob::random(3, &mut rng);
        let vp = Viewport::new(800.0, 600.0);
        let time = 2500.0;
        let expected = blob.radius
            + (time * blob.speed * 1.2 + blob.phase).sin() as f32 * BLOB_RADIUS_PULSE;
        assert!((blob.at(time, vp, Vec2::ZERO).radius - expected).abs() < 1e-3);
    }

    #[test]
    fn radius_pulse_stays_within_thirty() {
        let mut rng = StdRng::seed_from_u64(3);
        let blob = Blob::random(2, &mut rng);
        let vp = Viewport::new(1024.0, 768.0);
        for step in 0..200 {
            let f = blob.at(step as f64 * 97.0, vp, Vec2::ZERO);
            assert!((f.radius - blob.radius).abs() <= BLOB_RADIUS_PULSE + 1e-3);
        }
    }
}
