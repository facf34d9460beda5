use glam::{Vec2, Vec3};
use orbit_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::{approx, Call, RecordingPainter, StaticAnchors};

fn point(x: f32, y: f32, z: f32) -> SpherePoint {
    SpherePoint {
        pos: Vec3::new(x, y, z),
        size: 2.0,
        color: ACCENT,
    }
}

#[test]
fn points_brighten_towards_the_viewer() {
    let proj = Projector::new(100.0);
    let set = PointSet {
        points: vec![point(0.0, 0.0, 1.0), point(1.0, 0.0, 0.0), point(0.0, 0.0, -1.0)],
        edges: Vec::new(),
    };
    let mut p = RecordingPainter::default();
    draw_points(&mut p, &set, Vec2::new(200.0, 200.0), 0.0, &proj, 0.2, 10.0);

    let alphas = p.circle_alphas();
    assert_eq!(alphas.len(), 3);
    assert!(approx(alphas[0], 0.2 + 0.6), "front {}", alphas[0]);
    assert!(approx(alphas[1], 0.2 + 0.3), "rim {}", alphas[1]);
    assert!(approx(alphas[2], 0.2), "back {}", alphas[2]);

    // front point is scaled up, back point down
    let radii: Vec<f32> = p
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::Circle { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect();
    assert!(approx(radii[0], 2.0 * (0.8 + 1.0 / 3.0)));
    assert!(approx(radii[2], 2.0 * (0.8 - 1.0 / 3.0)));
}

#[test]
fn edge_alpha_follows_mean_depth() {
    let proj = Projector::new(100.0);
    let set = PointSet {
        points: vec![
            point(1.0, 0.0, 0.0),
            point(0.0, 0.0, 1.0),
            point(0.0, 0.0, -1.0),
        ],
        edges: vec![Edge(0, 1), Edge(0, 2)],
    };
    let mut p = RecordingPainter::default();
    draw_edges(&mut p, &set, Vec2::ZERO, 0.0, &proj);

    let alphas = p.line_alphas();
    assert_eq!(alphas.len(), 2);
    // (0 + R) / 2R = 0.5
    assert!(approx(alphas[0], 0.35 * (0.18 + 0.5 * 0.5)), "front {}", alphas[0]);
    // negative mean depth clamps to the base
    assert!(approx(alphas[1], 0.35 * 0.18), "back {}", alphas[1]);
}

#[test]
fn edges_behind_the_sphere_are_dropped() {
    let proj = Projector::new(100.0);
    let set = PointSet {
        points: vec![
            point(0.0, 0.0, -1.5),
            point(0.2, 0.0, -1.5),
            point(0.0, 0.0, 1.0),
        ],
        edges: vec![Edge(0, 1), Edge(0, 2)],
    };
    let mut p = RecordingPainter::default();
    draw_edges(&mut p, &set, Vec2::ZERO, 0.0, &proj);
    assert_eq!(p.lines(), 1);
    assert!(matches!(
        p.calls[0],
        Call::Line { to, .. } if to == Vec2::new(0.0, 0.0)
    ));
}

#[test]
fn streams_draw_guides_then_one_glowing_circle_per_particle() {
    let vp = Viewport::new(600.0, 400.0);
    let layout = Layout::default().with_streams(true);
    let mut rng = StdRng::seed_from_u64(5);
    let mut pool = StreamPool::new(vp, &layout, &mut rng);
    for (i, particle) in pool.particles.iter_mut().enumerate() {
        particle.t = if i % 2 == 0 { 0.0 } else { 0.5 };
    }
    let center = Vec2::new(300.0, 200.0);

    let mut p = RecordingPainter::default();
    draw_streams(&mut p, &stream_guides(center, vp), &pool);

    assert_eq!(p.quads(), 4);
    assert!(p.calls[..4].iter().all(|c| matches!(c, Call::Quad { .. })));
    let alphas = p.circle_alphas();
    assert_eq!(alphas.len(), pool.particles.len());
    for (i, a) in alphas.iter().enumerate() {
        let expected = if i % 2 == 0 { 0.25 } else { 0.25 + 0.5 * 0.65 };
        assert!(approx(*a, expected), "particle {i}: {a}");
    }
    let glows = p.glows();
    assert!(glows[..glows.len() - 1].iter().all(|g| *g == 12.0));
    assert_eq!(glows.last(), Some(&0.0));
}

#[test]
fn blob_layer_is_blurred_and_additive() {
    let mut rng = StdRng::seed_from_u64(9);
    let vp = Viewport::new(800.0, 600.0);
    let field = BlobField::new(&mut rng);
    let mut p = RecordingPainter::default();
    draw_blobs(&mut p, vp, &field.frames(0.0, vp, Vec2::ZERO));

    let n = field.blobs.len();
    assert_eq!(p.calls[0], Call::Clear);
    assert_eq!(p.calls[1], Call::Additive(true));
    assert_eq!(p.calls[2], Call::Blur(36.0));
    assert!(p.calls[3..3 + n]
        .iter()
        .all(|c| matches!(c, Call::Radial { .. })));
    assert_eq!(p.calls[3 + n..], [Call::Blur(0.0), Call::Additive(false)]);
}

#[test]
fn attached_points_are_drawn_after_additive_blending_ends() {
    let mut e = Engine::new(
        Viewport::new(800.0, 600.0),
        Layout::default(),
        Preset::octahedron(),
        42,
    );
    let anchors = StaticAnchors {
        ends: vec![("left-path-0".into(), Vec2::new(330.0, 300.0))],
        ..Default::default()
    };
    assert!(e.spawn_attached(&anchors, "left-path-0", 3.0, 0.0));

    let mut blobs = RecordingPainter::default();
    let mut sphere = RecordingPainter::default();
    let mut none = StaticAnchors::default();
    e.frame(16.0, &mut blobs, &mut sphere, &mut none);

    let additive_off = sphere
        .position(&Call::Additive(false))
        .expect("additive blending is switched off");
    let circles_after = sphere.calls[additive_off..]
        .iter()
        .filter(|c| matches!(c, Call::Circle { .. }))
        .count();
    let circles_before = sphere.calls[..additive_off]
        .iter()
        .filter(|c| matches!(c, Call::Circle { .. }))
        .count();
    assert_eq!(circles_before, 6);
    assert_eq!(circles_after, 1);
}

#[test]
fn point_glow_comes_from_the_preset() {
    for (preset, glow) in [(Preset::cloud(), 12.0), (Preset::octahedron(), 10.0)] {
        let mut e = Engine::new(Viewport::new(600.0, 400.0), preset.layout(), preset, 7);
        let mut blobs = RecordingPainter::default();
        let mut sphere = RecordingPainter::default();
        let mut anchors = StaticAnchors::default();
        e.frame(16.0, &mut blobs, &mut sphere, &mut anchors);
        let glows = sphere.glows();
        assert!(!glows.is_empty());
        assert!(glows.iter().all(|g| *g == glow || *g == 0.0), "{glows:?}");
        assert!(glows.contains(&glow));
    }
}
