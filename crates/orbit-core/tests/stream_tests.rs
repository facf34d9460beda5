use glam::Vec2;
use orbit_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn streaming_layout() -> Layout {
    Layout::default().with_streams(true)
}

#[test]
fn pool_is_sized_by_width_and_alternates_sides() {
    let mut rng = StdRng::seed_from_u64(11);
    let pool = StreamPool::new(Viewport::new(1200.0, 700.0), &streaming_layout(), &mut rng);
    assert_eq!(pool.particles.len(), 100);
    assert_eq!(pool.particles[0].side, Side::Left);
    assert_eq!(pool.particles[1].side, Side::Right);
    assert_eq!(pool.particles[0].direction, Direction::Out);
    assert_eq!(pool.particles[1].direction, Direction::In);
    assert_eq!(pool.particles[3].direction, Direction::Out);
}

#[test]
fn disabled_streams_leave_the_pool_empty() {
    let mut rng = StdRng::seed_from_u64(11);
    let pool = StreamPool::new(Viewport::new(1200.0, 700.0), &Layout::default(), &mut rng);
    assert!(pool.is_empty());
}

#[test]
fn inbound_particles_start_outside_the_viewport() {
    let mut rng = StdRng::seed_from_u64(2);
    let vp = Viewport::new(800.0, 600.0);
    let layout = streaming_layout();
    for _ in 0..50 {
        let left = StreamParticle::spawn(Side::Left, Direction::In, vp, &layout, &mut rng);
        assert!(left.curve.start.x <= -80.0 && left.curve.start.x > -240.0);
        assert!((left.curve.end.x - 400.0).abs() <= 40.0);
        let right = StreamParticle::spawn(Side::Right, Direction::Out, vp, &layout, &mut rng);
        assert!(right.curve.end.x >= 880.0 && right.curve.end.x < 1040.0);
        assert!((right.curve.start.x - 400.0).abs() <= 40.0);
        assert!((0.0..1.0).contains(&left.t));
    }
}

#[test]
fn particles_follow_their_quadratic_curve() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut p = StreamParticle::spawn(
        Side::Left,
        Direction::In,
        Viewport::new(800.0, 600.0),
        &streaming_layout(),
        &mut rng,
    );
    p.t = 0.0;
    assert_eq!(p.position(), p.curve.start);
    assert!((p.opacity() - 0.25).abs() < 1e-6);
    p.t = 0.5;
    let expected = p.curve.start * 0.25 + p.curve.control * 0.5 + p.curve.end * 0.25;
    assert!((p.position() - expected).length() < 1e-3);
    assert!((p.opacity() - 0.575).abs() < 1e-6);
}

#[test]
fn finished_particles_are_fully_regenerated() {
    let mut rng = StdRng::seed_from_u64(8);
    let vp = Viewport::new(900.0, 500.0);
    let layout = streaming_layout();
    let mut pool = StreamPool::new(vp, &layout, &mut rng);
    pool.particles.truncate(4);
    for p in &mut pool.particles {
        p.t = 0.999;
        p.speed = 0.005;
    }
    let before = pool.particles.clone();
    pool.advance(16.0, vp, &layout, &mut rng);
    for (old, new) in before.iter().zip(&pool.particles) {
        assert_eq!(old.side, new.side);
        assert_eq!(old.direction, new.direction);
        assert!((0.0..1.0).contains(&new.t));
        assert_ne!(old.curve.start, new.curve.start);
        assert_ne!(old.curve.control, new.curve.control);
        assert_ne!(old.curve.end, new.curve.end);
        assert_ne!(old.speed, new.speed);
    }
}

#[test]
fn advance_scales_with_elapsed_time() {
    let mut rng = StdRng::seed_from_u64(3);
    let vp = Viewport::new(240.0, 400.0);
    let layout = streaming_layout();
    let mut pool = StreamPool::new(vp, &layout, &mut rng);
    for p in &mut pool.particles {
        p.t = 0.1;
        p.speed = 0.004;
    }
    pool.advance(32.0, vp, &layout, &mut rng);
    for p in &pool.particles {
        assert!((p.t - 0.108).abs() < 1e-6);
    }
}

#[test]
fn guides_enter_from_both_sides() {
    let guides = stream_guides(Vec2::new(400.0, 300.0), Viewport::new(800.0, 600.0));
    assert!(guides[0].start.x < 0.0 && guides[1].start.x < 0.0);
    assert!(guides[2].start.x > 800.0 && guides[3].start.x > 800.0);
    for g in &guides {
        assert!((g.end - Vec2::new(400.0, 300.0)).length() < 40.0);
    }
}
