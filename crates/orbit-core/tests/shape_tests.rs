use glam::Vec3;
use orbit_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn octahedron_recovers_its_twelve_edges() {
    let mut rng = StdRng::seed_from_u64(1);
    let set = Octahedron { edge_threshold: 1.2 }.build(Viewport::new(800.0, 600.0), &mut rng);
    assert_eq!(set.points.len(), 6);
    assert_eq!(set.edges.len(), 12);
    for Edge(a, b) in &set.edges {
        assert!(a < b, "edge should be stored low-high");
        let len = set.points[*a].pos.distance(set.points[*b].pos);
        assert!((len - 2f32.sqrt()).abs() < 1e-5, "edge length {len}");
    }
}

#[test]
fn octahedron_has_no_edge_through_the_center() {
    let points: Vec<Vec3> = OCTAHEDRON_VERTICES.iter().map(|v| Vec3::from_array(*v)).collect();
    let edges = build_edges_by_distance(&points, 1.2);
    assert!(!edges.contains(&Edge(0, 1)));
    assert!(!edges.contains(&Edge(2, 3)));
    assert!(!edges.contains(&Edge(4, 5)));
}

#[test]
fn degenerate_point_sets_have_no_edges() {
    assert!(build_edges_by_distance(&[], 1.2).is_empty());
    assert!(build_edges_by_distance(&[Vec3::X], 1.2).is_empty());
    assert!(build_edges_by_distance(&[Vec3::X, Vec3::X], 1.2).is_empty());
}

#[test]
fn edges_never_loop_back() {
    let mut rng = StdRng::seed_from_u64(5);
    let set = RandomCloud { edge_threshold: Some(1.05) }.build(Viewport::new(300.0, 300.0), &mut rng);
    assert!(!set.edges.is_empty());
    for Edge(a, b) in &set.edges {
        assert_ne!(a, b);
    }
}

#[test]
fn cloud_size_tracks_viewport_width() {
    let mut rng = StdRng::seed_from_u64(9);
    let set = RandomCloud { edge_threshold: None }.build(Viewport::new(600.0, 400.0), &mut rng);
    assert_eq!(set.points.len(), 100);
    assert!(set.edges.is_empty());
    for p in &set.points {
        assert!((p.pos.length() - 1.0).abs() < 1e-4);
        assert!(p.size >= 1.2 && p.size < 2.4);
    }
}
