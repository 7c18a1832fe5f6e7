// Host-side integration tests for the particle field simulation.

use glam::Vec3;
use plexus_core::*;
use std::collections::HashSet;

fn still(p: [f32; 3]) -> (Vec3, Vec3) {
    (Vec3::from_array(p), Vec3::ZERO)
}

fn brute_force_pairs(positions: &[Vec3], connect_distance: f32) -> HashSet<(usize, usize)> {
    let mut pairs = HashSet::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            if positions[i].distance(positions[j]) < connect_distance {
                pairs.insert((i, j));
            }
        }
    }
    pairs
}

#[test]
fn three_point_scenario_connects_only_the_close_pair() {
    let points = [
        still([0.0, 0.0, 0.0]),
        still([50.0, 0.0, 0.0]),
        still([200.0, 0.0, 0.0]),
    ];
    let mut field = ParticleField::from_points(FieldConfig::default(), points).unwrap();
    field.tick();

    let conns = field.connections();
    assert_eq!(conns.len(), 1);
    assert_eq!((conns[0].a, conns[0].b), (0, 1));
    assert_eq!(conns[0].a_pos, Vec3::ZERO);
    assert_eq!(conns[0].b_pos, Vec3::new(50.0, 0.0, 0.0));
    assert_eq!(field.connection_counts(), &[1, 1, 0]);
    assert_eq!(field.active_connection_count(), 1);
}

#[test]
fn same_seed_gives_same_field() {
    let config = FieldConfig::default();
    let mut a = ParticleField::new(config, 7).unwrap();
    let mut b = ParticleField::new(config, 7).unwrap();
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.velocities(), b.velocities());
    for _ in 0..50 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.frame(), b.frame());

    let c = ParticleField::new(config, 8).unwrap();
    assert_ne!(a.velocities(), c.velocities());
}

#[test]
fn seeded_points_start_inside_cube_with_bounded_velocity() {
    let config = FieldConfig::default();
    let field = ParticleField::new(config, 42).unwrap();
    assert_eq!(field.len(), MAX_PARTICLES);
    for p in field.positions() {
        assert!(p.abs().max_element() <= config.half_edge, "{p:?} outside cube");
    }
    for v in field.velocities() {
        assert!(v.abs().max_element() <= config.velocity_range, "{v:?} too fast");
    }
}

#[test]
fn point_past_the_wall_reflects_after_moving() {
    let h = CUBE_HALF_EDGE;
    let start = Vec3::new(h - 0.05, 0.0, 0.0);
    let mut field = ParticleField::from_points(
        FieldConfig::default(),
        [(start, Vec3::new(0.2, 0.0, 0.0))],
    )
    .unwrap();

    field.tick();
    let x = field.positions()[0].x;
    assert!(x > h, "expected overshoot past {h}, got {x}");
    assert!((x - (h + 0.15)).abs() < 1e-3);
    assert!((field.velocities()[0].x + 0.2).abs() < 1e-6, "velocity should flip");

    field.tick();
    let x = field.positions()[0].x;
    assert!(x < h, "expected to be back inside, got {x}");
    assert!((x - (h - 0.05)).abs() < 1e-3);
    assert!(field.velocities()[0].x < 0.0, "no second flip while inside");
}

#[test]
fn reflection_is_per_axis() {
    let h = CUBE_HALF_EDGE;
    let mut field = ParticleField::from_points(
        FieldConfig::default(),
        [(Vec3::new(0.0, -h + 0.1, 0.0), Vec3::new(0.1, -0.2, 0.1))],
    )
    .unwrap();
    field.tick();
    let v = field.velocities()[0];
    assert_eq!(v.x, 0.1);
    assert_eq!(v.y, 0.2);
    assert_eq!(v.z, 0.1);
}

#[test]
fn coordinates_overshoot_by_at_most_one_step() {
    let mut field = ParticleField::new(FieldConfig::default(), 1234).unwrap();
    let h = field.config().half_edge;
    for _ in 0..3000 {
        field.tick();
        for (p, v) in field.positions().iter().zip(field.velocities()) {
            let limit = Vec3::splat(h) + v.abs() + Vec3::splat(1e-3);
            assert!(
                p.abs().cmple(limit).all(),
                "position {p:?} beyond bounded overshoot {limit:?}"
            );
        }
    }
}

#[test]
fn velocity_magnitudes_never_change() {
    let mut field = ParticleField::new(FieldConfig::default(), 99).unwrap();
    let initial: Vec<Vec3> = field.velocities().iter().map(|v| v.abs()).collect();
    for _ in 0..2500 {
        field.tick();
    }
    let after: Vec<Vec3> = field.velocities().iter().map(|v| v.abs()).collect();
    assert_eq!(initial, after);
}

#[test]
fn connections_are_sound_and_complete() {
    let mut field = ParticleField::new(FieldConfig::default(), 5).unwrap();
    let d = field.config().connect_distance;
    for _ in 0..200 {
        field.tick();
        let found: HashSet<(usize, usize)> =
            field.connections().iter().map(|c| (c.a, c.b)).collect();
        assert_eq!(found.len(), field.connections().len(), "duplicate pair");
        assert_eq!(found, brute_force_pairs(field.positions(), d));
        for c in field.connections() {
            assert!(c.a < c.b);
            assert!(c.a_pos.distance(c.b_pos) < d);
        }
    }
}

#[test]
fn connection_counts_match_list_references() {
    let mut field = ParticleField::new(FieldConfig::default(), 11).unwrap();
    for _ in 0..100 {
        field.tick();
        let mut expected = vec![0u32; field.len()];
        for c in field.connections() {
            expected[c.a] += 1;
            expected[c.b] += 1;
        }
        assert_eq!(field.connection_counts(), expected.as_slice());
        assert!(field.connections().len() <= field.max_connections());
    }
}

#[test]
fn dense_cluster_hits_pair_upper_bound() {
    let points = (0..10).map(|i| still([i as f32, 0.0, 0.0]));
    let mut field = ParticleField::from_points(FieldConfig::default(), points).unwrap();
    field.tick();
    assert_eq!(field.max_connections(), 45);
    assert_eq!(field.active_connection_count(), 45);
    assert!(field.connection_counts().iter().all(|&c| c == 9));
}

#[test]
fn connection_colors_are_fixed_and_alpha_tracks_distance() {
    let points = [still([0.0, 0.0, 0.0]), still([25.0, 0.0, 0.0]), still([0.0, 90.0, 0.0])];
    let mut field = ParticleField::from_points(FieldConfig::default(), points).unwrap();
    field.tick();
    assert_eq!(field.connections().len(), 3);
    for c in field.connections() {
        assert_eq!(c.color_a, LINE_COLOR_START);
        assert_eq!(c.color_b, LINE_COLOR_END);
        let expected = 1.0 - c.a_pos.distance(c.b_pos) / CONNECT_DISTANCE;
        assert!((c.alpha - expected).abs() < 1e-6);
        assert!(c.alpha > 0.0 && c.alpha <= 1.0);
    }
    assert!((field.connections()[0].alpha - 0.75).abs() < 1e-6);
}

#[test]
fn reading_the_frame_has_no_side_effects() {
    let mut field = ParticleField::new(FieldConfig::default(), 3).unwrap();
    field.tick();
    let first = field.frame();
    let second = field.frame();
    assert_eq!(first, second);
    assert_eq!(first.active_connection_count, first.connections.len());
    assert_eq!(first.positions.len(), field.len());
}

#[test]
fn stale_connections_are_dropped_each_tick() {
    let points = [
        (Vec3::new(-40.0, 0.0, 0.0), Vec3::new(-0.2, 0.0, 0.0)),
        (Vec3::new(59.0, 0.0, 0.0), Vec3::new(0.2, 0.0, 0.0)),
    ];
    let mut field = ParticleField::from_points(FieldConfig::default(), points).unwrap();
    field.tick();
    assert_eq!(field.active_connection_count(), 1);
    for _ in 0..10 {
        field.tick();
    }
    assert_eq!(field.active_connection_count(), 0);
    assert_eq!(field.connection_counts(), &[0, 0]);
}

#[test]
fn empty_field_ticks_to_empty_output() {
    let config = FieldConfig::for_viewport(0.0);
    let mut field = ParticleField::new(config, 1).unwrap();
    assert!(field.is_empty());
    field.tick();
    let frame = field.frame();
    assert!(frame.positions.is_empty());
    assert!(frame.connections.is_empty());
    assert_eq!(frame.active_connection_count, 0);
    assert_eq!(field.max_connections(), 0);
}

#[test]
fn rotation_advances_once_per_tick() {
    let mut field = ParticleField::new(FieldConfig::for_viewport(300.0), 2).unwrap();
    assert_eq!(field.rotation(), CloudRotation::default());
    for _ in 0..1000 {
        field.tick();
    }
    let r = field.rotation();
    assert!((r.x - 1000.0 * ROTATION_X_PER_TICK).abs() < 1e-4);
    assert!((r.y - 1000.0 * ROTATION_Y_PER_TICK).abs() < 1e-4);
}

#[test]
fn invalid_config_is_refused_at_init() {
    let config = FieldConfig {
        connect_distance: 0.0,
        ..FieldConfig::default()
    };
    match ParticleField::new(config, 1) {
        Err(FieldError::InvalidConfig { field, .. }) => assert_eq!(field, "connect_distance"),
        Ok(_) => panic!("zero connect distance accepted"),
    }

    let config = FieldConfig {
        half_edge: -1.0,
        ..FieldConfig::default()
    };
    assert!(ParticleField::from_points(config, [still([0.0; 3])]).is_err());
}
