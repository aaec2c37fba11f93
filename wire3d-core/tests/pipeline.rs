use wire3d_core::{Color, Engine, EngineConfig, FrameBuffer, MeshDescriptor, Sphere, SurfaceMesh};

#[test]
fn test_unit_sphere_after_zero_rotation() {
    let mut sphere = Sphere::new(1.0, 4, 4).unwrap();
    sphere.rotate(0.0, 0.0, 0.0);

    let triangles = sphere.triangles();
    assert_eq!(triangles.len(), 2 * 4 * 4);
    for triangle in triangles {
        for vertex in &triangle.vertices {
            assert!((vertex.norm() - 1.0).abs() < 1e-5);
        }
    }
}

#[test]
fn test_orbiting_scene_stays_consistent() {
    let config = EngineConfig::default().with_orbit_radius(10.0);
    let mut engine = Engine::new(config).unwrap();
    for descriptor in ["sphere(12, 12, 12)", "torus(8, 2, 16, 8)"] {
        let mesh = descriptor.parse::<MeshDescriptor>().unwrap().build().unwrap();
        engine.add_mesh(mesh);
    }
    engine.attach_target(FrameBuffer::new(200, 100).unwrap());

    let expected = 2 * 12 * 12 + 2 * 16 * 8;
    for tick in 1..=150 {
        let stats = engine.on_tick().unwrap();
        assert_eq!(stats.frame, tick);
        assert_eq!(stats.triangles_drawn + stats.triangles_skipped, expected);
        assert!(engine.state().orbit_degrees < 360.0);
        assert!(engine.target().unwrap().count(Color::BLUE) > 0);
    }

    // Rotation is absolute, so every vertex keeps its distance from the origin
    let sphere = engine.meshes().next().unwrap();
    for vertex in sphere.vertices() {
        assert!((vertex.norm() - 12.0).abs() < 1e-3);
    }

    let buffer = engine.detach_target().unwrap();
    assert_eq!(buffer.pixels().len(), 200 * 100);
}
