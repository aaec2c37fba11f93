/// Per-frame driver: animates meshes and rasterizes them into a frame buffer
use log::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::framebuffer::{FrameBuffer, Surface};
use crate::geometry::Vertex;
use crate::mesh::SurfaceMesh;
use crate::raster::draw_triangle;
use crate::transform::RotationState;

/// How far past the surface, in multiples of its size, a projected vertex may
/// land before its triangle is skipped
const SCREEN_MARGIN: f32 = 4.0;

/// Animation values advanced once per tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Absolute mesh orientation; grows without wrapping
    pub rotation: RotationState,
    /// Orbit position in degrees, kept in `[0, 360)`
    pub orbit_degrees: f32,
    /// Camera offset derived from the orbit position
    pub offset_x: f32,
    pub offset_y: f32,
}

impl AnimationState {
    pub fn advance(&mut self, config: &EngineConfig) {
        let step = config.rotation_step;
        self.rotation.rotate(step, step, step);

        self.orbit_degrees = (self.orbit_degrees + config.orbit_step_degrees).rem_euclid(360.0);

        let (sin, cos) = self.orbit_degrees.to_radians().sin_cos();
        self.offset_x = config.orbit_radius * cos;
        self.offset_y = config.orbit_radius * sin;
    }
}

/// Summary of one redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frame: u64,
    pub triangles_drawn: usize,
    /// Triangles with a vertex that could not be projected or landed far
    /// outside the target
    pub triangles_skipped: usize,
}

pub struct Engine {
    config: EngineConfig,
    state: AnimationState,
    meshes: Vec<Box<dyn SurfaceMesh>>,
    target: Option<FrameBuffer>,
    frame: u64,
    reported_skips: bool,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: AnimationState::default(),
            meshes: Vec::new(),
            target: None,
            frame: 0,
            reported_skips: false,
        })
    }

    pub fn add_mesh(&mut self, mesh: Box<dyn SurfaceMesh>) {
        debug!(
            "adding {} with {} triangles",
            mesh.name(),
            mesh.triangles().len()
        );
        self.meshes.push(mesh);
    }

    /// Hand the engine a frame buffer to draw into, returning any previous one
    pub fn attach_target(&mut self, target: FrameBuffer) -> Option<FrameBuffer> {
        debug!("attached {}x{} target", target.width(), target.height());
        self.target.replace(target)
    }

    /// Take the frame buffer back, e.g. on host teardown
    pub fn detach_target(&mut self) -> Option<FrameBuffer> {
        let target = self.target.take();
        if target.is_some() {
            debug!("detached target");
        }
        target
    }

    pub fn target(&self) -> Option<&FrameBuffer> {
        self.target.as_ref()
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn meshes(&self) -> impl Iterator<Item = &dyn SurfaceMesh> {
        self.meshes.iter().map(|mesh| mesh.as_ref())
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the animation and pose every mesh at the new orientation
    pub fn update(&mut self) {
        self.state.advance(&self.config);

        let RotationState { x, y, z } = self.state.rotation;
        for mesh in &mut self.meshes {
            mesh.rotate(x, y, z);
        }
    }

    /// Clear the target and draw every mesh's current triangles
    pub fn redraw(&mut self) -> Result<FrameStats> {
        let target = self.target.as_mut().ok_or(Error::RenderTargetUnavailable)?;
        target.clear(self.config.background);

        let center_x = (target.width() / 2) as i32;
        let center_y = (target.height() / 2) as i32;
        let (width, height) = (target.width() as f32, target.height() as f32);
        let AnimationState {
            offset_x, offset_y, ..
        } = self.state;

        self.frame += 1;
        let mut stats = FrameStats {
            frame: self.frame,
            ..FrameStats::default()
        };

        for mesh in &self.meshes {
            for triangle in mesh.triangles() {
                let [p1, p2, p3] = triangle.vertices.map(|vertex| {
                    vertex
                        .project_to_2d(center_x, center_y, self.config.scale, offset_x, offset_y)
                        .filter(|p| near_surface(p, width, height))
                });
                match (p1, p2, p3) {
                    (Some(p1), Some(p2), Some(p3)) => {
                        draw_triangle(target, &p1, &p2, &p3, self.config.foreground);
                        stats.triangles_drawn += 1;
                    }
                    _ => stats.triangles_skipped += 1,
                }
            }
        }

        if stats.triangles_skipped > 0 && !self.reported_skips {
            warn!(
                "frame {}: skipped {} triangles with unprojectable or far off-screen vertices",
                stats.frame, stats.triangles_skipped
            );
            self.reported_skips = true;
        }
        trace!("frame {} drew {} triangles", stats.frame, stats.triangles_drawn);

        Ok(stats)
    }

    /// One host tick: update then redraw.
    ///
    /// Fails without advancing the animation when no target is attached.
    pub fn on_tick(&mut self) -> Result<FrameStats> {
        if self.target.is_none() {
            return Err(Error::RenderTargetUnavailable);
        }
        self.update();
        self.redraw()
    }
}

/// Whether a projected vertex lies within [`SCREEN_MARGIN`] surface sizes of
/// the surface. Lines to points beyond that would walk millions of pixels.
fn near_surface(point: &Vertex, width: f32, height: f32) -> bool {
    let (min_x, max_x) = (-SCREEN_MARGIN * width, (1.0 + SCREEN_MARGIN) * width);
    let (min_y, max_y) = (-SCREEN_MARGIN * height, (1.0 + SCREEN_MARGIN) * height);
    (min_x..=max_x).contains(&point.x()) && (min_y..=max_y).contains(&point.y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Color;
    use crate::geometry::Triangle;
    use crate::sphere::Sphere;

    /// Static triangle soup for exercising the draw path
    struct FixedMesh {
        vertices: Vec<Vertex>,
        triangles: Vec<Triangle>,
    }

    impl FixedMesh {
        fn new(triangles: Vec<Triangle>) -> Self {
            let vertices = triangles.iter().flat_map(|t| t.vertices).collect();
            Self {
                vertices,
                triangles,
            }
        }
    }

    impl SurfaceMesh for FixedMesh {
        fn name(&self) -> &str {
            "fixed"
        }

        fn generate_vertices(&mut self) {}

        fn generate_indices(&mut self) {}

        fn rotate(&mut self, _angle_x: f32, _angle_y: f32, _angle_z: f32) {}

        fn vertices(&self) -> &[Vertex] {
            &self.vertices
        }

        fn triangles(&self) -> &[Triangle] {
            &self.triangles
        }
    }

    fn engine_with_sphere() -> Engine {
        let config = EngineConfig::default().with_orbit_radius(0.0);
        let mut engine = Engine::new(config).unwrap();
        engine.add_mesh(Box::new(Sphere::new(20.0, 8, 8).unwrap()));
        engine
    }

    #[test]
    fn test_advance_steps_angles_and_orbit() {
        let config = EngineConfig::default();
        let mut state = AnimationState::default();
        state.advance(&config);

        assert!((state.rotation.x - 0.01).abs() < 1e-6);
        assert!((state.rotation.y - 0.01).abs() < 1e-6);
        assert!((state.rotation.z - 0.01).abs() < 1e-6);
        assert!((state.orbit_degrees - 3.0).abs() < 1e-6);
        assert!((state.offset_x - 400.0 * 3.0f32.to_radians().cos()).abs() < 1e-3);
        assert!((state.offset_y - 400.0 * 3.0f32.to_radians().sin()).abs() < 1e-3);
    }

    #[test]
    fn test_orbit_wraps() {
        let config = EngineConfig::default();
        let mut state = AnimationState::default();
        for _ in 0..120 {
            state.advance(&config);
        }
        assert!(state.orbit_degrees.abs() < 1e-3 || (state.orbit_degrees - 360.0).abs() < 1e-3);
        assert!(state.orbit_degrees < 360.0);
        assert!((state.offset_x - 400.0).abs() < 0.5);
    }

    #[test]
    fn test_redraw_requires_target() {
        let mut engine = engine_with_sphere();
        assert!(matches!(engine.redraw(), Err(Error::RenderTargetUnavailable)));
        assert!(matches!(engine.on_tick(), Err(Error::RenderTargetUnavailable)));
        assert_eq!(engine.state().rotation, RotationState::zero());
    }

    #[test]
    fn test_tick_draws_wireframe() {
        let mut engine = engine_with_sphere();
        engine.attach_target(FrameBuffer::new(160, 120).unwrap());

        let stats = engine.on_tick().unwrap();
        assert_eq!(stats.frame, 1);
        assert_eq!(stats.triangles_drawn, 2 * 8 * 8);
        assert_eq!(stats.triangles_skipped, 0);

        let target = engine.target().unwrap();
        let drawn = target.count(Color::BLUE);
        assert!(drawn > 0);
        assert_eq!(drawn + target.count(Color::WHITE), 160 * 120);
        // The north pole is an endpoint of the first triangle's edges
        let pole = engine.meshes().next().unwrap().vertices()[0];
        let projected = pole.project_to_2d(80, 60, 8.0, 0.0, 0.0).unwrap();
        assert_eq!(
            target.pixel(projected.x() as i32, projected.y() as i32),
            Some(Color::BLUE)
        );
    }

    #[test]
    fn test_near_singular_projection_is_skipped() {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        // 1 + z / (70 * 8) is about 2e-5 here, pushing x out to ~1e6 pixels
        let far = Triangle::new(
            Vertex::new(10.0, 0.0, -559.99),
            Vertex::origin(),
            Vertex::new(0.0, 10.0, 0.0),
        );
        let near = Triangle::new(
            Vertex::origin(),
            Vertex::new(3.0, 0.0, 0.0),
            Vertex::new(0.0, 3.0, 0.0),
        );
        engine.add_mesh(Box::new(FixedMesh::new(vec![far, near])));
        engine.attach_target(FrameBuffer::new(40, 30).unwrap());

        let stats = engine.redraw().unwrap();
        assert_eq!(stats.triangles_drawn, 1);
        assert_eq!(stats.triangles_skipped, 1);
        assert!(engine.target().unwrap().count(Color::BLUE) > 0);
    }

    #[test]
    fn test_tiny_scale_keeps_triangle_accounting() {
        // Eighteen zoom-out steps from the default scale
        let scale = 8.0 / 1.25f32.powi(18);
        let config = EngineConfig::default().with_scale(scale).with_orbit_radius(0.0);
        let mut engine = Engine::new(config).unwrap();
        engine.add_mesh(Box::new(Sphere::new(12.0, 16, 16).unwrap()));
        engine.attach_target(FrameBuffer::new(160, 60).unwrap());

        for _ in 0..10 {
            let stats = engine.on_tick().unwrap();
            assert_eq!(stats.triangles_drawn + stats.triangles_skipped, 2 * 16 * 16);
        }
    }

    #[test]
    fn test_near_surface_margin() {
        assert!(near_surface(&Vertex::new(-100.0, 50.0, 0.0), 40.0, 30.0));
        assert!(near_surface(&Vertex::new(200.0, 150.0, 0.0), 40.0, 30.0));
        assert!(!near_surface(&Vertex::new(201.0, 0.0, 0.0), 40.0, 30.0));
        assert!(!near_surface(&Vertex::new(0.0, -121.0, 0.0), 40.0, 30.0));
    }

    #[test]
    fn test_redraw_clears_previous_frame() {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        let mut buffer = FrameBuffer::new(10, 10).unwrap();
        buffer.set_pixel(3, 3, Color::BLACK);
        engine.attach_target(buffer);

        engine.redraw().unwrap();
        assert_eq!(engine.target().unwrap().count(Color::WHITE), 100);
    }

    #[test]
    fn test_update_poses_meshes() {
        let mut engine = engine_with_sphere();
        engine.update();
        engine.update();

        let expected = {
            let mut sphere = Sphere::new(20.0, 8, 8).unwrap();
            sphere.rotate(0.02, 0.02, 0.02);
            sphere.vertices().to_vec()
        };
        let mesh = engine.meshes().next().unwrap();
        for (a, b) in expected.iter().zip(mesh.vertices()) {
            assert!((a.position - b.position).norm() < 1e-4);
        }
    }

    #[test]
    fn test_detach_target() {
        let mut engine = engine_with_sphere();
        assert!(engine.attach_target(FrameBuffer::new(4, 4).unwrap()).is_none());
        assert!(engine.detach_target().is_some());
        assert!(engine.redraw().is_err());
    }
}
