/// UV-parameterized sphere
use std::f32::consts::PI;

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::{Triangle, Vertex};
use crate::mesh::{validate_steps, GridMesh, SurfaceMesh};
use crate::transform::RotationState;

/// Sphere sampled on a latitude/longitude grid.
///
/// Latitude runs from the +Y pole (`theta = 0`) to the -Y pole
/// (`theta = PI`); longitude wraps once around Y. The seam and the poles are
/// duplicated, giving `(latitude_steps + 1) * (longitude_steps + 1)` vertices
/// and `2 * latitude_steps * longitude_steps` triangles.
#[derive(Debug, Clone)]
pub struct Sphere {
    radius: f32,
    latitude_steps: u32,
    longitude_steps: u32,
    grid: GridMesh,
}

impl Sphere {
    pub fn new(radius: f32, latitude_steps: u32, longitude_steps: u32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "sphere radius must be positive and finite, got {radius}"
            )));
        }
        validate_steps("sphere", latitude_steps, longitude_steps)?;

        let mut sphere = Self {
            radius,
            latitude_steps,
            longitude_steps,
            grid: GridMesh::new(latitude_steps as usize, longitude_steps as usize),
        };
        sphere.generate_vertices();

        debug!(
            "sphere r={} {}x{}: {} vertices, {} triangles",
            radius,
            latitude_steps,
            longitude_steps,
            sphere.grid.vertices().len(),
            sphere.grid.triangles().len()
        );
        Ok(sphere)
    }
}

impl SurfaceMesh for Sphere {
    fn name(&self) -> &str {
        "sphere"
    }

    fn generate_vertices(&mut self) {
        let lat_steps = self.latitude_steps as f32;
        let lon_steps = self.longitude_steps as f32;
        let mut vertices =
            Vec::with_capacity((self.latitude_steps as usize + 1) * (self.longitude_steps as usize + 1));

        for lat in 0..=self.latitude_steps {
            let theta = PI * lat as f32 / lat_steps;
            let (sin_theta, cos_theta) = theta.sin_cos();

            for lon in 0..=self.longitude_steps {
                let phi = 2.0 * PI * lon as f32 / lon_steps;
                let (sin_phi, cos_phi) = phi.sin_cos();

                vertices.push(Vertex::new(
                    self.radius * sin_theta * cos_phi,
                    self.radius * cos_theta,
                    self.radius * sin_theta * sin_phi,
                ));
            }
        }

        self.grid.set_vertices(vertices);
    }

    fn generate_indices(&mut self) {
        self.grid.rebuild_triangles();
    }

    fn rotate(&mut self, angle_x: f32, angle_y: f32, angle_z: f32) {
        self.grid.pose(&RotationState::new(angle_x, angle_y, angle_z));
    }

    fn vertices(&self) -> &[Vertex] {
        self.grid.vertices()
    }

    fn triangles(&self) -> &[Triangle] {
        self.grid.triangles()
    }
}
