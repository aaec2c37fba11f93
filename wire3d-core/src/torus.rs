/// Ring torus around the Y axis
use std::f32::consts::TAU;

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::{Triangle, Vertex};
use crate::mesh::{validate_steps, GridMesh, SurfaceMesh};
use crate::transform::RotationState;

#[derive(Debug, Clone)]
pub struct Torus {
    major_radius: f32,
    minor_radius: f32,
    major_steps: u32,
    minor_steps: u32,
    grid: GridMesh,
}

impl Torus {
    /// `major_radius` is the distance from the center to the tube center,
    /// `minor_radius` the tube radius.
    pub fn new(major_radius: f32, minor_radius: f32, major_steps: u32, minor_steps: u32) -> Result<Self> {
        for (label, radius) in [("major", major_radius), ("minor", minor_radius)] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "torus {label} radius must be positive and finite, got {radius}"
                )));
            }
        }
        validate_steps("torus", major_steps, minor_steps)?;

        let mut torus = Self {
            major_radius,
            minor_radius,
            major_steps,
            minor_steps,
            grid: GridMesh::new(major_steps as usize, minor_steps as usize),
        };
        torus.generate_vertices();

        debug!(
            "torus R={} r={} {}x{}: {} triangles",
            major_radius,
            minor_radius,
            major_steps,
            minor_steps,
            torus.grid.triangles().len()
        );
        Ok(torus)
    }
}

impl SurfaceMesh for Torus {
    fn name(&self) -> &str {
        "torus"
    }

    fn generate_vertices(&mut self) {
        let mut vertices =
            Vec::with_capacity((self.major_steps as usize + 1) * (self.minor_steps as usize + 1));

        for i in 0..=self.major_steps {
            let u = TAU * i as f32 / self.major_steps as f32;
            let (sin_u, cos_u) = u.sin_cos();

            for j in 0..=self.minor_steps {
                let v = TAU * j as f32 / self.minor_steps as f32;
                let (sin_v, cos_v) = v.sin_cos();
                let ring = self.major_radius + self.minor_radius * cos_v;

                vertices.push(Vertex::new(ring * cos_u, self.minor_radius * sin_v, ring * sin_u));
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
