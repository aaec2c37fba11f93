/// Rigid rotation of vertex buffers
use nalgebra::{Rotation3, Vector3};

use crate::geometry::Vertex;

/// Rotation angles around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

pub struct Transform;

impl Transform {
    /// Rotation about X, then Y, then Z
    pub fn rotation_matrix(rotation: &RotationState) -> Rotation3<f32> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z);

        rz * ry * rx
    }

    /// Replace the contents of `target` with `source` rotated by `rotation`
    pub fn rotate_into(source: &[Vertex], target: &mut Vec<Vertex>, rotation: &RotationState) {
        let matrix = Self::rotation_matrix(rotation);
        target.clear();
        target.extend(
            source
                .iter()
                .map(|vertex| Vertex::from(matrix * vertex.position)),
        );
    }
}
