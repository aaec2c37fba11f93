/// Procedural surface meshes
use crate::error::{Error, Result};
use crate::geometry::{Triangle, Vertex};
use crate::transform::{RotationState, Transform};

/// Largest step count accepted along either grid axis
pub const MAX_STEPS: u32 = 1024;

/// Reject step counts that are zero or too large to allocate
pub(crate) fn validate_steps(surface: &str, rows: u32, columns: u32) -> Result<()> {
    if rows == 0 || columns == 0 || rows > MAX_STEPS || columns > MAX_STEPS {
        return Err(Error::InvalidParameter(format!(
            "{surface} step counts must be in 1..={MAX_STEPS}, got {rows}x{columns}"
        )));
    }
    Ok(())
}

/// A triangulated parametric surface that can be posed and drawn.
///
/// Implementors own a vertex buffer and a triangle list derived from it.
/// The triangle list holds copies of vertex positions, so every method that
/// touches vertices must rebuild triangles before returning.
pub trait SurfaceMesh {
    /// Short label used in logs
    fn name(&self) -> &str;

    /// Rebuild the canonical vertex buffer from the surface parameters and
    /// refresh the triangle list
    fn generate_vertices(&mut self);

    /// Rebuild the triangle list from the current vertex buffer
    fn generate_indices(&mut self);

    /// Pose the mesh at an absolute orientation (radians, applied X then Y then Z)
    /// and refresh the triangle list
    fn rotate(&mut self, angle_x: f32, angle_y: f32, angle_z: f32);

    fn vertices(&self) -> &[Vertex];

    fn triangles(&self) -> &[Triangle];
}

/// Vertex storage shared by surfaces sampled on a `(rows + 1) x (columns + 1)`
/// parameter grid, stored row-major.
#[derive(Debug, Clone, Default)]
pub(crate) struct GridMesh {
    rows: usize,
    columns: usize,
    canonical: Vec<Vertex>,
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
}

impl GridMesh {
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Install a freshly sampled vertex set as both the canonical pose and the
    /// current buffer, then rebuild triangles from it
    pub(crate) fn set_vertices(&mut self, vertices: Vec<Vertex>) {
        debug_assert_eq!(vertices.len(), (self.rows + 1) * (self.columns + 1));
        self.vertices.clone_from(&vertices);
        self.canonical = vertices;
        self.rebuild_triangles();
    }

    /// Two triangles per grid cell: (first, second, first + 1) and
    /// (second, second + 1, first + 1)
    pub(crate) fn rebuild_triangles(&mut self) {
        self.triangles.clear();
        if self.vertices.len() < (self.rows + 1) * (self.columns + 1) {
            return;
        }

        self.triangles.reserve(2 * self.rows * self.columns);
        let stride = self.columns + 1;
        for row in 0..self.rows {
            for column in 0..self.columns {
                let first = row * stride + column;
                let second = first + stride;

                self.triangles.push(Triangle::new(
                    self.vertices[first],
                    self.vertices[second],
                    self.vertices[first + 1],
                ));
                self.triangles.push(Triangle::new(
                    self.vertices[second],
                    self.vertices[second + 1],
                    self.vertices[first + 1],
                ));
            }
        }
    }

    /// Rotate the canonical pose into the vertex buffer, then rebuild triangles
    pub(crate) fn pose(&mut self, rotation: &RotationState) {
        Transform::rotate_into(&self.canonical, &mut self.vertices, rotation);
        self.rebuild_triangles();
    }

    pub(crate) fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_grid(rows: usize, columns: usize) -> GridMesh {
        let mut grid = GridMesh::new(rows, columns);
        let vertices = (0..=rows)
            .flat_map(|r| (0..=columns).map(move |c| Vertex::new(c as f32, r as f32, 0.0)))
            .collect();
        grid.set_vertices(vertices);
        grid
    }

    #[test]
    fn test_step_bounds() {
        assert!(validate_steps("grid", 1, MAX_STEPS).is_ok());
        assert!(validate_steps("grid", 0, 4).is_err());
        assert!(validate_steps("grid", MAX_STEPS + 1, 4).is_err());
    }

    #[test]
    fn test_set_vertices_rebuilds_triangles() {
        let grid = flat_grid(2, 3);
        assert_eq!(grid.triangles().len(), 2 * 2 * 3);
    }

    #[test]
    fn test_empty_before_generation() {
        let mut grid = GridMesh::new(2, 2);
        grid.rebuild_triangles();
        assert!(grid.triangles().is_empty());
    }

    #[test]
    fn test_cell_winding() {
        let mut grid = flat_grid(1, 1);
        grid.rebuild_triangles();
        let triangles = grid.triangles();
        assert_eq!(triangles.len(), 2);

        // first = (0,0), second = (0,1), first + 1 = (1,0), second + 1 = (1,1)
        assert_eq!(triangles[0].vertices[0], Vertex::new(0.0, 0.0, 0.0));
        assert_eq!(triangles[0].vertices[1], Vertex::new(0.0, 1.0, 0.0));
        assert_eq!(triangles[0].vertices[2], Vertex::new(1.0, 0.0, 0.0));
        assert_eq!(triangles[1].vertices[0], Vertex::new(0.0, 1.0, 0.0));
        assert_eq!(triangles[1].vertices[1], Vertex::new(1.0, 1.0, 0.0));
        assert_eq!(triangles[1].vertices[2], Vertex::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_pose_is_absolute() {
        let mut grid = flat_grid(3, 2);
        let original = grid.vertices().to_vec();

        grid.pose(&RotationState::new(0.4, 0.4, 0.4));
        grid.pose(&RotationState::new(0.4, 0.4, 0.4));
        let twice = grid.vertices().to_vec();
        grid.pose(&RotationState::new(0.4, 0.4, 0.4));
        assert_eq!(twice, grid.vertices());

        grid.pose(&RotationState::zero());
        for (a, b) in original.iter().zip(grid.vertices()) {
            assert!((a.position - b.position).norm() < 1e-5);
        }
    }
}
