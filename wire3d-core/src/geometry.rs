/// Geometry primitives for wireframe rendering
use nalgebra::Point3;

/// A 3D point. Projected vertices keep their depth in `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn z(&self) -> f32 {
        self.position.z
    }

    /// Distance from the origin
    pub fn norm(&self) -> f32 {
        self.position.coords.norm()
    }
}

impl From<Point3<f32>> for Vertex {
    fn from(position: Point3<f32>) -> Self {
        Self { position }
    }
}

/// A triangle holding copies of three vertex positions.
///
/// Triangles snapshot the vertex buffer they were built from; once the
/// owning mesh rotates they are stale and the mesh rebuilds them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// The closed edge loop p1->p2, p2->p3, p3->p1
    pub fn edges(&self) -> [(Vertex, Vertex); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}
