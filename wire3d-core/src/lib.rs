/// WIRE3D Core Library - Wireframe geometry and rasterization pipeline
///
/// This library provides procedural surface meshes, rigid rotation,
/// pseudo-perspective projection, Bresenham rasterization, and the per-frame
/// engine that ties them together. Hosts supply the tick and present the
/// frame buffer.

pub mod config;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod mesh;
pub mod projection;
pub mod raster;
pub mod sphere;
pub mod torus;
pub mod transform;

// Re-export commonly used types
pub use config::EngineConfig;
pub use descriptor::MeshDescriptor;
pub use engine::{AnimationState, Engine, FrameStats};
pub use error::{Error, Result};
pub use framebuffer::{Color, FrameBuffer, Surface};
pub use geometry::{Triangle, Vertex};
pub use mesh::SurfaceMesh;
pub use raster::{draw_line, draw_triangle};
pub use sphere::Sphere;
pub use torus::Torus;
pub use transform::{RotationState, Transform};
