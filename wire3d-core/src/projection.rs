/// Pseudo-perspective projection to screen space
use crate::geometry::Vertex;

/// Field-of-view constant folded into the perspective divide
pub const FOV: f32 = 70.0;

/// Horizontal and vertical stretch applied after the divide
pub const ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Denominators smaller than this are treated as a division by zero
const MIN_DEPTH_DIVISOR: f32 = 1e-6;

impl Vertex {
    /// Project this point onto the screen.
    ///
    /// Both axes are divided by `1 + z / (FOV * scale)`, stretched by
    /// [`ASPECT_RATIO`], then translated by the center and offset. The y axis
    /// is flipped since screen rows grow downward. `z` is carried through.
    ///
    /// Returns `None` when the divisor is (near) zero or the result is not
    /// finite.
    pub fn project_to_2d(
        &self,
        center_x: i32,
        center_y: i32,
        scale: f32,
        offset_x: f32,
        offset_y: f32,
    ) -> Option<Vertex> {
        let divisor = 1.0 + self.z() / (FOV * scale);
        if divisor.abs() < MIN_DEPTH_DIVISOR {
            return None;
        }

        let projected_x = self.x() / divisor * ASPECT_RATIO;
        let projected_y = self.y() / divisor * ASPECT_RATIO;

        let screen_x = center_x as f32 + projected_x + offset_x;
        let screen_y = center_y as f32 - projected_y + offset_y;

        if !screen_x.is_finite() || !screen_y.is_finite() {
            return None;
        }

        Some(Vertex::new(screen_x, screen_y, self.z()))
    }
}
