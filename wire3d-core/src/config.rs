/// Engine tuning constants
use crate::error::{Error, Result};
use crate::framebuffer::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Projection scale passed to [`crate::Vertex::project_to_2d`]
    pub scale: f32,
    /// Radius of the circular camera-offset path, in pixels
    pub orbit_radius: f32,
    /// Radians added to each rotation angle per tick
    pub rotation_step: f32,
    /// Degrees added to the orbit angle per tick
    pub orbit_step_degrees: f32,
    pub background: Color,
    pub foreground: Color,
}

impl EngineConfig {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_orbit_radius(mut self, orbit_radius: f32) -> Self {
        self.orbit_radius = orbit_radius;
        self
    }

    pub fn with_colors(mut self, background: Color, foreground: Color) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        for (label, value) in [
            ("orbit radius", self.orbit_radius),
            ("rotation step", self.rotation_step),
            ("orbit step", self.orbit_step_degrees),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "{label} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scale: 8.0,
            orbit_radius: 400.0,
            rotation_step: 0.01,
            orbit_step_degrees: 3.0,
            background: Color::WHITE,
            foreground: Color::BLUE,
        }
    }
}
