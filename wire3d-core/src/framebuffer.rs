/// Pixel targets for the rasterizer
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Packed `0x00RRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

/// Parses `#RRGGBB` or `RRGGBB` hex
impl FromStr for Color {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::Parse(format!("invalid color {input:?}, expected #RRGGBB")));
        }
        u32::from_str_radix(hex, 16)
            .map(Color)
            .map_err(|e| Error::Parse(format!("invalid color {input:?}: {e}")))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Something pixels can be written to.
///
/// `set_pixel` takes signed coordinates and must ignore anything outside
/// `0..width` x `0..height`.
pub trait Surface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    fn clear(&mut self, color: Color);
}

/// Row-major in-memory pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "frame buffer dimensions must be non-zero, got {width}x{height}"
            )));
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Color::default(); width * height],
        })
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width)
    }

    /// Number of pixels currently set to `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == color).count()
    }
}

impl Surface for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }
}
