/// Presents a frame buffer as terminal character cells
use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{Color, FrameBuffer};

/// Glyph used for every lit pixel
const LIT_CELL: char = '#';

/// Maps each pixel to one cell: background pixels print as blanks, anything
/// else as [`LIT_CELL`] in the pixel's color.
pub struct CellRenderer {
    background: Color,
}

impl CellRenderer {
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Character for a pixel
    pub fn cell(&self, pixel: Color) -> char {
        if pixel == self.background {
            ' '
        } else {
            LIT_CELL
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W, buffer: &FrameBuffer) -> std::io::Result<()> {
        let mut current: Option<Color> = None;

        for (y, row) in buffer.rows().enumerate() {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for &pixel in row {
                let c = self.cell(pixel);
                if c != ' ' && current != Some(pixel) {
                    writer.queue(SetForegroundColor(TermColor::Rgb {
                        r: pixel.r(),
                        g: pixel.g(),
                        b: pixel.b(),
                    }))?;
                    current = Some(pixel);
                }
                writer.queue(Print(c))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::Surface;

    #[test]
    fn test_cells() {
        let renderer = CellRenderer::new(Color::WHITE);
        assert_eq!(renderer.cell(Color::WHITE), ' ');
        assert_eq!(renderer.cell(Color::BLUE), '#');
    }

    #[test]
    fn test_draw_emits_every_cell() {
        let mut buffer = FrameBuffer::new(4, 2).unwrap();
        buffer.clear(Color::WHITE);
        buffer.set_pixel(1, 0, Color::BLUE);
        buffer.set_pixel(2, 1, Color::BLUE);

        let mut out = Vec::new();
        CellRenderer::new(Color::WHITE).draw(&mut out, &buffer).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches('#').count(), 2);
        // One color change is enough for both lit cells
        assert_eq!(text.matches("38;2;0;0;255").count(), 1);
    }
}
