/// Wireframe rasterization onto a [`Surface`]
use crate::framebuffer::{Color, Surface};
use crate::geometry::Vertex;

/// Bresenham line from `(x1, y1)` to `(x2, y2)`, both endpoints inclusive.
///
/// No clipping is done here; the surface drops pixels outside its bounds.
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
) {
    // Error terms are kept in i64 so extreme coordinates cannot overflow
    let (mut x, mut y) = (x1 as i64, y1 as i64);
    let (x2, y2) = (x2 as i64, y2 as i64);

    let dx = (x2 - x).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let dy = -(y2 - y).abs();
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        surface.set_pixel(x as i32, y as i32, color);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Outline of a projected triangle: p1->p2, p2->p3, p3->p1.
///
/// Screen coordinates are truncated toward zero.
pub fn draw_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    p1: &Vertex,
    p2: &Vertex,
    p3: &Vertex,
    color: Color,
) {
    for (a, b) in [(p1, p2), (p2, p3), (p3, p1)] {
        draw_line(
            surface,
            a.x() as i32,
            a.y() as i32,
            b.x() as i32,
            b.y() as i32,
            color,
        );
    }
}
