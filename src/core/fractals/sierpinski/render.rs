use crate::core::data::canvas::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::sierpinski::depth::SierpinskiDepth;
use crate::core::fractals::sierpinski::subdivision::{Triangle, root_triangle, subdivide};
use crate::core::palette::Palette;

pub const BACKGROUND: Colour = Colour::grey(10);

/// Palette position of a leaf: its height relative to the canvas.
#[must_use]
pub fn leaf_shade(triangle: &Triangle, canvas: CanvasSize) -> f64 {
    ((triangle.c.y - triangle.a.y) / f64::from(canvas.height())).clamp(0.0, 1.0)
}

#[must_use]
pub fn render_sierpinski(canvas: CanvasSize, depth: SierpinskiDepth, palette: Palette) -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(canvas, BACKGROUND);

    subdivide(&root_triangle(canvas), depth, &mut |leaf| {
        let colour = palette.evaluate(leaf_shade(leaf, canvas));
        buffer.fill_triangle(leaf.a, leaf.b, leaf.c, colour);
    });

    buffer
}
