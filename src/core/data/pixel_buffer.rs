use thiserror::Error;

use crate::core::data::canvas::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::point::{Point, ScreenPoint};

pub const BYTES_PER_PIXEL: usize = 4;

const OPAQUE: u8 = 255;

fn canvas_to_buffer_size(canvas: CanvasSize) -> usize {
    canvas.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("canvas size {canvas_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 framebuffer covering a whole canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    canvas: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            buffer: vec![0; canvas_to_buffer_size(canvas)],
        }
    }

    #[must_use]
    pub fn filled(canvas: CanvasSize, colour: Colour) -> Self {
        let mut buffer = Self::new(canvas);
        buffer.fill(colour);
        buffer
    }

    pub fn from_data(canvas: CanvasSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let canvas_size = canvas_to_buffer_size(canvas);

        if canvas_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; 4]> {
        if !self.canvas.contains_point(pixel) {
            return None;
        }

        let index = self.index_of(pixel.x as usize, pixel.y as usize);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            write_rgba(pixel, colour);
        }
    }

    /// Fills a triangle by scanline, covering every pixel whose centre lies
    /// inside it. Parts outside the canvas are clipped.
    pub fn fill_triangle(&mut self, a: ScreenPoint, b: ScreenPoint, c: ScreenPoint, colour: Colour) {
        let mut vertices = [a, b, c];
        if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return;
        }
        vertices.sort_by(|p, q| p.y.total_cmp(&q.y));
        let [top, middle, bottom] = vertices;

        if bottom.y <= top.y {
            return;
        }

        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let first_row = (top.y - 0.5).ceil().clamp(0.0, height) as usize;
        let end_row = (bottom.y - 0.5).ceil().clamp(0.0, height) as usize;

        for y in first_row..end_row {
            let centre_y = y as f64 + 0.5;
            let long_x = edge_x_at(top, bottom, centre_y);
            let short_x = if centre_y < middle.y {
                edge_x_at(top, middle, centre_y)
            } else {
                edge_x_at(middle, bottom, centre_y)
            };

            let (left, right) = if long_x <= short_x {
                (long_x, short_x)
            } else {
                (short_x, long_x)
            };
            let first_column = (left - 0.5).ceil().clamp(0.0, width) as usize;
            let end_column = (right - 0.5).ceil().clamp(0.0, width) as usize;

            if first_column >= end_column {
                continue;
            }

            let start = self.index_of(first_column, y);
            let end = self.index_of(end_column, y);
            for pixel in self.buffer[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                write_rgba(pixel, colour);
            }
        }
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        (y * self.canvas.width() as usize + x) * BYTES_PER_PIXEL
    }
}

fn edge_x_at(from: ScreenPoint, to: ScreenPoint, y: f64) -> f64 {
    from.x + (to.x - from.x) * (y - from.y) / (to.y - from.y)
}

fn write_rgba(pixel: &mut [u8], colour: Colour) {
    pixel[0] = colour.r;
    pixel[1] = colour.g;
    pixel[2] = colour.b;
    pixel[3] = OPAQUE;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_canvas(width: u32, height: u32) -> CanvasSize {
        CanvasSize::new(width, height).unwrap()
    }

    fn painted_pixels(buffer: &PixelBuffer, colour: Colour) -> usize {
        buffer
            .buffer()
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|p| p[0] == colour.r && p[1] == colour.g && p[2] == colour.b && p[3] == 255)
            .count()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(create_canvas(10, 10));

        assert_eq!(buffer.buffer().len(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_filled_is_opaque() {
        let buffer = PixelBuffer::filled(create_canvas(3, 2), Colour::grey(10));

        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), Some([10, 10, 10, 255]));
        assert_eq!(painted_pixels(&buffer, Colour::grey(10)), 6);
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 255, 0, 255, // (1,0) green
        ];

        let buffer = PixelBuffer::from_data(create_canvas(2, 1), data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = PixelBuffer::from_data(create_canvas(2, 2), vec![0; 12]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                canvas_size: 16,
                buffer_size: 12
            }
        );
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::new(create_canvas(3, 3));

        assert_eq!(buffer.pixel(Point { x: -1, y: 0 }), None);
    }

    #[test]
    fn test_fill_triangle_covers_half_of_square() {
        let mut buffer = PixelBuffer::new(create_canvas(10, 10));
        let white = Colour::grey(255);

        buffer.fill_triangle(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(10.0, 0.0),
            ScreenPoint::new(0.0, 10.0),
            white,
        );

        // Row y has centre y + 0.5 and spans x in [0, 9.5 - y), so 9 - y pixels.
        assert_eq!(painted_pixels(&buffer, white), 45);
        assert_eq!(buffer.pixel(Point { x: 0, y: 8 }), Some([255, 255, 255, 255]));
        assert_eq!(buffer.pixel(Point { x: 0, y: 9 }), Some([0, 0, 0, 0]));
        assert_eq!(buffer.pixel(Point { x: 9, y: 0 }), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_triangle_is_vertex_order_independent() {
        let a = ScreenPoint::new(5.0, 1.0);
        let b = ScreenPoint::new(1.0, 9.0);
        let c = ScreenPoint::new(9.0, 9.0);
        let colour = Colour { r: 1, g: 2, b: 3 };

        let mut first = PixelBuffer::new(create_canvas(10, 10));
        first.fill_triangle(a, b, c, colour);
        let mut second = PixelBuffer::new(create_canvas(10, 10));
        second.fill_triangle(c, a, b, colour);

        assert_eq!(first, second);
        assert!(painted_pixels(&first, colour) > 0);
    }

    #[test]
    fn test_fill_triangle_clips_to_canvas() {
        let mut buffer = PixelBuffer::new(create_canvas(4, 4));
        let colour = Colour::grey(200);

        buffer.fill_triangle(
            ScreenPoint::new(-100.0, -100.0),
            ScreenPoint::new(100.0, -100.0),
            ScreenPoint::new(0.0, 100.0),
            colour,
        );

        assert_eq!(painted_pixels(&buffer, colour), 16);
    }

    #[test]
    fn test_fill_triangle_ignores_degenerate_input() {
        let mut buffer = PixelBuffer::new(create_canvas(4, 4));

        buffer.fill_triangle(
            ScreenPoint::new(0.0, 2.0),
            ScreenPoint::new(4.0, 2.0),
            ScreenPoint::new(2.0, 2.0),
            Colour::grey(200),
        );
        buffer.fill_triangle(
            ScreenPoint::new(f64::NAN, 0.0),
            ScreenPoint::new(4.0, 4.0),
            ScreenPoint::new(0.0, 4.0),
            Colour::grey(200),
        );

        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }
}
