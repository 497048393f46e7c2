use thiserror::Error;

use crate::core::data::canvas::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::{Point, ScreenPoint};

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} canvas",
        .point.x,
        .point.y,
        .canvas.width(),
        .canvas.height()
    )]
    PointOutsideCanvas { point: Point, canvas: CanvasSize },
}

/// Linear map from screen space onto the complex window: the canvas origin
/// lands on the window's top-left corner and `(width, height)` on its
/// bottom-right corner.
#[must_use]
pub fn screen_to_complex_coords(
    position: ScreenPoint,
    canvas: CanvasSize,
    complex_rect: ComplexRect,
) -> Complex {
    let real = complex_rect.top_left().real
        + (position.x / f64::from(canvas.width())) * complex_rect.width();
    let imag = complex_rect.top_left().imag
        + (position.y / f64::from(canvas.height())) * complex_rect.height();

    Complex { real, imag }
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    canvas: CanvasSize,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !canvas.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideCanvas {
            point: pixel_position,
            canvas,
        });
    }

    let position = ScreenPoint {
        x: f64::from(pixel_position.x),
        y: f64::from(pixel_position.y),
    };

    Ok(screen_to_complex_coords(position, canvas, complex_rect))
}
