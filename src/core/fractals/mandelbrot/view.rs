use crate::core::data::canvas::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::point::ScreenPoint;
use crate::core::util::pixel_to_complex_coords::screen_to_complex_coords;

pub const DEFAULT_CENTRE: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_SCALE: f64 = 3.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 120;
pub const MIN_MAX_ITERATIONS: u32 = 60;
pub const MAX_MAX_ITERATIONS: u32 = 500;

/// Multiplicative change of the view span per wheel step.
pub const ZOOM_STEP: f64 = 1.15;
/// Iteration cap multiplier when zooming in.
pub const ITERATION_GROWTH: f64 = 1.02;
/// Iteration cap multiplier when zooming out.
pub const ITERATION_DECAY: f64 = 0.98;

/// Scales the iteration cap by `factor`, flooring and clamping the result to
/// `[MIN_MAX_ITERATIONS, MAX_MAX_ITERATIONS]`.
#[must_use]
pub fn scale_max_iterations(max_iterations: u32, factor: f64) -> u32 {
    let scaled = (f64::from(max_iterations) * factor)
        .clamp(f64::from(MIN_MAX_ITERATIONS), f64::from(MAX_MAX_ITERATIONS));

    scaled.floor() as u32
}

/// The window of the complex plane shown on the canvas.
///
/// `scale` is the horizontal span; the vertical span follows the canvas
/// aspect ratio so pixels stay square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotView {
    pub centre: Complex,
    pub scale: f64,
    pub max_iterations: u32,
}

impl Default for MandelbrotView {
    fn default() -> Self {
        Self {
            centre: DEFAULT_CENTRE,
            scale: DEFAULT_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MandelbrotView {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn complex_rect(&self, canvas: CanvasSize) -> Result<ComplexRect, ComplexRectError> {
        ComplexRect::from_centre(self.centre, self.scale, canvas.aspect_ratio())
    }

    /// Complex-plane point under a screen position.
    #[must_use]
    pub fn screen_to_complex(&self, position: ScreenPoint, canvas: CanvasSize) -> Complex {
        match self.complex_rect(canvas) {
            Ok(rect) => screen_to_complex_coords(position, canvas, rect),
            Err(_) => self.centre,
        }
    }

    /// Moves the view with a pointer drag of `(dx, dy)` screen pixels.
    ///
    /// Both axes are divided by the canvas width so a drag moves the plane
    /// by the same amount horizontally and vertically.
    pub fn pan(&mut self, dx: f64, dy: f64, canvas: CanvasSize) {
        let units_per_pixel = self.scale / f64::from(canvas.width());

        self.centre = self.centre - Complex::new(dx, dy).scale(units_per_pixel);
    }

    /// Zooms around `pointer`, keeping the complex point under it fixed.
    ///
    /// A positive `wheel_delta` zooms out; anything else zooms in. Steps that
    /// would collapse or overflow the span are ignored.
    pub fn zoom(&mut self, pointer: ScreenPoint, wheel_delta: f64, canvas: CanvasSize) {
        let zooming_out = wheel_delta > 0.0;
        let factor = if zooming_out { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        let scale = self.scale * factor;

        if !(scale > 0.0 && scale.is_finite()) {
            return;
        }

        let anchor = self.screen_to_complex(pointer, canvas);
        self.centre = anchor + (self.centre - anchor).scale(factor);
        self.scale = scale;
        self.max_iterations = scale_max_iterations(
            self.max_iterations,
            if zooming_out { ITERATION_DECAY } else { ITERATION_GROWTH },
        );
    }
}
