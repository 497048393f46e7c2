use std::f64::consts::LN_2;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, pixel_to_complex_coords};

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating `z <- z² + c` from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub escaped: bool,
    /// Iterations completed before the orbit escaped, or the cap if it never did.
    pub iterations: u32,
    /// `|z|²` of the last computed orbit point.
    pub magnitude_squared: f64,
}

#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeResult {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < max_iterations {
        z = z * z + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return EscapeResult {
                escaped: true,
                iterations,
                magnitude_squared: z.magnitude_squared(),
            };
        }
        iterations += 1;
    }

    EscapeResult {
        escaped: false,
        iterations,
        magnitude_squared: z.magnitude_squared(),
    }
}

/// Continuous iteration count `n - log2(ln |z|²)`.
///
/// Falls back to the raw count whenever the double logarithm is undefined or
/// the result is not finite.
#[must_use]
pub fn smooth_iteration(result: &EscapeResult) -> f64 {
    let raw = f64::from(result.iterations);
    let log_magnitude = result.magnitude_squared.ln();

    if !(log_magnitude > 0.0 && log_magnitude.is_finite()) {
        return raw;
    }

    let smooth = raw - log_magnitude.ln() / LN_2;
    if smooth.is_finite() { smooth } else { raw }
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    canvas: CanvasSize,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(
        canvas: CanvasSize,
        complex_rect: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            canvas,
            complex_rect,
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.canvas, self.complex_rect)?;

        Ok(escape_time(c, self.max_iterations))
    }
}
