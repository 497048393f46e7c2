use thiserror::Error;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Axis-aligned window onto the complex plane. `imag` grows downwards, in
/// step with screen rows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    width: f64,
    height: f64,
}

impl ComplexRect {
    /// Window of the given horizontal span centred on `centre`, with the
    /// vertical span scaled by `aspect_ratio` (height over width).
    pub fn from_centre(
        centre: Complex,
        width: f64,
        aspect_ratio: f64,
    ) -> Result<Self, ComplexRectError> {
        let height = width * aspect_ratio;
        let top_left = Complex {
            real: centre.real - width / 2.0,
            imag: centre.imag - height / 2.0,
        };

        Self::with_size(top_left, width, height)
    }

    fn with_size(top_left: Complex, width: f64, height: f64) -> Result<Self, ComplexRectError> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            width,
            height,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}
