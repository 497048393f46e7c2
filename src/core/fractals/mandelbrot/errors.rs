use thiserror::Error;

use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("invalid view window: {0}")]
    ViewWindow(#[from] ComplexRectError),
    #[error("pixel mapping failed: {0}")]
    PixelMapping(#[from] PixelToComplexCoordsError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}
