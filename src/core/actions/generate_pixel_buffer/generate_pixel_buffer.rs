use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};

#[derive(Debug, PartialEq, Error)]
pub enum GeneratePixelBufferError {
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Generates an opaque RGBA pixel buffer by mapping row-major input values
/// to colours.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: &[T],
    mapper: &CMap,
    canvas: CanvasSize,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let Colour { r, g, b } = mapper.map(value);
        buffer.extend_from_slice(&[r, g, b, 255]);
    }

    Ok(PixelBuffer::from_data(canvas, buffer)?)
}
