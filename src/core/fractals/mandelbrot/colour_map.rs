use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::{EscapeResult, smooth_iteration};
use crate::core::palette::Palette;

/// Colours interior points black and escaped points by their smoothed
/// iteration count, normalised against the iteration cap.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotColourMap {
    palette: Palette,
    max_iterations: u32,
}

impl MandelbrotColourMap {
    #[must_use]
    pub fn new(palette: Palette, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}

impl ColourMap<EscapeResult> for MandelbrotColourMap {
    fn map(&self, value: &EscapeResult) -> Colour {
        if !value.escaped {
            return Colour::BLACK;
        }

        let t = (smooth_iteration(value) / f64::from(self.max_iterations)).clamp(0.0, 1.0);
        self.palette.evaluate(t)
    }
}
