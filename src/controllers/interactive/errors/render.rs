use thiserror::Error;

use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// A render that produced no frame.
#[derive(Debug, PartialEq, Error)]
pub enum RenderError {
    #[error("mandelbrot render failed for generation {generation}: {source}")]
    Mandelbrot {
        generation: u64,
        source: MandelbrotError,
    },
}

impl RenderError {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Mandelbrot { generation, .. } => *generation,
        }
    }
}
