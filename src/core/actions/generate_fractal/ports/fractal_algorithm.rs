use std::error::Error;

use crate::core::data::canvas::CanvasSize;
use crate::core::data::point::Point;

/// Per-pixel computation over a canvas. Implementations must be pure in
/// `pixel` so pixels can be evaluated in any order, on any thread.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn canvas(&self) -> CanvasSize;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
