use thiserror::Error;

use crate::core::data::point::Point;

const MIN_HEIGHT: u32 = 420;
const HEIGHT_RATIO: f64 = 0.62;
const FALLBACK_LAYOUT_WIDTH: u32 = 900;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("canvas size must be positive: {width}x{height}")]
    ZeroSized { width: u32, height: u32 },
}

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    pub const DEFAULT: Self = Self {
        width: 900,
        height: 560,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroSized { width, height });
        }

        Ok(Self { width, height })
    }

    /// Derives the canvas from the width of the containing layout.
    ///
    /// The height follows the layout policy `max(420, round(width * 0.62))`.
    #[must_use]
    pub fn from_layout_width(layout_width: u32) -> Self {
        let width = if layout_width == 0 {
            FALLBACK_LAYOUT_WIDTH
        } else {
            layout_width
        };
        let height = ((f64::from(width) * HEIGHT_RATIO).round() as u32).max(MIN_HEIGHT);

        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Height over width; scales the horizontal view span to the vertical one.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let canvas = CanvasSize::new(320, 200).unwrap();

        assert_eq!(canvas.width(), 320);
        assert_eq!(canvas.height(), 200);
        assert_eq!(canvas.pixel_count(), 64_000);
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            CanvasSize::new(0, 10),
            Err(CanvasError::ZeroSized { width: 0, height: 10 })
        );
        assert_eq!(
            CanvasSize::new(10, 0),
            Err(CanvasError::ZeroSized { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_layout_width_uses_ratio_above_minimum() {
        let canvas = CanvasSize::from_layout_width(1000);

        assert_eq!(canvas.width(), 1000);
        assert_eq!(canvas.height(), 620);
    }

    #[test]
    fn test_layout_width_rounds_height() {
        // 900 * 0.62 = 558
        assert_eq!(CanvasSize::from_layout_width(900).height(), 558);
        // 901 * 0.62 = 558.62
        assert_eq!(CanvasSize::from_layout_width(901).height(), 559);
    }

    #[test]
    fn test_layout_width_enforces_minimum_height() {
        let canvas = CanvasSize::from_layout_width(400);

        assert_eq!(canvas.width(), 400);
        assert_eq!(canvas.height(), 420);
    }

    #[test]
    fn test_zero_layout_width_falls_back() {
        let canvas = CanvasSize::from_layout_width(0);

        assert_eq!(canvas.width(), 900);
        assert_eq!(canvas.height(), 558);
    }

    #[test]
    fn test_aspect_ratio() {
        let canvas = CanvasSize::new(200, 100).unwrap();

        assert_eq!(canvas.aspect_ratio(), 0.5);
    }

    #[test]
    fn test_contains_point() {
        let canvas = CanvasSize::new(10, 5).unwrap();

        assert!(canvas.contains_point(Point { x: 0, y: 0 }));
        assert!(canvas.contains_point(Point { x: 9, y: 4 }));
        assert!(!canvas.contains_point(Point { x: 10, y: 4 }));
        assert!(!canvas.contains_point(Point { x: 9, y: 5 }));
        assert!(!canvas.contains_point(Point { x: -1, y: 0 }));
    }
}
