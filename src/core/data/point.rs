/// Integer pixel coordinate on the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Continuous screen-space coordinate, used for pointer positions and
/// triangle vertices.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let a = ScreenPoint::new(0.0, 10.0);
        let b = ScreenPoint::new(20.0, -10.0);

        assert_eq!(a.midpoint(b), ScreenPoint::new(10.0, 0.0));
    }

    #[test]
    fn test_midpoint_is_symmetric() {
        let a = ScreenPoint::new(3.0, 7.0);
        let b = ScreenPoint::new(-1.0, 2.5);

        assert_eq!(a.midpoint(b), b.midpoint(a));
    }
}
