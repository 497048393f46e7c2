#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    /// Builds a colour from unclamped channel values on a 0-255 scale,
    /// rounding to the nearest level.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }
}

// `f64 as u8` maps NaN to 0.
fn clamp_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels_rounds_in_range_values() {
        let colour = Colour::from_channels(30.9, 180.0, 0.4);

        assert_eq!(colour, Colour { r: 31, g: 180, b: 0 });
    }

    #[test]
    fn test_from_channels_clamps_out_of_range_values() {
        let colour = Colour::from_channels(-12.0, 300.0, 255.5);

        assert_eq!(colour, Colour { r: 0, g: 255, b: 255 });
    }

    #[test]
    fn test_from_channels_maps_nan_to_zero() {
        let colour = Colour::from_channels(f64::NAN, 10.0, 10.0);

        assert_eq!(colour.r, 0);
    }

    #[test]
    fn test_grey() {
        assert_eq!(Colour::grey(10), Colour { r: 10, g: 10, b: 10 });
    }
}
