use crate::core::data::colour::Colour;

/// The fixed set of colour gradients shared by both renderers.
///
/// Every palette maps a scalar `t` in `[0, 1]` to a colour. Inputs slightly
/// outside that range are tolerated; the resulting channels are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    WarmGradient,
    BlueGreen,
    Magenta,
}

impl Palette {
    pub const ALL: &'static [Self] = &[Self::WarmGradient, Self::BlueGreen, Self::Magenta];
    pub const COUNT: usize = Self::ALL.len();

    /// Palette at `index`, wrapping around the palette count.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::WarmGradient => 0,
            Self::BlueGreen => 1,
            Self::Magenta => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WarmGradient => "Warm gradient",
            Self::BlueGreen => "Blue-green",
            Self::Magenta => "Magenta",
        }
    }

    #[must_use]
    pub fn evaluate(self, t: f64) -> Colour {
        let (r, g, b) = match self {
            Self::WarmGradient => (30.0 + 225.0 * t, 180.0 * (1.0 - t), 255.0 * t),
            Self::BlueGreen => (120.0 * (1.0 - t), 220.0 * t, 255.0 * (0.4 + 0.6 * t)),
            Self::Magenta => (255.0 * t, 120.0 * (1.0 - t), 200.0),
        };

        Colour::from_channels(r, g, b)
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
