/// The renderer currently driving the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Sierpinski,
    Mandelbrot,
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sierpinski => "Sierpinski",
            Self::Mandelbrot => "Mandelbrot",
        }
    }

    /// Short description of the controls specific to this fractal.
    #[must_use]
    pub const fn control_hint(self) -> &'static str {
        match self {
            Self::Sierpinski => "W/S depth",
            Self::Mandelbrot => "wheel/drag",
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sierpinski() {
        assert_eq!(FractalKinds::default(), FractalKinds::Sierpinski);
    }

    #[test]
    fn display_matches_display_name() {
        for kind in [FractalKinds::Sierpinski, FractalKinds::Mandelbrot] {
            assert_eq!(kind.to_string(), kind.display_name());
        }
    }

    #[test]
    fn control_hints_name_each_mode_input() {
        assert_eq!(FractalKinds::Sierpinski.control_hint(), "W/S depth");
        assert_eq!(FractalKinds::Mandelbrot.control_hint(), "wheel/drag");
    }
}
