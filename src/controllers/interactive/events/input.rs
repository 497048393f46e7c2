use crate::core::data::point::ScreenPoint;

/// Parameterless actions bound to on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    SelectSierpinski,
    SelectMandelbrot,
    ResetView,
    NextPalette,
}

impl UiCommand {
    pub const ALL: &'static [Self] = &[
        Self::SelectSierpinski,
        Self::SelectMandelbrot,
        Self::ResetView,
        Self::NextPalette,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SelectSierpinski => "Sierpinski",
            Self::SelectMandelbrot => "Mandelbrot",
            Self::ResetView => "Reset",
            Self::NextPalette => "Next palette",
        }
    }
}

/// Input reaching the dispatch table, already translated to canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key press carrying the character it produced.
    Key(char),
    /// Primary pointer pressed.
    PointerDown(ScreenPoint),
    PointerMove(ScreenPoint),
    PointerUp,
    /// Scroll step; a positive `delta` is the zoom-out direction.
    Wheel { delta: f64, position: ScreenPoint },
    Command(UiCommand),
    /// The containing layout changed width.
    Resize { layout_width: u32 },
}
