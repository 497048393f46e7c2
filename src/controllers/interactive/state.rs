use crate::core::data::canvas::CanvasSize;
use crate::core::data::point::ScreenPoint;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::mandelbrot::view::MandelbrotView;
use crate::core::fractals::sierpinski::depth::SierpinskiDepth;
use crate::core::palette::Palette;

/// A pointer drag in progress over the Mandelbrot view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub last_pointer: Option<ScreenPoint>,
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_pointer.is_some()
    }

    pub fn begin(&mut self, pointer: ScreenPoint) {
        self.last_pointer = Some(pointer);
    }

    pub fn end(&mut self) {
        self.last_pointer = None;
    }
}

/// Everything the renderers and the HUD read. Mutated only by the
/// dispatch table in response to input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerState {
    pub mode: FractalKinds,
    pub depth: SierpinskiDepth,
    pub palette: Palette,
    pub view: MandelbrotView,
    pub drag: DragState,
    pub canvas: CanvasSize,
}

impl ExplorerState {
    #[must_use]
    pub fn with_canvas(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_in_sierpinski() {
        let state = ExplorerState::default();

        assert_eq!(state.mode, FractalKinds::Sierpinski);
        assert_eq!(state.depth.get(), 5);
        assert_eq!(state.palette.index(), 0);
        assert_eq!(state.view, MandelbrotView::default());
        assert!(!state.drag.is_dragging());
        assert_eq!(state.canvas, CanvasSize::DEFAULT);
    }

    #[test]
    fn drag_begin_and_end() {
        let mut drag = DragState::default();

        drag.begin(ScreenPoint::new(3.0, 4.0));
        assert!(drag.is_dragging());
        assert_eq!(drag.last_pointer, Some(ScreenPoint::new(3.0, 4.0)));

        drag.end();
        assert!(!drag.is_dragging());
    }
}
