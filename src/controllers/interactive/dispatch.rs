//! The dispatch table from input events to state transitions.
//!
//! Every transition is a plain function over [`ExplorerState`]. None of them
//! render; they only report whether the frame is now stale.

use tracing::debug;

use crate::controllers::interactive::events::input::{InputEvent, UiCommand};
use crate::controllers::interactive::state::ExplorerState;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::point::ScreenPoint;
use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Needed,
    Skip,
}

impl Redraw {
    #[must_use]
    pub fn is_needed(self) -> bool {
        self == Self::Needed
    }

    fn or(self, other: Self) -> Self {
        if self.is_needed() || other.is_needed() {
            Self::Needed
        } else {
            Self::Skip
        }
    }
}

pub fn dispatch(state: &mut ExplorerState, event: InputEvent) -> Redraw {
    let redraw = match event {
        InputEvent::Key(key) => key_pressed(state, key),
        InputEvent::PointerDown(position) => pointer_down(state, position),
        InputEvent::PointerMove(position) => pointer_moved(state, position),
        InputEvent::PointerUp => pointer_up(state),
        InputEvent::Wheel { delta, position } => wheel(state, delta, position),
        InputEvent::Command(command) => run_command(state, command),
        InputEvent::Resize { layout_width } => resize(state, layout_width),
    };

    debug!(?event, ?redraw, mode = %state.mode, "dispatched input");
    redraw
}

pub fn run_command(state: &mut ExplorerState, command: UiCommand) -> Redraw {
    match command {
        UiCommand::SelectSierpinski => select_mode(state, FractalKinds::Sierpinski),
        UiCommand::SelectMandelbrot => select_mode(state, FractalKinds::Mandelbrot),
        UiCommand::ResetView => reset_view(state),
        UiCommand::NextPalette => next_palette(state),
    }
}

pub fn select_mode(state: &mut ExplorerState, mode: FractalKinds) -> Redraw {
    state.mode = mode;
    state.drag.end();
    Redraw::Needed
}

pub fn next_palette(state: &mut ExplorerState) -> Redraw {
    state.palette = state.palette.next();
    Redraw::Needed
}

pub fn reset_view(state: &mut ExplorerState) -> Redraw {
    match state.mode {
        FractalKinds::Mandelbrot => state.view.reset(),
        FractalKinds::Sierpinski => state.depth = Default::default(),
    }
    Redraw::Needed
}

/// Mode keys are applied first, so `W`/`S` act on the mode they select.
fn key_pressed(state: &mut ExplorerState, key: char) -> Redraw {
    let key = key.to_ascii_lowercase();
    let mut redraw = Redraw::Skip;

    match key {
        '1' => redraw = redraw.or(select_mode(state, FractalKinds::Sierpinski)),
        '2' => redraw = redraw.or(select_mode(state, FractalKinds::Mandelbrot)),
        _ => {}
    }

    if state.mode == FractalKinds::Sierpinski {
        match key {
            'w' => {
                state.depth = state.depth.increment();
                redraw = Redraw::Needed;
            }
            's' => {
                state.depth = state.depth.decrement();
                redraw = Redraw::Needed;
            }
            _ => {}
        }
    }

    if key == 'r' {
        redraw = redraw.or(reset_view(state));
    }

    redraw
}

/// In Mandelbrot mode a press starts a drag; in Sierpinski mode it cycles
/// the palette.
fn pointer_down(state: &mut ExplorerState, position: ScreenPoint) -> Redraw {
    match state.mode {
        FractalKinds::Mandelbrot => {
            state.drag.begin(position);
            Redraw::Skip
        }
        FractalKinds::Sierpinski => next_palette(state),
    }
}

fn pointer_moved(state: &mut ExplorerState, position: ScreenPoint) -> Redraw {
    if state.mode != FractalKinds::Mandelbrot {
        return Redraw::Skip;
    }
    let Some(last) = state.drag.last_pointer else {
        return Redraw::Skip;
    };

    state.view.pan(position.x - last.x, position.y - last.y, state.canvas);
    state.drag.begin(position);
    Redraw::Needed
}

fn pointer_up(state: &mut ExplorerState) -> Redraw {
    state.drag.end();
    Redraw::Skip
}

fn wheel(state: &mut ExplorerState, delta: f64, position: ScreenPoint) -> Redraw {
    if state.mode != FractalKinds::Mandelbrot {
        return Redraw::Skip;
    }

    state.view.zoom(position, delta, state.canvas);
    Redraw::Needed
}

fn resize(state: &mut ExplorerState, layout_width: u32) -> Redraw {
    state.canvas = CanvasSize::from_layout_width(layout_width);
    Redraw::Needed
}
