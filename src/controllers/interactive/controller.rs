use std::time::Instant;

use tracing::debug;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::dispatch::{Redraw, dispatch};
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::hud::hud_lines;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::interactive::state::ExplorerState;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::mandelbrot::render::render_mandelbrot;
use crate::core::fractals::sierpinski::render::render_sierpinski;

/// Owns the explorer state and turns it into frames on demand.
///
/// Rendering happens on the calling thread; the Mandelbrot pass fans rows
/// out over rayon and joins before the frame is returned.
#[derive(Debug, Default)]
pub struct InteractiveController {
    state: ExplorerState,
    generation: u64,
}

impl InteractiveController {
    #[must_use]
    pub fn new(state: ExplorerState) -> Self {
        Self {
            state,
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    /// Generation of the most recent render, or 0 before the first one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn hud_lines(&self) -> [String; 3] {
        hud_lines(&self.state)
    }

    pub fn handle(&mut self, event: InputEvent) -> Redraw {
        dispatch(&mut self.state, event)
    }

    pub fn render(&mut self) -> Result<FrameData, RenderError> {
        self.generation += 1;
        let generation = self.generation;

        let start = Instant::now();
        let pixel_buffer = self.render_pixel_buffer(generation)?;
        let render_duration = start.elapsed();

        debug!(
            generation,
            mode = %self.state.mode,
            width = self.state.canvas.width(),
            height = self.state.canvas.height(),
            ?render_duration,
            "rendered frame"
        );

        Ok(FrameData {
            generation,
            pixel_buffer,
            render_duration,
        })
    }

    /// Renders the current state and hands the outcome to `presenter`.
    pub fn redraw_into<P: InteractiveControllerPresenterPort + ?Sized>(&mut self, presenter: &mut P) {
        let event = match self.render() {
            Ok(frame) => RenderEvent::Frame(frame),
            Err(error) => RenderEvent::Error(error),
        };

        presenter.present(event);
    }

    /// Applies `event` and redraws only when the state asks for it.
    pub fn handle_and_redraw<P: InteractiveControllerPresenterPort + ?Sized>(
        &mut self,
        event: InputEvent,
        presenter: &mut P,
    ) -> Redraw {
        let redraw = self.handle(event);
        if redraw.is_needed() {
            self.redraw_into(presenter);
        }
        redraw
    }

    fn render_pixel_buffer(&self, generation: u64) -> Result<PixelBuffer, RenderError> {
        let state = &self.state;

        match state.mode {
            FractalKinds::Sierpinski => Ok(render_sierpinski(state.canvas, state.depth, state.palette)),
            FractalKinds::Mandelbrot => render_mandelbrot(state.canvas, &state.view, state.palette)
                .map_err(|source| RenderError::Mandelbrot { generation, source }),
        }
    }
}
