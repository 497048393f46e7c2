mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;

pub use controllers::cli::render::{CliRenderController, CliRenderError, RenderSettings, default_output_path};
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::errors::render::RenderError;
pub use controllers::interactive::hud::hud_lines;
pub use controllers::interactive::{
    DragState, ExplorerState, InputEvent, InteractiveController, InteractiveControllerPresenterPort,
    Redraw, RenderEvent, UiCommand, dispatch,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::canvas::{CanvasError, CanvasSize};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::{Point, ScreenPoint};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::mandelbrot::algorithm::{
    EscapeResult, MandelbrotAlgorithm, escape_time, smooth_iteration,
};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::render::render_mandelbrot;
pub use crate::core::fractals::mandelbrot::view::{
    ITERATION_DECAY, ITERATION_GROWTH, MAX_MAX_ITERATIONS, MIN_MAX_ITERATIONS, MandelbrotView,
    ZOOM_STEP, scale_max_iterations,
};
pub use crate::core::fractals::sierpinski::depth::SierpinskiDepth;
pub use crate::core::fractals::sierpinski::render::render_sierpinski;
pub use crate::core::fractals::sierpinski::subdivision::{Triangle, leaf_count, root_triangle, subdivide};
pub use crate::core::palette::Palette;
pub use logging::init_tracing;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
