use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::state::ExplorerState;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::mandelbrot::view::{MandelbrotView, scale_max_iterations};
use crate::core::fractals::sierpinski::depth::SierpinskiDepth;
use crate::core::palette::Palette;

#[derive(Debug, Error)]
pub enum CliRenderError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Parameters for a single headless frame.
///
/// Out-of-range values go through the same clamping as interactive input.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub mode: FractalKinds,
    pub layout_width: u32,
    pub depth: i64,
    pub palette: usize,
    pub centre: Complex,
    pub scale: f64,
    pub max_iterations: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let view = MandelbrotView::default();

        Self {
            mode: FractalKinds::default(),
            layout_width: CanvasSize::DEFAULT.width(),
            depth: i64::from(SierpinskiDepth::DEFAULT.get()),
            palette: 0,
            centre: view.centre,
            scale: view.scale,
            max_iterations: view.max_iterations,
        }
    }
}

impl RenderSettings {
    #[must_use]
    pub fn explorer_state(&self) -> ExplorerState {
        ExplorerState {
            mode: self.mode,
            depth: SierpinskiDepth::new(self.depth),
            palette: Palette::from_index(self.palette),
            view: MandelbrotView {
                centre: self.centre,
                scale: self.scale,
                max_iterations: scale_max_iterations(self.max_iterations, 1.0),
            },
            canvas: CanvasSize::from_layout_width(self.layout_width),
            ..ExplorerState::default()
        }
    }
}

/// Default output path for a mode, e.g. `output/mandelbrot.ppm`.
#[must_use]
pub fn default_output_path(mode: FractalKinds) -> PathBuf {
    PathBuf::from("output").join(format!("{}.ppm", mode.display_name().to_lowercase()))
}

pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<FrameData>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameData> {
        self.frame.as_ref()
    }

    pub fn generate(&mut self, settings: &RenderSettings) -> Result<(), CliRenderError> {
        let state = settings.explorer_state();

        info!(
            mode = %state.mode,
            width = state.canvas.width(),
            height = state.canvas.height(),
            depth = %state.depth,
            palette = %state.palette,
            max_iterations = state.view.max_iterations,
            "rendering frame"
        );

        let frame = InteractiveController::new(state).render()?;
        info!(render_duration = ?frame.render_duration, "render complete");

        self.frame = Some(frame);
        Ok(())
    }

    /// Writes the last generated frame; a no-op before [`Self::generate`].
    pub fn write(&self, filepath: &Path) -> Result<(), CliRenderError> {
        let Some(frame) = &self.frame else {
            return Ok(());
        };

        self.presenter
            .present(&frame.pixel_buffer, filepath)
            .map_err(|source| CliRenderError::Write {
                path: filepath.to_path_buf(),
                source,
            })?;

        info!(path = %filepath.display(), "saved frame");
        Ok(())
    }
}
