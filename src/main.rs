use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fractal_canvas::{
    CliRenderController, Complex, FractalKinds, MandelbrotView, PpmFilePresenter, RenderSettings,
    SierpinskiDepth, default_output_path, init_tracing,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Sierpinski,
    Mandelbrot,
}

impl From<ModeArg> for FractalKinds {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sierpinski => Self::Sierpinski,
            ModeArg::Mandelbrot => Self::Mandelbrot,
        }
    }
}

/// Render one Sierpinski or Mandelbrot frame to a PPM file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = ModeArg::Sierpinski)]
    mode: ModeArg,

    /// Layout width in pixels; the height follows max(420, round(width * 0.62)).
    #[arg(long, default_value_t = 900)]
    width: u32,

    /// Sierpinski depth, clamped to 0..=9.
    #[arg(long, default_value_t = i64::from(SierpinskiDepth::DEFAULT.get()), allow_negative_numbers = true)]
    depth: i64,

    /// Palette index, taken modulo the palette count.
    #[arg(long, default_value_t = 0)]
    palette: usize,

    #[arg(long, default_value_t = MandelbrotView::default().centre.real, allow_negative_numbers = true)]
    center_x: f64,

    #[arg(long, default_value_t = MandelbrotView::default().centre.imag, allow_negative_numbers = true)]
    center_y: f64,

    /// Horizontal span of the Mandelbrot view in plane units.
    #[arg(long, default_value_t = MandelbrotView::default().scale)]
    scale: f64,

    /// Iteration cap, clamped to 60..=500.
    #[arg(long, default_value_t = MandelbrotView::default().max_iterations)]
    max_iterations: u32,

    /// Output file; defaults to output/<mode>.ppm.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> RenderSettings {
        RenderSettings {
            mode: self.mode.into(),
            layout_width: self.width,
            depth: self.depth,
            palette: self.palette,
            centre: Complex::new(self.center_x, self.center_y),
            scale: self.scale,
            max_iterations: self.max_iterations,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();
    let settings = args.settings();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(settings.mode));

    let mut controller = CliRenderController::new(PpmFilePresenter::new());
    controller.generate(&settings)?;
    controller.write(&output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_state() {
        let args = Args::parse_from(["fractal_canvas"]);

        assert_eq!(args.settings(), RenderSettings::default());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_parses_mandelbrot_view() {
        let args = Args::parse_from([
            "fractal_canvas",
            "--mode",
            "mandelbrot",
            "--center-x",
            "-0.75",
            "--center-y",
            "0.1",
            "--scale",
            "0.5",
            "--max-iterations",
            "300",
            "--output",
            "frames/deep.ppm",
        ]);
        let settings = args.settings();

        assert_eq!(settings.mode, FractalKinds::Mandelbrot);
        assert_eq!(settings.centre, Complex::new(-0.75, 0.1));
        assert_eq!(settings.scale, 0.5);
        assert_eq!(settings.max_iterations, 300);
        assert_eq!(args.output, Some(PathBuf::from("frames/deep.ppm")));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Args::try_parse_from(["fractal_canvas", "--mode", "julia"]).is_err());
    }
}
