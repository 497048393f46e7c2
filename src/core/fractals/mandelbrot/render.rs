use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::canvas::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::view::MandelbrotView;
use crate::core::palette::Palette;

/// Renders the escape-time image of `view` across the whole canvas.
pub fn render_mandelbrot(
    canvas: CanvasSize,
    view: &MandelbrotView,
    palette: Palette,
) -> Result<PixelBuffer, MandelbrotError> {
    let algorithm = MandelbrotAlgorithm::new(canvas, view.complex_rect(canvas)?, view.max_iterations)?;
    let escapes = generate_fractal_parallel_rayon(&algorithm)?;
    let colour_map = MandelbrotColourMap::new(palette, algorithm.max_iterations());

    generate_pixel_buffer(&escapes, &colour_map, canvas).map_err(|e| match e {
        GeneratePixelBufferError::PixelBuffer(err) => MandelbrotError::PixelBuffer(err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;

    #[test]
    fn view_centre_on_origin_renders_black() {
        let canvas = CanvasSize::new(41, 21).unwrap();
        let view = MandelbrotView {
            centre: Complex::ZERO,
            ..MandelbrotView::default()
        };

        let buffer = render_mandelbrot(canvas, &view, Palette::WarmGradient).unwrap();

        // Pixel (20.5, 10.5) maps to the centre; pixel (20, 10) lies just up-left of it.
        assert_eq!(buffer.pixel(Point { x: 20, y: 10 }), Some([0, 0, 0, 255]));
    }

    #[test]
    fn far_corner_renders_through_palette() {
        let canvas = CanvasSize::new(40, 20).unwrap();
        let view = MandelbrotView {
            centre: Complex::new(2.0, 2.0),
            scale: 0.5,
            ..MandelbrotView::default()
        };

        let buffer = render_mandelbrot(canvas, &view, Palette::Magenta).unwrap();

        let corner = buffer.pixel(Point { x: 0, y: 0 }).unwrap();
        assert_ne!(corner, [0, 0, 0, 255]);
        assert_eq!(corner[2], 200);
        assert_eq!(corner[3], 255);
    }

    #[test]
    fn every_pixel_is_opaque() {
        let canvas = CanvasSize::new(30, 20).unwrap();

        let buffer = render_mandelbrot(canvas, &MandelbrotView::default(), Palette::BlueGreen).unwrap();

        assert!(buffer.buffer().chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn invalid_view_is_reported() {
        let canvas = CanvasSize::new(10, 10).unwrap();
        let view = MandelbrotView {
            scale: 0.0,
            ..MandelbrotView::default()
        };

        let result = render_mandelbrot(canvas, &view, Palette::WarmGradient);

        assert!(matches!(result, Err(MandelbrotError::ViewWindow(_))));
    }
}
