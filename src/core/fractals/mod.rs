pub mod fractal_kinds;
pub mod mandelbrot;
pub mod sierpinski;
