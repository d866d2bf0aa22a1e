pub mod dragon;
pub mod julia;
pub mod mandelbrot;
