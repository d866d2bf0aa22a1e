pub mod generate_escape_field;
pub mod generate_fractal;
