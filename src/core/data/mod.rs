pub mod complex;
pub mod complex_rect;
pub mod escape_field;
pub mod fractal_summary;
pub mod pixel_rect;
pub mod point;
pub mod sample_grid;
pub mod vec2;
