pub mod chaos_game;
pub mod errors;
pub mod ifs;
pub mod triangle;

pub const DEFAULT_POINT_COUNT: usize = 50_000;
