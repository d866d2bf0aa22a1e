pub mod algorithm;
pub mod errors;
pub mod params;
pub mod view;
