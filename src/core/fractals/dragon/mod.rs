pub mod curve;
pub mod errors;
pub mod params;
pub mod transform;
