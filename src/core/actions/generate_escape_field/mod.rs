pub mod generate_escape_field;
pub mod ports;
