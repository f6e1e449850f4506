pub mod escape_time_colour_map;
pub mod factory;
pub mod gradient;
pub mod kinds;
pub mod tables;
