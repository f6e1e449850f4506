pub mod algorithm;
pub mod colour_schemes;
pub mod colourbar;
pub mod engine;
pub mod renderer;
