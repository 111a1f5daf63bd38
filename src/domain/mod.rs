pub mod config;
pub mod errors;
pub mod geometry;
pub mod logging;
pub mod shaders;
