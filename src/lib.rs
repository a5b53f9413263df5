// Library exports for testing
pub mod config;
pub mod constants;
pub mod driver;
pub mod raster;
pub mod render;
