pub mod aggregate;
pub mod gate;
pub mod geo;
pub mod report;
pub mod submit;
pub mod window;
pub mod zone;
