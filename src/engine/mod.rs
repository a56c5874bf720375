pub mod color;
pub mod cube;
pub mod surface;
