pub mod mesh;
pub mod sampler;
pub mod shape;

pub use mesh::WireframeMesh;
pub use sampler::sample_surface;
pub use shape::{ShapeError, ShapeParams};
