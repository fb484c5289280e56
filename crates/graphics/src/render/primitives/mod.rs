//! Geometry primitives: topology and typed vertices

pub mod primitive_type;
pub mod vertex;

pub use primitive_type::PrimitiveType;
pub use vertex::{ColorVertex, PositionVertex, TexturedVertex, Vertex};
