//! Rendering module
//!
//! OpenGL mesh resources and the types that describe their contents.
//!
//! ## Organization
//!
//! - [`gl`]: context access, GL profile and the [`OpenGl`] wrapper
//! - [`vertex_format`]: per-attribute layout descriptions
//! - [`primitives`]: primitive topology and typed vertex structs
//! - [`mesh`]: the mesh resource and its registering factory

pub mod error;
pub mod gl;
pub mod mesh;
pub mod primitives;
pub mod vertex_format;

#[cfg(test)]
pub(crate) mod testing;

pub use error::MeshError;
pub use gl::{GlContext, GlProfile, OpenGl};
pub use mesh::{create_mesh, Mesh, MeshHandle};
pub use primitives::{ColorVertex, PositionVertex, PrimitiveType, TexturedVertex, Vertex};
pub use vertex_format::{vertex_stride, VertexFormat, VertexFormatList};
