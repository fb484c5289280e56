//! Render error types

use thiserror::Error;

use crate::render::VertexFormat;

/// Mesh resource errors
#[derive(Debug, Error)]
pub enum MeshError {
    /// The GL driver refused to create an object
    #[error("Failed to create {object}: {reason}")]
    ObjectCreation {
        /// Kind of GL object
        object: &'static str,
        /// Driver message
        reason: String,
    },

    /// A layout must describe at least one attribute
    #[error("Vertex layout is empty")]
    EmptyLayout,

    /// Attribute has no GL component type for the active profile
    #[error("Unsupported vertex attribute {index}: {format}")]
    UnsupportedAttribute {
        /// Attribute location
        index: usize,
        /// Offending description
        format: VertexFormat,
    },

    /// Fewer bytes supplied than the layout and vertex count require
    #[error("Vertex data too small: expected {expected} bytes, got {actual}")]
    DataSizeMismatch {
        /// `stride * vertex_count`
        expected: usize,
        /// Length of the supplied slice
        actual: usize,
    },

    /// Stride, vertex count or total size does not fit GL's integer arguments
    #[error("Vertex data too large: {vertex_count} vertices with a {stride}-byte stride")]
    SizeOverflow {
        /// Requested vertex count
        vertex_count: usize,
        /// Bytes per vertex
        stride: usize,
    },
}
