//! Typed vertex structures
//!
//! A [`Vertex`] is a plain-old-data struct that knows its own attribute
//! layout, so a slice of them can be uploaded without spelling out a
//! [`VertexFormatList`] at every call site.

use bytemuck::{Pod, Zeroable};

use crate::render::{VertexFormat, VertexFormatList};

/// Plain vertex type with a fixed attribute layout
///
/// The layout must describe the struct's fields in declaration order and
/// its stride must equal `size_of::<Self>()`.
pub trait Vertex: Pod {
    /// Attribute layout, one entry per field
    fn layout() -> VertexFormatList;
}

/// Position only
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    /// Position in 3D space
    pub position: [f32; 3],
}

impl PositionVertex {
    /// Create a new vertex
    pub const fn new(position: [f32; 3]) -> Self {
        Self { position }
    }
}

impl Vertex for PositionVertex {
    fn layout() -> VertexFormatList {
        vec![VertexFormat::float(3)]
    }
}

/// Position with an 8-bit RGBA color
///
/// Colors are normalized to `0.0..=1.0` by the attribute setup.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in 3D space
    pub position: [f32; 3],
    /// RGBA color
    pub color: [u8; 4],
}

impl ColorVertex {
    /// Create a new vertex
    pub const fn new(position: [f32; 3], color: [u8; 4]) -> Self {
        Self { position, color }
    }
}

impl Vertex for ColorVertex {
    fn layout() -> VertexFormatList {
        vec![VertexFormat::float(3), VertexFormat::unsigned_byte(4)]
    }
}

/// Position with texture coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    /// Position in 3D space
    pub position: [f32; 3],
    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl TexturedVertex {
    /// Create a new vertex
    pub const fn new(position: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self { position, tex_coord }
    }
}

impl Vertex for TexturedVertex {
    fn layout() -> VertexFormatList {
        vec![VertexFormat::float(3), VertexFormat::float(2)]
    }
}
