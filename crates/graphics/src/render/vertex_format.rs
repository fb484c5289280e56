//! Vertex layout description
//!
//! A mesh's vertex data is one interleaved array. Its layout is a list of
//! [`VertexFormat`] entries, one per shader attribute, in attribute-location
//! order. Attribute `i` starts at the sum of the sizes of attributes `0..i`,
//! and the stride is the sum of all sizes.

use std::fmt;

use crate::render::GlProfile;

/// Ordered attribute layout of one vertex
pub type VertexFormatList = Vec<VertexFormat>;

/// One vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexFormat {
    /// Number of components (1 to 4)
    pub components: u32,
    /// Size of a single component in bytes
    pub component_size: u32,
    /// Floating point components
    pub is_float: bool,
    /// Signed integer components (ignored for floats)
    pub is_signed: bool,
}

impl VertexFormat {
    /// Create an attribute description
    pub const fn new(components: u32, component_size: u32, is_float: bool, is_signed: bool) -> Self {
        Self {
            components,
            component_size,
            is_float,
            is_signed,
        }
    }

    /// `components` x f32
    pub const fn float(components: u32) -> Self {
        Self::new(components, 4, true, true)
    }

    /// `components` x f64
    pub const fn double(components: u32) -> Self {
        Self::new(components, 8, true, true)
    }

    /// `components` x u8
    pub const fn unsigned_byte(components: u32) -> Self {
        Self::new(components, 1, false, false)
    }

    /// `components` x i8
    pub const fn signed_byte(components: u32) -> Self {
        Self::new(components, 1, false, true)
    }

    /// `components` x u16
    pub const fn unsigned_short(components: u32) -> Self {
        Self::new(components, 2, false, false)
    }

    /// `components` x i16
    pub const fn signed_short(components: u32) -> Self {
        Self::new(components, 2, false, true)
    }

    /// `components` x u32
    pub const fn unsigned_int(components: u32) -> Self {
        Self::new(components, 4, false, false)
    }

    /// `components` x i32
    pub const fn signed_int(components: u32) -> Self {
        Self::new(components, 4, false, true)
    }

    /// Bytes this attribute occupies within a vertex
    pub const fn size_in_bytes(&self) -> usize {
        self.components as usize * self.component_size as usize
    }

    /// GL component type for `glVertexAttribPointer`
    ///
    /// Returns `None` when the combination has no GL equivalent. GLES has no
    /// double attributes, so the embedded profile only accepts 4-byte floats.
    pub const fn gl_type(&self, profile: GlProfile) -> Option<u32> {
        if self.components == 0 || self.components > 4 {
            return None;
        }

        if self.is_float {
            return match (self.component_size, profile) {
                (4, _) => Some(glow::FLOAT),
                (8, GlProfile::Desktop) => Some(glow::DOUBLE),
                _ => None,
            };
        }

        match (self.component_size, self.is_signed) {
            (4, true) => Some(glow::INT),
            (4, false) => Some(glow::UNSIGNED_INT),
            (2, true) => Some(glow::SHORT),
            (2, false) => Some(glow::UNSIGNED_SHORT),
            (1, true) => Some(glow::BYTE),
            (1, false) => Some(glow::UNSIGNED_BYTE),
            _ => None,
        }
    }
}

impl fmt::Display for VertexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_float {
            'f'
        } else if self.is_signed {
            'i'
        } else {
            'u'
        };
        write!(f, "{} x {}{}", self.components, prefix, self.component_size * 8)
    }
}

/// Bytes between the starts of consecutive vertices
pub fn vertex_stride(layout: &[VertexFormat]) -> usize {
    layout.iter().map(VertexFormat::size_in_bytes).sum()
}
