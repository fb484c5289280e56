//! Primitive topology

use serde::{Deserialize, Serialize};

/// How consecutive vertices are assembled into primitives
///
/// The declaration order is stable and matches [`PrimitiveType::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Independent triangles, three vertices each
    #[default]
    TriangleList,
    /// Each vertex after the second forms a triangle with the previous two
    TriangleStrip,
    /// Each vertex after the second forms a triangle with the first and previous
    TriangleFan,
    /// Independent line segments, two vertices each
    LineList,
    /// Connected line segments
    LineStrip,
    /// One point per vertex
    PointList,
}

impl PrimitiveType {
    /// Every primitive type, in declaration order
    pub const ALL: [Self; 6] = [
        Self::TriangleList,
        Self::TriangleStrip,
        Self::TriangleFan,
        Self::LineList,
        Self::LineStrip,
        Self::PointList,
    ];

    /// GL draw mode passed to `glDrawArrays`
    pub const fn gl_mode(self) -> u32 {
        match self {
            Self::TriangleList => glow::TRIANGLES,
            Self::TriangleStrip => glow::TRIANGLE_STRIP,
            Self::TriangleFan => glow::TRIANGLE_FAN,
            Self::LineList => glow::LINES,
            Self::LineStrip => glow::LINE_STRIP,
            Self::PointList => glow::POINTS,
        }
    }
}
