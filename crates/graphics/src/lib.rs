//! # Graphics
//!
//! OpenGL mesh resources managed through a handle-based resource registry.
//!
//! ## Features
//!
//! - **Mesh Resources**: Vertex buffer + vertex array object lifecycle
//! - **Flexible Layouts**: Interleaved vertex data described per attribute
//! - **Resource Management**: Generational handles with reference counting
//! - **Desktop and Embedded**: OpenGL and OpenGL ES draw paths
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use graphics::prelude::*;
//!
//! fn upload(context: glow::Context) -> Result<(), Box<dyn std::error::Error>> {
//!     let gl = OpenGl::new(Rc::new(context), &GraphicsConfig::default());
//!     let mut managers = ResourceManagers::new();
//!
//!     let handle = create_mesh(&gl, &mut managers)?;
//!     let vertices = [
//!         PositionVertex::new([-0.5, -0.5, 0.0]),
//!         PositionVertex::new([0.5, -0.5, 0.0]),
//!         PositionVertex::new([0.0, 0.5, 0.0]),
//!     ];
//!
//!     if let Some(mesh) = managers.meshes.get_mut(handle) {
//!         mesh.set_primitive_type(PrimitiveType::TriangleList);
//!         mesh.set_vertices(&vertices)?;
//!         mesh.draw();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod assets;
pub mod render;

/// Common imports for graphics users
pub mod prelude {
    pub use crate::{
        assets::{ResourceError, ResourceManager, ResourceManagers},
        core::config::GraphicsConfig,
        foundation::collections::Handle,
        render::{
            create_mesh, ColorVertex, GlContext, GlProfile, Mesh, MeshError, MeshHandle, OpenGl,
            PositionVertex, PrimitiveType, TexturedVertex, Vertex, VertexFormat,
            VertexFormatList,
        },
    };
}
