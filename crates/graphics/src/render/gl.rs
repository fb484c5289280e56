//! OpenGL context access
//!
//! [`GlContext`] is the exact set of GL entry points mesh resources use.
//! It is implemented for [`glow::Context`]; the only other implementation is
//! the call recorder used by the unit tests.
//!
//! # Thread affinity
//! A GL context is current on one thread at a time. [`OpenGl`] shares its
//! context through `Rc`, so neither it nor the meshes it creates can leave
//! the thread that made the context current.

use std::fmt;
use std::rc::Rc;

use glow::HasContext;
use serde::{Deserialize, Serialize};

use crate::core::config::GraphicsConfig;
use crate::render::PrimitiveType;

/// GL flavour the context was created for
///
/// The embedded profile covers OpenGL ES 2/3 (Android, other GLES targets).
/// It changes how float attributes resolve and makes draw calls leave no
/// vertex array bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GlProfile {
    /// Desktop OpenGL 3.0+
    #[default]
    Desktop,
    /// OpenGL ES
    Embedded,
}

impl GlProfile {
    /// Whether this is the embedded (GLES) profile
    pub const fn is_embedded(self) -> bool {
        matches!(self, Self::Embedded)
    }
}

/// GL entry points required by mesh resources
///
/// Implementations must forward each call to a context that is current on
/// the calling thread.
pub trait GlContext {
    /// Buffer object name
    type Buffer: Copy + fmt::Debug + PartialEq;
    /// Vertex array object name
    type VertexArray: Copy + fmt::Debug + PartialEq;

    /// `glGenBuffers(1, ..)`
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    /// `glDeleteBuffers(1, ..)`
    fn delete_buffer(&self, buffer: Self::Buffer);
    /// `glGenVertexArrays(1, ..)` (`glGenVertexArraysOES` on GLES 2)
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    /// `glDeleteVertexArrays(1, ..)`
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    /// `glBindBuffer`; `None` unbinds
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    /// `glBindVertexArray`; `None` unbinds
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    /// `glVertexAttribPointer`
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    /// `glEnableVertexAttribArray`
    fn enable_vertex_attrib_array(&self, index: u32);
    /// `glBufferData`
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);
    /// `glDrawArrays`
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
}

// SAFETY (all blocks below): `OpenGl` only hands out contexts that were made
// current by the caller who constructed it, and `Rc` keeps them on that thread.
// Object names passed back in always come from this same context.
impl GlContext for glow::Context {
    type Buffer = <Self as HasContext>::Buffer;
    type VertexArray = <Self as HasContext>::VertexArray;

    fn create_buffer(&self) -> Result<<Self as HasContext>::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn delete_buffer(&self, buffer: <Self as HasContext>::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn create_vertex_array(&self) -> Result<<Self as HasContext>::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn delete_vertex_array(&self, vertex_array: <Self as HasContext>::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<<Self as HasContext>::Buffer>) {
        unsafe { HasContext::bind_buffer(self, target, buffer) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<<Self as HasContext>::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(self, index, size, data_type, normalized, stride, offset);
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { HasContext::buffer_data_u8_slice(self, target, data, usage) }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, mode, first, count) }
    }
}

/// Shared GL context plus the settings meshes are created with
///
/// Cloning is cheap; clones share the same context.
pub struct OpenGl<C: GlContext> {
    context: Rc<C>,
    profile: GlProfile,
    dynamic_meshes: bool,
    default_primitive: PrimitiveType,
}

impl<C: GlContext> OpenGl<C> {
    /// Wrap a context that is current on this thread
    pub fn new(context: Rc<C>, config: &GraphicsConfig) -> Self {
        log::info!(
            "OpenGL wrapper created (profile: {:?}, dynamic meshes: {}, default primitive: {:?})",
            config.profile,
            config.dynamic_meshes,
            config.default_primitive
        );
        Self {
            context,
            profile: config.profile,
            dynamic_meshes: config.dynamic_meshes,
            default_primitive: config.default_primitive,
        }
    }

    /// The underlying context
    pub const fn context(&self) -> &Rc<C> {
        &self.context
    }

    /// Active GL profile
    pub const fn profile(&self) -> GlProfile {
        self.profile
    }

    /// Mutability new meshes start with
    pub const fn dynamic_meshes(&self) -> bool {
        self.dynamic_meshes
    }

    /// Topology new meshes start with
    pub const fn default_primitive(&self) -> PrimitiveType {
        self.default_primitive
    }
}

impl OpenGl<glow::Context> {
    /// Load GL function pointers and wrap the resulting context
    ///
    /// # Safety
    /// The context the loader resolves against must be current on the
    /// calling thread and must outlive every mesh created from the result.
    pub unsafe fn from_loader_function<F>(loader: F, config: &GraphicsConfig) -> Self
    where
        F: FnMut(&str) -> *const std::os::raw::c_void,
    {
        let context = glow::Context::from_loader_function(loader);
        Self::new(Rc::new(context), config)
    }
}

impl<C: GlContext> Clone for OpenGl<C> {
    fn clone(&self) -> Self {
        Self {
            context: Rc::clone(&self.context),
            profile: self.profile,
            dynamic_meshes: self.dynamic_meshes,
            default_primitive: self.default_primitive,
        }
    }
}

impl<C: GlContext> fmt::Debug for OpenGl<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenGl")
            .field("profile", &self.profile)
            .field("dynamic_meshes", &self.dynamic_meshes)
            .field("default_primitive", &self.default_primitive)
            .finish_non_exhaustive()
    }
}
