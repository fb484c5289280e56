//! Mesh GPU resource
//!
//! A [`Mesh`] owns exactly one vertex buffer and one vertex array object.
//! Vertex data is uploaded as a single interleaved array whose layout is
//! given per upload, and the whole array is drawn with one `glDrawArrays`
//! call using the mesh's primitive type.
//!
//! # Lifecycle
//! 1. [`Mesh::create`] generates the buffer and vertex array. If either
//!    cannot be created nothing is leaked and an error is returned.
//! 2. [`Mesh::set_data`] (or [`Mesh::set_vertices`]) configures the attribute
//!    layout inside the vertex array and uploads the data.
//! 3. [`Mesh::draw`] / [`Mesh::redraw`] submit draw calls.
//! 4. Dropping the mesh deletes both GL objects.
//!
//! # Desktop vs embedded draw paths
//! On desktop GL, `draw` binds the vertex array and leaves it bound so that
//! `redraw` can issue another draw without rebinding. On GLES, both calls
//! bind, draw and unbind.

use std::fmt;
use std::rc::Rc;

use crate::foundation::collections::Handle;
use crate::assets::ResourceManagers;
use crate::render::vertex_format::vertex_stride;
use crate::render::{GlContext, GlProfile, MeshError, OpenGl, PrimitiveType, Vertex, VertexFormat};

/// Handle to a mesh registered in a [`ResourceManager`](crate::assets::ResourceManager)
pub type MeshHandle<C> = Handle<Mesh<C>>;

/// Vertex buffer + vertex array object drawn with a fixed topology
pub struct Mesh<C: GlContext> {
    gl: Rc<C>,
    profile: GlProfile,
    buffer: C::Buffer,
    vertex_array: C::VertexArray,
    primitive_type: PrimitiveType,
    gl_mode: u32,
    vertex_count: usize,
    draw_count: i32,
    dynamic: bool,
}

impl<C: GlContext> Mesh<C> {
    /// Generate the buffer and vertex array for a new, empty mesh
    ///
    /// The mesh starts with zero vertices, the context's default primitive
    /// type and default mutability.
    pub fn create(gl: &OpenGl<C>) -> Result<Self, MeshError> {
        let context = gl.context();

        let buffer = context.create_buffer().map_err(|reason| MeshError::ObjectCreation {
            object: "vertex buffer",
            reason,
        })?;

        let vertex_array = match context.create_vertex_array() {
            Ok(vertex_array) => vertex_array,
            Err(reason) => {
                context.delete_buffer(buffer);
                return Err(MeshError::ObjectCreation {
                    object: "vertex array",
                    reason,
                });
            }
        };

        let primitive_type = gl.default_primitive();
        log::debug!(
            "Created mesh (buffer: {:?}, vertex array: {:?}, primitive: {:?})",
            buffer,
            vertex_array,
            primitive_type
        );

        Ok(Self {
            gl: Rc::clone(context),
            profile: gl.profile(),
            buffer,
            vertex_array,
            primitive_type,
            gl_mode: primitive_type.gl_mode(),
            vertex_count: 0,
            draw_count: 0,
            dynamic: gl.dynamic_meshes(),
        })
    }

    /// Upload interleaved vertex data described by `layout`
    ///
    /// Attribute `i` of the layout is bound to attribute location `i`.
    /// Exactly `stride * vertex_count` bytes are uploaded from the front of
    /// `data`; extra trailing bytes are ignored. Every attribute is set up
    /// with normalization enabled, so integer components reach the shader
    /// as `0.0..=1.0` (unsigned) or `-1.0..=1.0` (signed) floats.
    ///
    /// The layout is fully validated before any GL state is touched, so a
    /// failed call leaves the mesh as it was.
    pub fn set_data(
        &mut self,
        data: &[u8],
        vertex_count: usize,
        layout: &[VertexFormat],
    ) -> Result<(), MeshError> {
        if layout.is_empty() {
            return Err(MeshError::EmptyLayout);
        }

        let gl_types = layout
            .iter()
            .enumerate()
            .map(|(index, format)| {
                format
                    .gl_type(self.profile)
                    .ok_or(MeshError::UnsupportedAttribute { index, format: *format })
            })
            .collect::<Result<Vec<u32>, MeshError>>()?;

        let stride = vertex_stride(layout);
        let overflow = || MeshError::SizeOverflow { vertex_count, stride };
        let byte_len = stride.checked_mul(vertex_count).ok_or_else(overflow)?;
        let gl_stride = i32::try_from(stride).map_err(|_| overflow())?;
        let draw_count = i32::try_from(vertex_count).map_err(|_| overflow())?;
        isize::try_from(byte_len).map_err(|_| overflow())?;

        if data.len() < byte_len {
            return Err(MeshError::DataSizeMismatch {
                expected: byte_len,
                actual: data.len(),
            });
        }

        self.gl.bind_vertex_array(Some(self.vertex_array));
        self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.buffer));

        self.vertex_count = vertex_count;
        self.draw_count = draw_count;

        // Offsets never exceed the stride, which already fits in i32
        let mut offset = 0i32;
        for (location, (format, gl_type)) in (0u32..).zip(layout.iter().zip(gl_types)) {
            self.gl.vertex_attrib_pointer(
                location,
                format.components as i32,
                gl_type,
                true,
                gl_stride,
                offset,
            );
            self.gl.enable_vertex_attrib_array(location);
            offset += format.size_in_bytes() as i32;
        }

        let usage = if self.dynamic {
            glow::DYNAMIC_DRAW
        } else {
            glow::STATIC_DRAW
        };
        self.gl.buffer_data(glow::ARRAY_BUFFER, &data[..byte_len], usage);

        self.gl.bind_vertex_array(None);
        self.gl.bind_buffer(glow::ARRAY_BUFFER, None);

        log::trace!(
            "Uploaded {} vertices ({} bytes, {} attributes, dynamic: {})",
            vertex_count,
            byte_len,
            layout.len(),
            self.dynamic
        );
        Ok(())
    }

    /// Upload a slice of typed vertices using the type's own layout
    pub fn set_vertices<V: Vertex>(&mut self, vertices: &[V]) -> Result<(), MeshError> {
        self.set_data(bytemuck::cast_slice(vertices), vertices.len(), &V::layout())
    }

    /// Draw every vertex
    ///
    /// Desktop: binds this mesh's vertex array and leaves it bound.
    /// Embedded: binds, draws and unbinds.
    pub fn draw(&self) {
        self.gl.bind_vertex_array(Some(self.vertex_array));
        self.gl.draw_arrays(self.gl_mode, 0, self.draw_count);
        if self.profile.is_embedded() {
            self.gl.bind_vertex_array(None);
        }
    }

    /// Draw again without rebinding
    ///
    /// Desktop: assumes the vertex array bound by the last [`draw`](Self::draw)
    /// of this mesh is still bound. Embedded: identical to `draw`.
    pub fn redraw(&self) {
        if self.profile.is_embedded() {
            self.draw();
        } else {
            self.gl.draw_arrays(self.gl_mode, 0, self.draw_count);
        }
    }

    /// Change the topology used by subsequent draws
    pub fn set_primitive_type(&mut self, primitive_type: PrimitiveType) {
        self.primitive_type = primitive_type;
        self.gl_mode = primitive_type.gl_mode();
    }

    /// Topology used by draws
    pub const fn primitive_type(&self) -> PrimitiveType {
        self.primitive_type
    }

    /// Number of vertices from the last successful upload
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether uploads use `DYNAMIC_DRAW` rather than `STATIC_DRAW`
    pub const fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Choose the usage hint for subsequent uploads
    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
    }

    /// GL name of the vertex buffer
    pub const fn buffer(&self) -> C::Buffer {
        self.buffer
    }

    /// GL name of the vertex array object
    pub const fn vertex_array(&self) -> C::VertexArray {
        self.vertex_array
    }
}

impl<C: GlContext> Drop for Mesh<C> {
    fn drop(&mut self) {
        self.gl.delete_buffer(self.buffer);
        self.gl.delete_vertex_array(self.vertex_array);
        log::trace!("Deleted mesh (buffer: {:?}, vertex array: {:?})", self.buffer, self.vertex_array);
    }
}

impl<C: GlContext> fmt::Debug for Mesh<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mesh")
            .field("buffer", &self.buffer)
            .field("vertex_array", &self.vertex_array)
            .field("primitive_type", &self.primitive_type)
            .field("vertex_count", &self.vertex_count)
            .field("dynamic", &self.dynamic)
            .finish_non_exhaustive()
    }
}

/// Create a mesh and register it with the mesh manager
pub fn create_mesh<C: GlContext>(
    gl: &OpenGl<C>,
    managers: &mut ResourceManagers<C>,
) -> Result<MeshHandle<C>, MeshError> {
    let mesh = Mesh::create(gl)?;
    Ok(managers.meshes.register(mesh))
}
