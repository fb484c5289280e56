//! Call-recording GL context for unit tests

use std::cell::{Cell, RefCell};

use crate::render::GlContext;

/// One recorded GL call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlCall {
    CreateBuffer(u32),
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    DeleteVertexArray(u32),
    BindBuffer {
        target: u32,
        buffer: Option<u32>,
    },
    BindVertexArray(Option<u32>),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    BufferData {
        target: u32,
        data: Vec<u8>,
        usage: u32,
    },
    DrawArrays {
        mode: u32,
        first: i32,
        count: i32,
    },
}

/// Fake context that hands out sequential object names and records calls
#[derive(Debug, Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_name: Cell<u32>,
    fail_buffers: Cell<bool>,
    fail_vertex_arrays: Cell<bool>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `create_buffer` calls fail
    pub fn fail_buffer_creation(&self) {
        self.fail_buffers.set(true);
    }

    /// Make subsequent `create_vertex_array` calls fail
    pub fn fail_vertex_array_creation(&self) {
        self.fail_vertex_arrays.set(true);
    }

    /// Snapshot of every call so far
    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    /// Drain the recorded calls
    pub fn take_calls(&self) -> Vec<GlCall> {
        self.calls.take()
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate_name(&self) -> u32 {
        let name = self.next_name.get() + 1;
        self.next_name.set(name);
        name
    }
}

impl GlContext for RecordingGl {
    type Buffer = u32;
    type VertexArray = u32;

    fn create_buffer(&self) -> Result<u32, String> {
        if self.fail_buffers.get() {
            return Err("out of buffer names".to_string());
        }
        let name = self.allocate_name();
        self.record(GlCall::CreateBuffer(name));
        Ok(name)
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        if self.fail_vertex_arrays.get() {
            return Err("vertex arrays unsupported".to_string());
        }
        let name = self.allocate_name();
        self.record(GlCall::CreateVertexArray(name));
        Ok(name)
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer { target, buffer });
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(GlCall::BindVertexArray(vertex_array));
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
        self.record(GlCall::VertexAttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.record(GlCall::BufferData {
            target,
            data: data.to_vec(),
            usage,
        });
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }
}
