//! Vertex-data plumbing for the tutorial programs.
//!
//! These wrappers make direct `gl::*` calls rather than going through
//! [`GlDriver`](super::driver::GlDriver): they are pure glue around buffer
//! upload and only ever exist alongside a live context.

use std::ffi::c_void;
use std::mem::size_of;

use gl::types::GLuint;

/// A vertex array object, recording the attribute layout set up while it is
/// bound.
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    pub fn new() -> Self {
        let mut id = 0u32;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }
        VertexArray { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}

/// A vertex buffer object holding `f32` attribute data.
pub struct VertexBuffer {
    id: GLuint,
}

impl VertexBuffer {
    /// Generates a buffer, binds it, and uploads `data` as static draw data.
    pub fn with_data(data: &[f32]) -> Self {
        let vbo = Self::generate();
        vbo.bind();
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (data.len() * size_of::<f32>()) as isize,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }

        vbo
    }

    pub fn generate() -> Self {
        let mut id = 0u32;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        VertexBuffer { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.id);
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

/// An element buffer object holding vertex indices, so shared vertices only
/// get uploaded once.
pub struct ElementBuffer {
    id: GLuint,
}

impl ElementBuffer {
    pub fn with_data(data: &[u32]) -> Self {
        let ebo = Self::generate();
        ebo.bind();
        unsafe {
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                (data.len() * size_of::<u32>()) as isize,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }

        ebo
    }

    pub fn generate() -> Self {
        let mut id = 0u32;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        ElementBuffer { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.id);
        }
    }
}

impl Drop for ElementBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

/// Unbinds the current `ARRAY_BUFFER` once attribute setup is finished.
/// There is deliberately no element-buffer counterpart: that binding is part
/// of the vertex array's recorded state, and unbinding it while a vertex
/// array is bound would strip the indices from the shape.
pub fn unbind_array_buffer() {
    unsafe {
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);
    }
}

/// Describes one `f32` vertex attribute to the driver. `size` is the number
/// of components, `stride` and `offset` are in floats, not bytes.
pub fn set_vertex_attrib(index: u32, size: i32, stride: usize, offset: usize) {
    unsafe {
        gl::EnableVertexAttribArray(index);
        gl::VertexAttribPointer(
            index,
            size,
            gl::FLOAT,
            gl::FALSE,
            (stride * size_of::<f32>()) as i32,
            (offset * size_of::<f32>()) as *const c_void,
        );
    }
}
