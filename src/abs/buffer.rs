//! GPU-side shape storage.
//!
//! This module defines the [`ShapeBuffer`] struct owning the demo's single
//! vertex buffer. Selecting a shape replaces the buffer contents wholesale;
//! the CPU-side mirror of what is uploaded lives with the selection state in
//! [`crate::demo`], this type only keeps the vertex count the draw call needs.

use std::sync::Arc;

use glow::HasContext;

use crate::shapes::Vertex;

/// A vertex buffer holding one flat polygon, drawn as a triangle fan.
pub struct ShapeBuffer {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: usize,
}

impl ShapeBuffer {
    /// Creates an empty shape buffer. The vertex layout (two tightly packed
    /// floats per vertex) is recorded once against `coord_location`, the
    /// attribute resolved from the linked program.
    pub fn new(gl: &Arc<glow::Context>, coord_location: u32) -> Result<Self, String> {
        unsafe {
            let vao = gl.create_vertex_array()?;
            let vbo = gl.create_buffer()?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.enable_vertex_attrib_array(coord_location);
            gl.vertex_attrib_pointer_f32(
                coord_location,
                2,
                glow::FLOAT,
                false,
                std::mem::size_of::<Vertex>() as i32,
                0,
            );
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                vao,
                vbo,
                vertex_count: 0,
            })
        }
    }

    /// Replaces the buffer contents with the given vertex list. This is a
    /// full replace; nothing of the previous shape survives. Safe to call at
    /// any point between frames.
    pub fn upload(&mut self, vertices: &[Vertex]) {
        self.vertex_count = vertices.len();

        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    vertices.as_ptr() as *const u8,
                    std::mem::size_of_val(vertices),
                ),
                glow::STATIC_DRAW,
            );
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    /// Draws the buffered shape as a triangle fan.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_arrays(glow::TRIANGLE_FAN, 0, self.vertex_count as i32);
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for ShapeBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
