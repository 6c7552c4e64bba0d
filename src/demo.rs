//! The demo context.
//!
//! [`Demo`] owns everything the frame loop needs: the linked shader program,
//! the shape buffer, and the current shape selection. It is built once at
//! startup and dropped after the event loop exits, which releases the GL
//! objects in order. The selection bookkeeping lives in [`ShapeState`], a
//! plain struct with no GL coupling.

use std::sync::Arc;

use sdl2::keyboard::Keycode;
use thiserror::Error;

use crate::abs::{Shader, ShaderError, ShaderProgram, ShapeBuffer};
use crate::shapes::{ShapeId, Vertex};

const VERT_SOURCE: &str = include_str!("render/shaders/flat/vert.glsl");
const FRAG_SOURCE: &str = include_str!("render/shaders/flat/frag.glsl");

/// The vertex input attribute the pipeline binds positions to.
const COORD_ATTRIB: &str = "coord";

/// Startup failures. Rendering cannot work after any of these, so the caller
/// should treat them as fatal.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error("failed to allocate vertex buffer: {0}")]
    Buffer(String),
}

/// Maps the number keys '1'..'4' to shape selectors. Every other key is a
/// no-op and maps to `None`.
pub fn shape_for_key(keycode: Keycode) -> Option<ShapeId> {
    match keycode {
        Keycode::Num1 => Some(ShapeId::Triangle),
        Keycode::Num2 => Some(ShapeId::Square),
        Keycode::Num3 => Some(ShapeId::Trapezoid),
        Keycode::Num4 => Some(ShapeId::Pentagon),
        _ => None,
    }
}

/// CPU-side selection state: the current shape selector and the vertex list
/// mirroring what the GPU buffer holds.
#[derive(Debug)]
pub struct ShapeState {
    current: ShapeId,
    vertices: Vec<Vertex>,
}

impl ShapeState {
    /// Starts out on the default shape, the triangle.
    pub fn new() -> Self {
        let current = ShapeId::Triangle;
        Self {
            current,
            vertices: current.vertices().to_vec(),
        }
    }

    /// Records `id` as current and replaces the held vertex list with its
    /// catalog entry. Nothing of the previous shape survives.
    pub fn select(&mut self, id: ShapeId) {
        self.current = id;
        self.vertices.clear();
        self.vertices.extend_from_slice(id.vertices());
    }

    pub fn current(&self) -> ShapeId {
        self.current
    }

    /// The vertex list currently selected for upload.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl Default for ShapeState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Demo {
    program: ShaderProgram,
    buffer: ShapeBuffer,
    state: ShapeState,
}

impl Demo {
    /// Compiles and links the shader pair, resolves the position attribute,
    /// and uploads the default shape (the triangle).
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, DemoError> {
        let vert = Shader::new(gl, glow::VERTEX_SHADER, VERT_SOURCE)?;
        let frag = Shader::new(gl, glow::FRAGMENT_SHADER, FRAG_SOURCE)?;
        let program = ShaderProgram::new(gl, &[&vert, &frag])?;
        let coord_location = program.attrib_location(COORD_ATTRIB)?;

        let mut buffer = ShapeBuffer::new(gl, coord_location).map_err(DemoError::Buffer)?;
        let state = ShapeState::new();
        buffer.upload(state.vertices());

        Ok(Self {
            program,
            buffer,
            state,
        })
    }

    pub fn current_shape(&self) -> ShapeId {
        self.state.current()
    }

    pub fn vertex_count(&self) -> usize {
        self.state.vertex_count()
    }

    /// Switches the displayed shape, replacing the buffer contents with the
    /// catalog entry for `id`.
    pub fn select(&mut self, id: ShapeId) {
        self.state.select(id);
        self.buffer.upload(self.state.vertices());
    }

    /// Handles a key press from the host loop.
    pub fn on_key_press(&mut self, keycode: Keycode) {
        if let Some(id) = shape_for_key(keycode) {
            self.select(id);
            log::info!("showing {:?} ({} vertices)", id, self.vertex_count());
        }
    }

    /// Handles a window resize. Only the viewport changes; shape state is
    /// untouched.
    pub fn on_resize(&self, gl: &glow::Context, width: i32, height: i32) {
        use glow::HasContext;
        unsafe {
            gl.viewport(0, 0, width, height);
        }
    }

    /// Draws the current shape. Stateless between frames apart from the
    /// externally mutated selection.
    pub fn draw(&self, gl: &glow::Context) {
        use glow::HasContext;
        self.program.use_program();
        self.buffer.draw();
        unsafe {
            gl.use_program(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_map_to_shapes() {
        assert_eq!(shape_for_key(Keycode::Num1), Some(ShapeId::Triangle));
        assert_eq!(shape_for_key(Keycode::Num2), Some(ShapeId::Square));
        assert_eq!(shape_for_key(Keycode::Num3), Some(ShapeId::Trapezoid));
        assert_eq!(shape_for_key(Keycode::Num4), Some(ShapeId::Pentagon));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(shape_for_key(Keycode::Num5), None);
        assert_eq!(shape_for_key(Keycode::Num0), None);
        assert_eq!(shape_for_key(Keycode::A), None);
        assert_eq!(shape_for_key(Keycode::Escape), None);
        assert_eq!(shape_for_key(Keycode::Space), None);
    }

    #[test]
    fn test_select_replaces_previous_shape() {
        let mut state = ShapeState::new();
        state.select(ShapeId::Triangle);
        state.select(ShapeId::Square);
        assert_eq!(state.current(), ShapeId::Square);
        assert_eq!(state.vertex_count(), 4);
        assert_eq!(state.vertices(), ShapeId::Square.vertices());
    }

    #[test]
    fn test_default_triangle_then_key_two_shows_square() {
        let mut state = ShapeState::new();
        assert_eq!(state.current(), ShapeId::Triangle);
        assert_eq!(state.vertex_count(), 3);

        let id = shape_for_key(Keycode::Num2).unwrap();
        state.select(id);

        let expected = [
            Vertex::new(-0.5, -0.5),
            Vertex::new(-0.5, 0.5),
            Vertex::new(0.5, 0.5),
            Vertex::new(0.5, -0.5),
        ];
        assert_eq!(state.vertices(), &expected[..]);
        assert_eq!(state.vertex_count(), 4);
    }

    #[test]
    fn test_unmapped_key_leaves_selection_unchanged() {
        let mut state = ShapeState::new();
        state.select(ShapeId::Pentagon);
        assert_eq!(shape_for_key(Keycode::G), None);
        assert_eq!(state.current(), ShapeId::Pentagon);
        assert_eq!(state.vertex_count(), 5);
    }
}
