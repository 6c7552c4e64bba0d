//! OpenGL shaders.
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for
//! compiling and linking the demo's fixed shader pair, and the
//! [`ShaderError`] taxonomy for the failures the pipeline can produce.

use std::sync::Arc;

use glow::HasContext;
use thiserror::Error;

/// Failures from building the shader pipeline. All of these are detected at
/// startup; the per-frame draw path cannot produce them.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to create shader object: {0}")]
    CreateShader(String),
    #[error("failed to create program object: {0}")]
    CreateProgram(String),
    #[error("shader program link failed: {log}")]
    Link { log: String },
    #[error("vertex attribute `{name}` not found in linked program")]
    AttributeNotFound { name: String },
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    ///
    /// A non-empty compile log is surfaced as a warning but does not fail the
    /// build on its own; a genuinely broken stage is caught at link time.
    pub fn new(
        gl: &Arc<glow::Context>,
        shader_type: u32,
        source: &str,
    ) -> Result<Self, ShaderError> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(ShaderError::CreateShader)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            let log = gl.get_shader_info_log(shader);
            if !log.trim().is_empty() {
                log::warn!("shader compile log: {log}");
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, ShaderError> {
        unsafe {
            let program = gl.create_program().map_err(ShaderError::CreateProgram)?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link { log });
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Resolves a named vertex input attribute in the linked program.
    pub fn attrib_location(&self, name: &str) -> Result<u32, ShaderError> {
        unsafe {
            self.gl
                .get_attrib_location(self.id, name)
                .ok_or_else(|| ShaderError::AttributeNotFound {
                    name: name.to_string(),
                })
        }
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
