//! This module contains the core components for the demo,
//! including application setup, shader management, and vertex buffer handling.

pub mod app;
pub mod buffer;
pub mod shader;

pub use app::*;
pub use buffer::*;
pub use shader::*;
