//! wgpu render backend for the borehammer demo.
//!
//! Draws the ground plane and hand quad through one flat-colour pipeline and
//! overlays a screen-space crosshair through a second, depth-ignoring one.
//!
//! # Invariants
//! - Vertex data is uploaded once; frames only write uniforms.
//! - Shader or pipeline validation failure is reported at construction, never mid-frame.

mod context;
mod error;
mod gpu;
mod shaders;

pub use context::GpuContext;
pub use error::RenderError;
pub use gpu::WgpuRenderer;
