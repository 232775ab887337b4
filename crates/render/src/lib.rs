//! Rendering adapter: everything a backend needs to draw one frame, minus the GPU.
//!
//! # Invariants
//! - The renderer reads camera state; it never mutates it.
//! - Projection aspect always equals the current viewport width / height.
//! - Scene geometry is immutable for the process lifetime.

mod frame;
pub mod geometry;

pub use frame::{FrameMatrices, RenderView, Viewport, crosshair_half_extent, hand_translation};
