//! Shared types and configuration for the borehammer demo.
//!
//! # Invariants
//! - Configuration values are plain data; nothing here touches the window or GPU.

pub mod config;
pub mod types;

pub use config::{ControlConfig, DemoConfig, ProjectionConfig, WindowConfig};
pub use types::MovementInput;
