//! Player kernel: camera orientation, movement and view bob.
//!
//! # Invariants
//! - The front vector is unit length and recomputed whenever yaw or pitch changes.
//! - Pitch stays within the configured limit (±89° by default).
//! - Bob offset is zero whenever no movement key is held.
//! - No window, clock or GPU access; the frame driver supplies all inputs.

pub mod bob;
pub mod camera;
pub mod player;
pub mod pointer;

pub use bob::BobState;
pub use camera::CameraState;
pub use player::Player;
pub use pointer::PointerAnchor;
