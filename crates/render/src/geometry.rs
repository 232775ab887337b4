//! Static scene data: two triangle lists and the flat colours they are drawn with.

/// Ground plane, 100 × 100 units centred on the origin at y = 0.
#[rustfmt::skip]
pub const GROUND_VERTICES: [[f32; 3]; 6] = [
    [-50.0, 0.0, -50.0], [ 50.0, 0.0, -50.0], [ 50.0, 0.0,  50.0],
    [-50.0, 0.0, -50.0], [ 50.0, 0.0,  50.0], [-50.0, 0.0,  50.0],
];

/// Hand quad in model space; placed each frame by [`crate::hand_translation`].
#[rustfmt::skip]
pub const HAND_VERTICES: [[f32; 3]; 6] = [
    [-0.1, -0.1, -0.4], [ 0.1, -0.1, -0.4], [ 0.1,  0.1, -0.4],
    [-0.1, -0.1, -0.4], [ 0.1,  0.1, -0.4], [-0.1,  0.1, -0.4],
];

pub const CLEAR_COLOR: [f32; 3] = [0.05, 0.05, 0.05];
pub const GROUND_COLOR: [f32; 3] = [0.2, 0.2, 0.2];
pub const HAND_COLOR: [f32; 3] = [0.5, 0.0, 0.0];
pub const CROSSHAIR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Crosshair edge length in physical pixels.
pub const CROSSHAIR_SIZE_PX: f32 = 5.0;
