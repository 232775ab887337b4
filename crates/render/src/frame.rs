use borehammer_common::ProjectionConfig;
use glam::{Mat4, Vec2, Vec3};

/// Framebuffer size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A minimized window reports a zero dimension; nothing should be drawn.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// Where the eye is and which way it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Eye position including view bob.
    pub eye: Vec3,
    /// Unit view direction.
    pub front: Vec3,
    pub up: Vec3,
}

/// Transforms for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub projection: Mat4,
    pub view: Mat4,
    /// Ground is drawn with an identity model transform.
    pub ground_mvp: Mat4,
    pub hand_mvp: Mat4,
}

impl FrameMatrices {
    pub fn compute(view: &RenderView, viewport: Viewport, projection: &ProjectionConfig) -> Self {
        let proj = Mat4::perspective_rh(
            projection.fov_y.to_radians(),
            viewport.aspect(),
            projection.near,
            projection.far,
        );
        let look = Mat4::look_at_rh(view.eye, view.eye + view.front, view.up);
        let view_proj = proj * look;
        let hand_model = Mat4::from_translation(hand_translation(view));
        Self {
            projection: proj,
            view: look,
            ground_mvp: view_proj,
            hand_mvp: view_proj * hand_model,
        }
    }
}

/// Hand placement: half a unit ahead, 0.3 to the right and 0.2 below the eye.
pub fn hand_translation(view: &RenderView) -> Vec3 {
    let right = view.front.cross(view.up).normalize();
    view.eye + view.front * 0.5 + right * 0.3 + Vec3::new(0.0, -0.2, 0.0)
}

/// Half-size of a centred square of `size_px` pixels, in clip-space units.
pub fn crosshair_half_extent(viewport: Viewport, size_px: f32) -> Vec2 {
    Vec2::new(
        size_px / viewport.width.max(1) as f32,
        size_px / viewport.height.max(1) as f32,
    )
}
