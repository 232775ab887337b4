use borehammer_common::ControlConfig;
use glam::Vec3;

/// First-person camera: position plus yaw/pitch in degrees.
///
/// `front` is cached and only changes through [`CameraState::rotate`], so the
/// frame loop reads it without redoing the trigonometry.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    up: Vec3,
    sensitivity: f32,
    pitch_limit: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(&ControlConfig::default())
    }
}

impl CameraState {
    pub fn new(config: &ControlConfig) -> Self {
        let pitch_limit = config.pitch_limit.abs();
        let yaw = config.initial_yaw;
        let pitch = config.initial_pitch.clamp(-pitch_limit, pitch_limit);
        Self {
            position: config.spawn_position,
            yaw,
            pitch,
            front: front_from_angles(yaw, pitch),
            up: Vec3::Y,
            sensitivity: config.mouse_sensitivity,
            pitch_limit,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Apply a pointer delta in screen units. Screen y grows downward, so a
    /// positive `dy` looks down.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
        self.front = front_from_angles(self.yaw, self.pitch);
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.front * distance;
    }

    pub fn move_backward(&mut self, distance: f32) {
        self.position -= self.front * distance;
    }
}

/// Unit view direction for yaw/pitch in degrees. Yaw -90° looks down -Z.
pub fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = CameraState::default();
        assert_eq!(cam.yaw(), -90.0);
        assert_eq!(cam.pitch(), 0.0);
        assert!((cam.front() - Vec3::NEG_Z).length() < EPS);
        assert_eq!(cam.up(), Vec3::Y);
        assert_eq!(cam.position, Vec3::new(0.0, 1.0, 3.0));
    }

    #[test]
    fn front_is_unit_over_sweep() {
        let mut yaw = -720.0_f32;
        while yaw <= 720.0 {
            let mut pitch = -89.0_f32;
            while pitch <= 89.0 {
                let len = front_from_angles(yaw, pitch).length();
                assert!((len - 1.0).abs() < EPS, "yaw={yaw} pitch={pitch} len={len}");
                pitch += 7.5;
            }
            yaw += 13.0;
        }
    }

    #[test]
    fn pitch_clamps_at_limits() {
        let mut cam = CameraState::default();
        cam.rotate(0.0, -10_000.0);
        assert_eq!(cam.pitch(), 89.0);
        cam.rotate(0.0, 50_000.0);
        assert_eq!(cam.pitch(), -89.0);
        assert!((cam.front().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn rotate_scales_by_sensitivity() {
        let mut cam = CameraState::default();
        cam.rotate(100.0, 50.0);
        assert!((cam.yaw() - -80.0).abs() < EPS);
        assert!((cam.pitch() - -5.0).abs() < EPS);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = CameraState::default();
        cam.rotate(36_000.0, 0.0);
        assert!((cam.yaw() - 3510.0).abs() < 1e-2);
        assert!((cam.front().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn forward_then_backward_returns() {
        let mut cam = CameraState::default();
        let start = cam.position;
        cam.move_forward(1.5);
        assert_ne!(cam.position, start);
        cam.move_backward(1.5);
        assert!((cam.position - start).length() < EPS);
    }
}
