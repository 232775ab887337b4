use glam::Vec3;

/// Top-level demo configuration. Every section has a fixed default; there is
/// no file or environment layer behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub controls: ControlConfig,
    pub projection: ProjectionConfig,
}

/// Initial window attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "BORE HAMMER".into(),
            width: 1280,
            height: 720,
        }
    }
}

/// Mouse-look, movement and view-bob tuning. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlConfig {
    /// Degrees of rotation per unit of pointer travel.
    pub mouse_sensitivity: f32,
    /// Units per second along the front vector.
    pub move_speed: f32,
    /// Bob timer advance per second of movement.
    pub bob_frequency: f32,
    /// Peak vertical eye displacement while moving.
    pub bob_amplitude: f32,
    pub spawn_position: Vec3,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    pub pitch_limit: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.1,
            move_speed: 4.0,
            bob_frequency: 10.0,
            bob_amplitude: 0.05,
            spawn_position: Vec3::new(0.0, 1.0, 3.0),
            initial_yaw: -90.0,
            initial_pitch: 0.0,
            pitch_limit: 89.0,
        }
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y: 90.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_matches_demo() {
        let w = WindowConfig::default();
        assert_eq!(w.title, "BORE HAMMER");
        assert_eq!((w.width, w.height), (1280, 720));
    }

    #[test]
    fn default_controls() {
        let c = ControlConfig::default();
        assert_eq!(c.initial_yaw, -90.0);
        assert_eq!(c.initial_pitch, 0.0);
        assert_eq!(c.pitch_limit, 89.0);
        assert_eq!(c.spawn_position, Vec3::new(0.0, 1.0, 3.0));
    }

    #[test]
    fn default_projection() {
        let p = ProjectionConfig::default();
        assert_eq!(p.fov_y, 90.0);
        assert!(p.near < p.far);
    }
}
