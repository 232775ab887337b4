use crate::bob::BobState;
use crate::camera::CameraState;
use crate::pointer::PointerAnchor;
use borehammer_common::{ControlConfig, MovementInput};
use glam::Vec3;

/// All mutable per-process state of the demo, owned by the frame driver.
#[derive(Debug, Clone)]
pub struct Player {
    camera: CameraState,
    bob: BobState,
    pointer: PointerAnchor,
    move_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(&ControlConfig::default())
    }
}

impl Player {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            camera: CameraState::new(config),
            bob: BobState::new(config.bob_frequency, config.bob_amplitude),
            pointer: PointerAnchor::new(),
            move_speed: config.move_speed,
        }
    }

    /// Feed an absolute pointer position. The first call only anchors.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if let Some((dx, dy)) = self.pointer.track(x, y) {
            self.camera.rotate(dx, dy);
        }
    }

    /// Forget the pointer anchor so the next position does not rotate.
    pub fn reset_pointer(&mut self) {
        self.pointer.reset();
        tracing::trace!("pointer anchor reset");
    }

    /// Advance movement and bob by `dt` seconds.
    pub fn on_tick(&mut self, dt: f32, input: MovementInput) {
        let distance = self.move_speed * dt;
        if input.forward {
            self.camera.move_forward(distance);
        }
        if input.backward {
            self.camera.move_backward(distance);
        }
        self.bob.advance(dt, input.is_moving());
    }

    /// Eye position used for rendering: the logical position plus bob.
    pub fn eye(&self) -> Vec3 {
        self.camera.position + self.bob.offset()
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn bob(&self) -> &BobState {
        &self.bob
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;
    const FORWARD: MovementInput = MovementInput {
        forward: true,
        backward: false,
    };

    #[test]
    fn first_pointer_move_does_not_rotate() {
        let mut p = Player::default();
        p.on_pointer_move(0.0, 0.0);
        assert_eq!(p.camera().yaw(), -90.0);
        assert_eq!(p.camera().pitch(), 0.0);

        let mut q = Player::default();
        q.on_pointer_move(900.0, -300.0);
        assert_eq!(q.camera().yaw(), -90.0);
        assert_eq!(q.camera().pitch(), 0.0);
    }

    #[test]
    fn pointer_moves_rotate_after_anchor() {
        let mut p = Player::default();
        p.on_pointer_move(640.0, 360.0);
        p.on_pointer_move(740.0, 260.0);
        assert!((p.camera().yaw() - -80.0).abs() < EPS);
        assert!((p.camera().pitch() - 10.0).abs() < EPS);
    }

    #[test]
    fn pointer_pitch_clamps() {
        let mut p = Player::default();
        p.on_pointer_move(0.0, 0.0);
        p.on_pointer_move(0.0, -5000.0);
        assert_eq!(p.camera().pitch(), 89.0);
    }

    #[test]
    fn forward_half_second_moves_two_units() {
        let mut p = Player::default();
        let start = p.camera().position;
        p.on_tick(0.5, FORWARD);
        let moved = p.camera().position - start;
        assert!((moved.z - -2.0).abs() < EPS);
        assert!(moved.x.abs() < EPS);
        assert!(moved.y.abs() < EPS);
    }

    #[test]
    fn opposite_keys_cancel_but_still_bob() {
        let mut p = Player::default();
        let start = p.camera().position;
        p.on_tick(
            0.1,
            MovementInput {
                forward: true,
                backward: true,
            },
        );
        assert!((p.camera().position - start).length() < EPS);
        assert!(p.bob().timer() > 0.0);
    }

    #[test]
    fn eye_includes_bob_but_position_does_not() {
        let mut p = Player::default();
        p.on_tick(0.1, FORWARD);
        let bob = p.bob().amount();
        assert_ne!(bob, 0.0);
        assert_eq!(p.eye(), p.camera().position + Vec3::new(0.0, bob, 0.0));
        assert_eq!(p.camera().position.y, 1.0);
    }

    #[test]
    fn releasing_keys_zeroes_bob_next_tick() {
        let mut p = Player::default();
        for _ in 0..37 {
            p.on_tick(0.016, FORWARD);
        }
        let timer = p.bob().timer();
        p.on_tick(0.016, MovementInput::IDLE);
        assert_eq!(p.bob().amount(), 0.0);
        assert_eq!(p.bob().timer(), timer);
        assert_eq!(p.eye(), p.camera().position);
    }

    #[test]
    fn reset_pointer_reanchors() {
        let mut p = Player::default();
        p.on_pointer_move(0.0, 0.0);
        p.reset_pointer();
        p.on_pointer_move(400.0, 400.0);
        assert_eq!(p.camera().yaw(), -90.0);
        assert_eq!(p.camera().pitch(), 0.0);
    }
}
