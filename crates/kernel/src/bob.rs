use glam::Vec3;

/// Footstep view bob.
///
/// The timer only advances while moving and is never reset, so resuming
/// movement continues the sinusoid from where it stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct BobState {
    timer: f32,
    amount: f32,
    frequency: f32,
    amplitude: f32,
}

impl BobState {
    pub fn new(frequency: f32, amplitude: f32) -> Self {
        Self {
            timer: 0.0,
            amount: 0.0,
            frequency,
            amplitude: amplitude.abs(),
        }
    }

    pub fn advance(&mut self, dt: f32, moving: bool) {
        if moving {
            self.timer += dt * self.frequency;
            self.amount = self.timer.sin() * self.amplitude;
        } else {
            self.amount = 0.0;
        }
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Current vertical displacement.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn offset(&self) -> Vec3 {
        Vec3::new(0.0, self.amount, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> BobState {
        BobState::new(10.0, 0.05)
    }

    #[test]
    fn idle_bob_is_zero() {
        let mut b = bob();
        b.advance(0.016, false);
        assert_eq!(b.amount(), 0.0);
        assert_eq!(b.timer(), 0.0);
    }

    #[test]
    fn moving_bob_follows_sine() {
        let mut b = bob();
        b.advance(0.1, true);
        assert!((b.timer() - 1.0).abs() < 1e-6);
        assert!((b.amount() - 1.0_f32.sin() * 0.05).abs() < 1e-6);
    }

    #[test]
    fn moving_bob_stays_bounded() {
        let mut b = bob();
        for _ in 0..10_000 {
            b.advance(0.0137, true);
            assert!(b.amount().abs() <= 0.05 + 1e-7);
        }
    }

    #[test]
    fn stopping_freezes_timer_and_zeroes_amount() {
        let mut b = bob();
        b.advance(0.12, true);
        let frozen = b.timer();
        assert_ne!(b.amount(), 0.0);
        b.advance(0.5, false);
        assert_eq!(b.amount(), 0.0);
        assert_eq!(b.timer(), frozen);
    }

    #[test]
    fn resuming_continues_phase() {
        let mut b = bob();
        b.advance(0.1, true);
        b.advance(1.0, false);
        b.advance(0.05, true);
        assert!((b.timer() - 1.5).abs() < 1e-6);
        assert!((b.amount() - 1.5_f32.sin() * 0.05).abs() < 1e-6);
    }
}
