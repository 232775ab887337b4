/// Converts absolute pointer positions into deltas.
///
/// The first position after construction (or [`PointerAnchor::reset`]) only
/// establishes the reference point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerAnchor {
    last: Option<(f64, f64)>,
}

impl PointerAnchor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `(x, y)` and return the travel since the previous position.
    pub fn track(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let delta = self
            .last
            .map(|(lx, ly)| ((x - lx) as f32, (y - ly) as f32));
        self.last = Some((x, y));
        delta
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn is_anchored(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_position_yields_no_delta() {
        let mut a = PointerAnchor::new();
        assert_eq!(a.track(640.0, 360.0), None);
        assert!(a.is_anchored());
        assert_eq!(a.track(650.0, 355.0), Some((10.0, -5.0)));
    }

    #[test]
    fn reset_requires_new_anchor() {
        let mut a = PointerAnchor::new();
        a.track(0.0, 0.0);
        a.reset();
        assert_eq!(a.track(500.0, 500.0), None);
        assert_eq!(a.track(500.0, 500.0), Some((0.0, 0.0)));
    }
}
