/// Movement keys sampled for one frame.
///
/// Forward and backward may both be held; their displacements cancel but the
/// player still counts as moving for view-bob purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
}

impl MovementInput {
    pub const IDLE: Self = Self {
        forward: false,
        backward: false,
    };

    pub fn is_moving(&self) -> bool {
        self.forward || self.backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_not_moving() {
        assert!(!MovementInput::IDLE.is_moving());
        assert_eq!(MovementInput::default(), MovementInput::IDLE);
    }

    #[test]
    fn either_key_counts_as_moving() {
        let fwd = MovementInput {
            forward: true,
            backward: false,
        };
        let both = MovementInput {
            forward: true,
            backward: true,
        };
        assert!(fwd.is_moving());
        assert!(both.is_moving());
    }
}
