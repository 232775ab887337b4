//! Player input mapped to discrete actions.
//!
//! # Invariants
//! - Consumers see actions, never raw key codes; the window layer owns the binding.
//! - Held state is derived only from press/release transitions.

pub mod action;
pub mod state;

pub use action::Action;
pub use state::ActionState;
