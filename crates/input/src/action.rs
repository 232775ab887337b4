/// A discrete action the desktop layer can produce from a key.
///
/// Bindings are fixed; the frame loop consumes actions, never raw input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Walk along the front vector.
    MoveForward,
    /// Walk against the front vector.
    MoveBackward,
    /// Close the window at the end of the current frame.
    Quit,
}
