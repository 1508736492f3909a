//! Synchronous notifications for board mutations.

use crate::Placement;

/// Receives board events after each successful mutation.
///
/// Observers run on the caller's stack, in registration order, before the
/// mutating call returns. Every method has an empty default.
pub trait PlacementObserver {
    /// The board was (re)initialized or cleared to the empty state.
    fn board_initialized(&mut self, _size: usize) {}

    /// A piece was placed.
    fn piece_placed(&mut self, _placement: &Placement) {}

    /// The board was overwritten from a state blob.
    fn board_restored(&mut self) {}
}
