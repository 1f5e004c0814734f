//! Movement domain: facing from horizontal input.

use crate::movement::{CharacterState, Facing, FacingSink};

/// Facing after input `move_x`; zero input keeps the current facing.
pub fn resolve(current: Facing, move_x: f32) -> Facing {
    Facing::from_axis(move_x).unwrap_or(current)
}

pub fn update<F: FacingSink + ?Sized>(state: &mut CharacterState, move_x: f32, sink: &mut F) {
    state.facing = resolve(state.facing, move_x);
    sink.face(state.facing);
}
