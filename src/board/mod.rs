//! Board layout: the shared track, home stretches and safe cells.
//!
//! Everything here is a pure function of a color and a relative
//! position; the rules and the bots build on it.

pub mod geometry;

pub use geometry::{
    absolute_cell, advance, is_safe_cell, start_offset, zone_of, Color, InvalidPosition,
    TokenPosition, Zone, FINISH, LAST_MAIN, SAFE_CELLS, STRETCH_START, TRACK_CELLS,
};
