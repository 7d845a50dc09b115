//! **gridstar-core**: geometry primitives and the obstacle grid.
//!
//! This crate provides the types shared across the *gridstar* workspace:
//! integer [`Point`]s, half-open [`Range`] rectangles, and the obstacle
//! [`Grid`] that path searches run on.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, GridError};
