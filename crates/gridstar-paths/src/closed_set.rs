use std::collections::HashSet;

use gridstar_core::Point;

/// Positions whose node has been finalized during a search.
///
/// There is no removal: once closed, a position stays closed for the rest
/// of the search.
#[derive(Debug, Clone, Default)]
pub struct ClosedSet {
    cells: HashSet<Point>,
}

impl ClosedSet {
    /// Create an empty closed set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `p` as finalized. Returns `false` if it already was.
    #[inline]
    pub fn add(&mut self, p: Point) -> bool {
        self.cells.insert(p)
    }

    /// Whether `p` has been finalized.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    /// Number of finalized positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
