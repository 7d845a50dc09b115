use gridstar_core::{Grid, Point};

/// Search-space interface used by [`AStar`](crate::AStar).
pub trait Pather {
    /// Whether `p` may be stood on (in bounds and not blocked).
    fn is_valid(&self, p: Point) -> bool;

    /// Append valid neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling. The order must be stable for reproducible paths.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Pather for Grid {
    #[inline]
    fn is_valid(&self, p: Point) -> bool {
        Grid::is_valid(self, p)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.neighbors_into(p, buf);
    }
}

impl<P: Pather + ?Sized> Pather for &P {
    #[inline]
    fn is_valid(&self, p: Point) -> bool {
        (**self).is_valid(p)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(p, buf);
    }
}
