//! Obstacle grid.
//!
//! [`Grid`] is a fixed-size rectangle of cells anchored at the origin plus a
//! set of blocked [`Point`]s. Obstacles may be registered outside the bounds;
//! they are simply never reachable.

use std::collections::HashSet;
use std::fmt;

use crate::geom::{Point, Range};

/// Character used for blocked cells in the text format.
pub const OBSTACLE_CHAR: char = '#';
/// Character used for free cells in the text format.
pub const FREE_CHAR: char = '.';

/// A width × height grid of cells with a set of obstacles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    width: i32,
    height: i32,
    obstacles: HashSet<Point>,
}

impl Grid {
    /// Create an obstacle-free grid.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not positive. Use [`Grid::try_new`]
    /// for sizes that come from untrusted input.
    pub fn new(width: i32, height: i32) -> Self {
        match Self::try_new(width, height) {
            Ok(g) => g,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create an obstacle-free grid, rejecting non-positive sizes.
    pub fn try_new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            obstacles: HashSet::new(),
        })
    }

    /// Parse a grid from rows of `#` (obstacle) and `.` (free).
    ///
    /// The first line is the top row, i.e. `y = height - 1`; the last line
    /// is `y = 0`. All lines must have the same length.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s.lines().collect();
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Self::try_new(width, height)?;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width as usize {
                return Err(GridError::Ragged {
                    line: row + 1,
                    expected: width as usize,
                    found,
                });
            }
            let y = height - 1 - row as i32;
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y);
                match ch {
                    OBSTACLE_CHAR => {
                        grid.add_obstacle(p);
                    }
                    FREE_CHAR => {}
                    _ => return Err(GridError::InvalidChar { ch, pos: p }),
                }
            }
        }
        Ok(grid)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::from_size(self.width, self.height)
    }

    /// Mark `p` as blocked. Returns `false` if it was already blocked.
    pub fn add_obstacle(&mut self, p: Point) -> bool {
        self.obstacles.insert(p)
    }

    /// Unblock `p`. Returns `false` if it was not blocked.
    pub fn remove_obstacle(&mut self, p: Point) -> bool {
        self.obstacles.remove(&p)
    }

    /// Whether `p` has been registered as an obstacle. Bounds are not
    /// checked.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.obstacles.contains(&p)
    }

    /// Whether `p` is inside the grid and not blocked.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.bounds().contains(p) && !self.is_obstacle(p)
    }

    /// Valid axis-aligned neighbours of `p`, in up, down, right, left order.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Append the valid neighbours of `p` to `buf`, in the same order as
    /// [`Grid::neighbors`].
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            Point::CARDINALS
                .iter()
                .filter_map(|&d| p.checked_add(d))
                .filter(|&n| self.is_valid(n)),
        );
    }

    /// Number of registered obstacles, including out-of-bounds ones.
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Iterate over registered obstacles in no particular order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.obstacles.iter().copied()
    }

    /// Iterate over the free cells inside the bounds, row by row from `y = 0`.
    pub fn free_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds().iter().filter(|&p| !self.is_obstacle(p))
    }
}

/// Unchecked serde mirror of [`Grid`], validated through [`Grid::try_new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    #[serde(default)]
    obstacles: HashSet<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let mut grid = Self::try_new(raw.width, raw.height)?;
        grid.obstacles = raw.obstacles;
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let ch = if self.is_obstacle(Point::new(x, y)) {
                    OBSTACLE_CHAR
                } else {
                    FREE_CHAR
                };
                write!(f, "{ch}")?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not positive.
    InvalidSize { width: i32, height: i32 },
    /// A text row does not match the width of the first row.
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#` or `.` was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid size must be positive, got {width}x{height}")
            }
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid line {line} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid contains invalid character '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.bounds().len(), 12);
        assert_eq!(g.obstacle_count(), 0);
        assert_eq!(g.free_cells().count(), 12);
    }

    #[test]
    fn try_new_rejects_bad_size() {
        assert_eq!(
            Grid::try_new(0, 3),
            Err(GridError::InvalidSize {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::try_new(3, -1).is_err());
    }

    #[test]
    #[should_panic(expected = "grid size must be positive")]
    fn new_panics_on_bad_size() {
        let _ = Grid::new(-2, 2);
    }

    #[test]
    fn validity_checks_bounds_and_obstacles() {
        let mut g = Grid::new(3, 3);
        g.add_obstacle(Point::new(1, 1));
        assert!(g.is_valid(Point::new(0, 0)));
        assert!(g.is_valid(Point::new(2, 2)));
        assert!(!g.is_valid(Point::new(1, 1)));
        assert!(!g.is_valid(Point::new(3, 0)));
        assert!(!g.is_valid(Point::new(0, -1)));
    }

    #[test]
    fn out_of_bounds_obstacle() {
        let mut g = Grid::new(2, 2);
        let far = Point::new(10, 10);
        assert!(!g.is_obstacle(far));
        assert!(g.add_obstacle(far));
        assert!(!g.add_obstacle(far));
        assert!(g.is_obstacle(far));
        assert!(!g.is_valid(far));
        assert_eq!(g.obstacle_count(), 1);
        assert_eq!(g.free_cells().count(), 4);
    }

    #[test]
    fn remove_obstacle() {
        let mut g = Grid::new(2, 2);
        let p = Point::new(1, 0);
        g.add_obstacle(p);
        assert!(g.remove_obstacle(p));
        assert!(!g.remove_obstacle(p));
        assert!(g.is_valid(p));
    }

    #[test]
    fn neighbors_order_and_filtering() {
        let mut g = Grid::new(3, 3);
        let c = Point::new(1, 1);
        assert_eq!(
            g.neighbors(c),
            vec![
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(0, 1),
            ]
        );
        g.add_obstacle(Point::new(2, 1));
        assert_eq!(
            g.neighbors(c),
            vec![Point::new(1, 2), Point::new(1, 0), Point::new(0, 1)]
        );
        // Corner: only in-bounds cells.
        assert_eq!(
            g.neighbors(Point::new(0, 0)),
            vec![Point::new(0, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn neighbors_at_extreme_coordinates() {
        let g = Grid::new(3, 3);
        assert!(g.neighbors(Point::new(i32::MAX, 0)).is_empty());
        assert!(g.neighbors(Point::new(i32::MIN, i32::MAX)).is_empty());
        // Out-of-bounds points still see in-bounds neighbours.
        assert_eq!(g.neighbors(Point::new(-1, 0)), vec![Point::new(0, 0)]);
    }

    #[test]
    fn invalid_char_message() {
        let err = Grid::from_ascii("?").unwrap_err();
        assert_eq!(err.to_string(), "grid contains invalid character '?' at (0, 0)");
    }

    #[test]
    fn neighbors_into_appends() {
        let g = Grid::new(2, 1);
        let mut buf = vec![Point::new(9, 9)];
        g.neighbors_into(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(9, 9), Point::new(1, 0)]);
    }

    #[test]
    fn ascii_round_trip() {
        let text = "\
..#
.#.
...";
        let g = Grid::from_ascii(text).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 3);
        // First line is the top row.
        assert!(g.is_obstacle(Point::new(2, 2)));
        assert!(g.is_obstacle(Point::new(1, 1)));
        assert!(!g.is_obstacle(Point::new(0, 0)));
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn ascii_errors() {
        assert_eq!(
            Grid::from_ascii(""),
            Err(GridError::InvalidSize {
                width: 0,
                height: 0
            })
        );
        assert_eq!(
            Grid::from_ascii("..\n...").unwrap_err(),
            GridError::Ragged {
                line: 2,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(
            Grid::from_ascii("..\n.x").unwrap_err(),
            GridError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 0)
            }
        );
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
